use crate::error::ExtractError;
use crate::kind::KindFilter;
use crate::pipeline::ExtractOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for a metadata extraction run.
///
/// Every section falls back to its defaults when missing from the file, and
/// command-line flags override whatever the file sets.
///
/// # Loading
///
/// ```rust,no_run
/// use metadata_extractor::config::Config;
///
/// // From a JSON file
/// let config = Config::load(Some("config.json".as_ref())).unwrap();
///
/// // Or use defaults and customize
/// let mut config = Config::default();
/// config.kind_filter = "json".into();
/// config.output.path = Some("metadata.json".into());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `exif`, `yaml`, `json`, `xml` or `all`.
    pub kind_filter: String,
    /// Output document and log destination.
    pub output: OutputConfig,
    /// Archive traversal settings.
    pub archive: ArchiveConfig,
}

/// Where results and diagnostics go.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JSON document to write. Nothing is written when `None`.
    pub path: Option<PathBuf>,
    /// Log file, opened in append mode.
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Directory for per-entry scratch files. The system temp dir when `None`.
    pub temp_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kind_filter: "all".to_string(),
            output: OutputConfig::default(),
            archive: ArchiveConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            log_file: PathBuf::from("app.log"),
        }
    }
}

impl Config {
    /// Resolve the config file path, in the same directory as the executable.
    pub fn config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe().context("Failed to get executable path")?;
        let exe_dir = exe_path
            .parent()
            .context("Failed to get executable directory")?;
        Ok(exe_dir.join("config.json"))
    }

    /// Load config from the given path, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            log::warn!(
                "Config file not found at {}. Using defaults.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the given path, or to the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;
        log::info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Build the per-run extraction options.
    ///
    /// An empty filter is rejected. An unrecognized one is kept, since archive
    /// entries are matched against it as a raw extension, but warned about.
    pub fn extract_options(&self) -> std::result::Result<ExtractOptions, ExtractError> {
        let filter: KindFilter = self.kind_filter.parse()?;
        if !filter.is_known() {
            log::warn!(
                "Unrecognized metadata type '{filter}'; expected exif, yaml, json, xml or all"
            );
        }
        Ok(ExtractOptions {
            filter,
            temp_dir: self.archive.temp_dir.clone(),
        })
    }
}
