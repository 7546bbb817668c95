use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use metadata_extractor::report::LogReporter;
use metadata_extractor::{ExtractError, config, output, pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "metadata-extractor",
    version,
    about = "Extract EXIF, YAML, JSON and XML metadata from files and ZIP archives"
)]
struct Cli {
    /// Files or ZIP archives to extract metadata from
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Comma-separated list of files, in addition to PATH
    #[arg(short, long, value_name = "FILES", value_delimiter = ',')]
    files: Vec<PathBuf>,

    /// Save the combined metadata as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log file (appended to)
    #[arg(short, long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Type of metadata to extract (exif, yaml, json, xml, all)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    kind: Option<String>,

    /// Path to config file (default: config.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initialize a default config.json and exit
    #[arg(long)]
    init: bool,

    /// Don't print extracted metadata to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle --init
    if cli.init {
        let config = config::Config::default();
        let path = cli.config.as_deref();
        config.save(path)?;
        let save_path = match path {
            Some(p) => p.to_path_buf(),
            None => config::Config::config_path()?,
        };
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    // Load config, then let flags override it
    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(kind) = cli.kind {
        config.kind_filter = kind;
    }
    if let Some(output) = cli.output {
        config.output.path = Some(output);
    }
    if let Some(log) = cli.log {
        config.output.log_file = log;
    }

    let inputs: Vec<PathBuf> = cli.paths.into_iter().chain(cli.files).collect();
    if inputs.is_empty() {
        return Err(ExtractError::Config(
            "Please specify at least one filename. Use --help for usage.".into(),
        )
        .into());
    }

    init_logging(&config.output.log_file, cli.verbose)?;
    let options = config.extract_options()?;

    log::info!(
        "Processing {} path(s), metadata type: {}",
        inputs.len(),
        options.filter
    );
    let records = pipeline::extract_paths(&inputs, &options, &mut LogReporter);

    if !cli.quiet {
        for record in &records {
            print!("{}", output::render_record(record));
        }
    }

    if let Some(ref path) = config.output.path {
        output::write_records(&records, path)
            .with_context(|| format!("Error saving metadata to {}", path.display()))?;
        println!("All metadata saved to {}", path.display());
    }

    log::info!("Process completed successfully: {} record(s)", records.len());
    Ok(())
}

/// Send all log output to `log_file`, appending, with second-resolution timestamps.
fn init_logging(log_file: &Path, verbose: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            ExtractError::Config(format!(
                "Failed to open log file {}: {e}",
                log_file.display()
            ))
        })?;

    let log_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_secs()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
