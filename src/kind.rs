use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Extensions decoded as image containers carrying EXIF.
const EXIF_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tiff", "bmp"];

/// Filter tokens with a matching kind. Other tokens are accepted but match nothing
/// on direct files.
const KNOWN_FILTERS: &[&str] = &["exif", "yaml", "json", "xml", "all"];

/// The metadata category a file is decoded as.
///
/// Use [`Kind::from_path`] to classify a file by its extension.
///
/// # Example
///
/// ```rust
/// use metadata_extractor::kind::Kind;
/// use std::path::Path;
///
/// assert_eq!(Kind::from_path(Path::new("photo.JPG")).unwrap(), Kind::Exif);
/// assert_eq!(Kind::from_path(Path::new("deploy.yml")).unwrap(), Kind::Yaml);
/// assert!(Kind::from_path(Path::new("notes.txt")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    /// JPEG, PNG, TIFF, BMP: tag table of the image container
    Exif,
    /// `.yaml`, `.yml`
    Yaml,
    /// `.json`
    Json,
    /// `.xml`
    Xml,
}

impl Kind {
    /// Classify an already normalized extension (see [`normalized_extension`]).
    ///
    /// A leading `.` and upper case letters are tolerated.
    pub fn from_extension(ext: &str) -> Result<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            e if EXIF_EXTENSIONS.contains(&e) => Ok(Self::Exif),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(ExtractError::UnsupportedType(ext)),
        }
    }

    /// Classify a file by the extension of its final path component.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_extension(&normalized_extension(path))
    }

    /// Upper-case name used in the output document (`"EXIF"`, `"YAML"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Exif => "EXIF",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Xml => "XML",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower-cased text after the last `.` of the final path component, or an
/// empty string when there is none. `".json"` yields `"json"`.
pub fn normalized_extension(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Whether the path names a ZIP archive to be walked.
pub fn is_archive(path: &Path) -> bool {
    normalized_extension(path) == "zip"
}

/// Selects which records are kept.
///
/// Direct files and archive entries are matched differently:
/// [`KindFilter::accepts_kind`] compares the token against the resolved kind
/// name, case-insensitively, while [`KindFilter::accepts_extension`] compares it
/// textually against the raw entry extension. So `"exif"` never selects a
/// `.jpg` inside an archive and `"yaml"` skips `.yml` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(String),
}

impl KindFilter {
    /// Filter for direct files: match on the resolved kind name.
    pub fn accepts_kind(&self, kind: Kind) -> bool {
        match self {
            Self::All => true,
            Self::Only(token) => token.eq_ignore_ascii_case(kind.name()),
        }
    }

    /// Filter for archive entries: match on the normalized extension token.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(token) => token == ext,
        }
    }

    /// Whether the token is one of `exif|yaml|json|xml|all`.
    pub fn is_known(&self) -> bool {
        match self {
            Self::All => true,
            Self::Only(token) => KNOWN_FILTERS.contains(&token.to_lowercase().as_str()),
        }
    }
}

impl FromStr for KindFilter {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ExtractError::Config("metadata type must not be empty".into()));
        }
        if token == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Only(token.to_string()))
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(token) => f.write_str(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Kind::from_path ──────────────────────────────────────────────

    #[test]
    fn kind_exif_extensions() {
        for ext in &["jpg", "jpeg", "png", "tiff", "bmp"] {
            let path = format!("image.{ext}");
            assert_eq!(Kind::from_path(Path::new(&path)).unwrap(), Kind::Exif, "Expected Exif for .{ext}");
        }
        assert_eq!(Kind::from_path(Path::new("PHOTO.JPG")).unwrap(), Kind::Exif);
    }

    #[test]
    fn kind_document_extensions() {
        assert_eq!(Kind::from_path(Path::new("a.yaml")).unwrap(), Kind::Yaml);
        assert_eq!(Kind::from_path(Path::new("a.YML")).unwrap(), Kind::Yaml);
        assert_eq!(Kind::from_path(Path::new("dir/a.json")).unwrap(), Kind::Json);
        assert_eq!(Kind::from_path(Path::new("a.xml")).unwrap(), Kind::Xml);
    }

    #[test]
    fn kind_unsupported() {
        for name in &["doc.pdf", "photo.tif", "archive.zip", "noext"] {
            match Kind::from_path(Path::new(name)) {
                Err(ExtractError::UnsupportedType(_)) => {}
                other => panic!("Expected UnsupportedType for {name}, got {other:?}"),
            }
        }
        match Kind::from_path(Path::new("notes.TXT")) {
            Err(ExtractError::UnsupportedType(ext)) => assert_eq!(ext, "txt"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn kind_from_extension_strips_separator() {
        assert_eq!(Kind::from_extension(".Json").unwrap(), Kind::Json);
        assert_eq!(Kind::from_extension("xml").unwrap(), Kind::Xml);
    }

    #[test]
    fn classification_is_deterministic() {
        for ext in &["jpg", "yml", "json", "xml", "exe"] {
            let first = Kind::from_extension(ext).ok();
            let second = Kind::from_extension(ext).ok();
            assert_eq!(first, second);
        }
    }

    // ── normalized_extension ─────────────────────────────────────────

    #[test]
    fn extension_normalization() {
        assert_eq!(normalized_extension(Path::new("a/b/Photo.JPEG")), "jpeg");
        assert_eq!(normalized_extension(Path::new("archive.tar.gz")), "gz");
        assert_eq!(normalized_extension(Path::new(".json")), "json");
        assert_eq!(normalized_extension(Path::new("Makefile")), "");
        assert!(is_archive(Path::new("bundle.ZIP")));
        assert!(!is_archive(Path::new("bundle.json")));
    }

    // ── KindFilter ───────────────────────────────────────────────────

    #[test]
    fn filter_parse() {
        assert_eq!("all".parse::<KindFilter>().unwrap(), KindFilter::All);
        assert_eq!("json".parse::<KindFilter>().unwrap(), KindFilter::Only("json".into()));
        assert!("  ".parse::<KindFilter>().is_err());
    }

    #[test]
    fn filter_parse_trims_surrounding_whitespace() {
        assert_eq!(" all\n".parse::<KindFilter>().unwrap(), KindFilter::All);
        let filter: KindFilter = " json ".parse().unwrap();
        assert_eq!(filter, KindFilter::Only("json".into()));
        assert!(filter.accepts_extension("json"));
    }

    #[test]
    fn filter_kind_is_case_insensitive() {
        let filter = KindFilter::Only("Json".into());
        assert!(filter.accepts_kind(Kind::Json));
        assert!(!filter.accepts_kind(Kind::Xml));
        assert!(KindFilter::All.accepts_kind(Kind::Exif));
    }

    #[test]
    fn filter_extension_is_textual() {
        let filter = KindFilter::Only("yaml".into());
        assert!(filter.accepts_extension("yaml"));
        assert!(!filter.accepts_extension("yml"));

        let filter = KindFilter::Only("exif".into());
        assert!(!filter.accepts_extension("jpg"));
        assert!(KindFilter::All.accepts_extension("txt"));
    }

    #[test]
    fn filter_known_tokens() {
        assert!(KindFilter::Only("XML".into()).is_known());
        assert!(!KindFilter::Only("jpg".into()).is_known());
    }
}
