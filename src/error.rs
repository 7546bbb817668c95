use crate::kind::Kind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Everything that can go wrong while extracting metadata.
///
/// All variants except [`ExtractError::Config`] are per-item: the pipeline
/// reports them and moves on to the next file or archive entry.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The extension is not one of the known kinds.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    /// Open, create or copy failure on a file or scratch file.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The archive (or one of its entries) could not be read.
    #[error("failed to read ZIP archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The format library rejected the content.
    #[error("failed to decode {kind} data: {source}")]
    Decode {
        kind: Kind,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Invalid startup arguments or an unusable log/output destination.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ExtractError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn decode(
        kind: Kind,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Decode {
            kind,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = ExtractError::io(
            "failed to open file a.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "failed to open file a.json: missing");

        let err = ExtractError::decode(Kind::Yaml, "truncated");
        assert_eq!(err.to_string(), "failed to decode YAML data: truncated");
    }
}
