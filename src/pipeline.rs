use crate::archive::walk_archive;
use crate::decode::decode_path;
use crate::error::Result;
use crate::kind::{Kind, KindFilter, is_archive};
use crate::record::{MetadataRecord, Payload};
use crate::report::Reporter;
use std::path::{Path, PathBuf};

/// Settings shared by every file and archive of one run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Which records to keep. Defaults to [`KindFilter::All`].
    pub filter: KindFilter,
    /// Directory for archive scratch files. System temp dir when `None`.
    pub temp_dir: Option<PathBuf>,
}

/// Extract metadata from a single, non-archive file.
///
/// The kind comes from the extension alone; the record's filename is the path
/// as given.
///
/// # Example
///
/// ```rust,no_run
/// use metadata_extractor::pipeline::extract_file;
/// use std::path::Path;
///
/// let record = extract_file(Path::new("deploy.yaml")).unwrap();
/// println!("{} fields", record.fields().len());
/// ```
pub fn extract_file(path: &Path) -> Result<MetadataRecord> {
    let kind = Kind::from_path(path)?;
    let fields = decode_path(kind, path)?;
    Ok(MetadataRecord::new(path.display().to_string(), Payload::new(kind, fields)))
}

/// Extract metadata from a mix of files and ZIP archives, one path at a time.
///
/// Records keep the order of `paths`, archive records in listing order at the
/// archive's position. Direct files are kept when the filter accepts their
/// resolved kind; archive records were already filtered by extension inside
/// [`walk_archive`] and are appended as returned.
///
/// Missing paths, unsupported files, decode failures and unreadable archives
/// are reported and skipped.
pub fn extract_paths(
    paths: &[PathBuf],
    options: &ExtractOptions,
    reporter: &mut dyn Reporter,
) -> Vec<MetadataRecord> {
    let mut records = Vec::new();

    for path in paths {
        if !path.exists() {
            reporter.warn(&format!("File does not exist: {}", path.display()));
            continue;
        }

        if is_archive(path) {
            match walk_archive(path, options, reporter) {
                Ok(found) => records.extend(found),
                Err(err) => reporter.skipped(&format!("ZIP file {}", path.display()), &err),
            }
            continue;
        }

        reporter.info(&format!("Extracting metadata from {}", path.display()));
        match extract_file(path) {
            Ok(record) if options.filter.accepts_kind(record.kind()) => records.push(record),
            Ok(record) => {
                log::debug!("Skipping {}: {} filtered out", path.display(), record.kind());
            }
            Err(err) => reporter.skipped(&format!("file {}", path.display()), &err),
        }
    }

    records
}
