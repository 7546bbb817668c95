//! Metadata extraction from entries of a ZIP archive.

use crate::decode::decode_path;
use crate::error::{ExtractError, Result};
use crate::kind::{Kind, normalized_extension};
use crate::pipeline::ExtractOptions;
use crate::record::{MetadataRecord, Payload};
use crate::report::Reporter;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use zip::ZipArchive;

const SCRATCH_PREFIX: &str = "tmpfile-";

/// Extract metadata from every accepted entry of a ZIP archive, in listing order.
///
/// Directory entries are skipped. An entry is accepted when the kind filter
/// matches its extension token (not its kind, see
/// [`KindFilter::accepts_extension`](crate::kind::KindFilter::accepts_extension)).
/// Each accepted entry is copied to a scratch file that is removed once the
/// decode attempt is over.
///
/// A failing entry is reported and skipped. Only failing to open the archive
/// itself is returned as an error.
pub fn walk_archive(
    path: &Path,
    options: &ExtractOptions,
    reporter: &mut dyn Reporter,
) -> Result<Vec<MetadataRecord>> {
    reporter.info(&format!("Processing ZIP archive {}", path.display()));

    let file = File::open(path)
        .map_err(|e| ExtractError::io(format!("failed to open ZIP archive {}", path.display()), e))?;
    let mut archive = ZipArchive::new(file).map_err(|source| ExtractError::Archive {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for index in 0..archive.len() {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(source) => {
                let err = ExtractError::Archive {
                    path: path.to_path_buf(),
                    source,
                };
                reporter.skipped(&format!("{}[{index}]", path.display()), &err);
                continue;
            }
        };
        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        let ext = normalized_extension(Path::new(&name));
        if !options.filter.accepts_extension(&ext) {
            log::debug!("Skipping {name} in ZIP: filtered out");
            continue;
        }

        match extract_entry(&mut entry, &name, &ext, options.temp_dir.as_deref()) {
            Ok(record) => {
                reporter.info(&format!("Extracted {} metadata from {name} in ZIP", record.kind()));
                records.push(record);
            }
            Err(err) => reporter.skipped(&format!("{name} in ZIP {}", path.display()), &err),
        }
    }

    Ok(records)
}

/// Copy one entry to a scratch file and decode it.
///
/// The scratch file is dropped, and so deleted, on every return path.
fn extract_entry(
    entry: &mut impl Read,
    name: &str,
    ext: &str,
    temp_dir: Option<&Path>,
) -> Result<MetadataRecord> {
    let kind = Kind::from_extension(ext)?;

    let mut scratch = scratch_file(temp_dir)
        .map_err(|e| ExtractError::io(format!("failed to create temp file for {name}"), e))?;
    io::copy(entry, &mut scratch)
        .and_then(|_| scratch.flush())
        .map_err(|e| ExtractError::io(format!("failed to copy {name} to temp file"), e))?;

    let fields = decode_path(kind, scratch.path())?;
    Ok(MetadataRecord::new(name, Payload::new(kind, fields)))
}

fn scratch_file(temp_dir: Option<&Path>) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(SCRATCH_PREFIX);
    match temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
}
