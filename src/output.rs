//! Output document writing and plain-text rendering of records.

use crate::error::{ExtractError, Result};
use crate::record::MetadataRecord;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialize records as a pretty-printed JSON array (two-space indent),
/// newline-terminated, in input order.
pub fn to_json(records: &[MetadataRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)
        .map_err(|e| ExtractError::io("failed to encode metadata", e.into()))?;
    json.push('\n');
    Ok(json)
}

/// Write the output document to `path`.
///
/// The document is written to a temporary file next to `path` and moved over
/// it once complete, so a failed write leaves any previous file untouched.
pub fn write_records(records: &[MetadataRecord], path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let create_err = |e: io::Error| ExtractError::io(format!("failed to create output file {}", path.display()), e);

    let mut tmp = NamedTempFile::new_in(dir).map_err(create_err)?;
    let json = to_json(records)?;
    tmp.write_all(json.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| ExtractError::io("failed to encode metadata", e))?;
    tmp.persist(path).map_err(|e| create_err(e.error))?;

    log::info!("Saved {} record(s) to {}", records.len(), path.display());
    Ok(())
}

/// Human-readable listing of one record: a header line, then `key: value` per field.
pub fn render_record(record: &MetadataRecord) -> String {
    let mut out = format!("Metadata for {} ({}):\n", record.filename(), record.kind());
    for (key, value) in record.fields() {
        let _ = writeln!(out, "{key}: {value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use crate::record::Payload;
    use crate::value::{FieldMap, FieldValue};
    use std::fs;
    use tempfile::TempDir;

    fn records() -> Vec<MetadataRecord> {
        let mut exif = FieldMap::new();
        exif.insert("Make".into(), FieldValue::from("Canon"));
        let mut json = FieldMap::new();
        json.insert("count".into(), FieldValue::Integer(2));
        json.insert("tags".into(), FieldValue::List(vec![FieldValue::from("a")]));
        vec![
            MetadataRecord::new("b.jpg", Payload::new(Kind::Exif, exif)),
            MetadataRecord::new("a.json", Payload::new(Kind::Json, json)),
            MetadataRecord::new("c.xml", Payload::new(Kind::Xml, FieldMap::new())),
        ]
    }

    #[test]
    fn json_layout() {
        let json = to_json(&records()[..1]).unwrap();
        let expected = "[\n  {\n    \"Filename\": \"b.jpg\",\n    \"Type\": \"EXIF\",\n    \"Data\": {\n      \"Make\": \"Canon\"\n    }\n  }\n]\n";
        assert_eq!(json, expected);
        assert_eq!(to_json(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn round_trip_preserves_records() {
        let original = records();
        let json = to_json(&original).unwrap();

        let parsed: Vec<MetadataRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);

        let raw: serde_json::Value = serde_json::from_str(&json).unwrap();
        let types: Vec<_> = raw
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["Type"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(types, vec!["EXIF", "JSON", "XML"]);
    }

    #[test]
    fn write_records_replaces_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale").unwrap();

        write_records(&records(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json(&records()).unwrap());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_records_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("out.json");
        assert!(matches!(write_records(&records(), &path), Err(ExtractError::Io { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn render_lists_fields() {
        let text = render_record(&records()[1]);
        assert_eq!(text, "Metadata for a.json (JSON):\ncount: 2\ntags: [\"a\"]\n");
    }
}
