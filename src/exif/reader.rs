use crate::error::{ExtractError, Result};
use crate::kind::Kind;
use crate::value::{FieldMap, FieldValue};
use nom_exif::*;
use std::fs::File;

/// Read every EXIF tag of an image file.
///
/// Tags are visited in the order the container stores them (primary IFD,
/// then thumbnail IFD). A field name seen twice keeps the last value.
pub fn read_exif(file: File) -> Result<FieldMap> {
    let mut parser = MediaParser::new();
    let ms = MediaSource::file(file).map_err(|e| ExtractError::decode(Kind::Exif, e.to_string()))?;

    let iter: ExifIter = parser
        .parse(ms)
        .map_err(|e| ExtractError::decode(Kind::Exif, e.to_string()))?;

    let fields = collect_fields(iter.filter_map(|entry| {
        let value = entry.get_value()?;
        Some((field_name(&entry), value.to_string()))
    }));
    log::debug!("Decoded {} EXIF field(s)", fields.len());
    Ok(fields)
}

/// Insert visited `(name, value)` pairs, later visits overwriting earlier ones.
pub fn collect_fields<I>(visits: I) -> FieldMap
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut fields = FieldMap::new();
    for (name, value) in visits {
        fields.insert(name, FieldValue::Text(entry_to_string(&value)));
    }
    fields
}

/// Tag name, or the hex tag code for tags nom-exif has no name for.
fn field_name(entry: &ParsedExifEntry) -> String {
    match entry.tag() {
        Some(tag) => tag.to_string(),
        None => format!("0x{:04x}", entry.tag_code()),
    }
}

fn entry_to_string(value: &str) -> String {
    value.trim().trim_matches('"').to_string()
}
