//! Format dispatch: turn a file plus its [`Kind`] into a [`FieldMap`].
//!
//! Every decoder reads a complete, seekable file. Archive entries are copied to
//! a scratch file first (see [`crate::archive`]).

mod json;
mod xml;
mod yaml;

pub use json::decode_json;
pub use xml::decode_xml;
pub use yaml::decode_yaml;

use crate::error::{ExtractError, Result};
use crate::exif::read_exif;
use crate::kind::Kind;
use crate::value::FieldMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decode the file at `path` as `kind`.
pub fn decode_path(kind: Kind, path: &Path) -> Result<FieldMap> {
    log::debug!("Extracting {kind} data from {}", path.display());
    let file = File::open(path)
        .map_err(|e| ExtractError::io(format!("failed to open file {}", path.display()), e))?;

    match kind {
        Kind::Exif => read_exif(file),
        Kind::Yaml => decode_yaml(BufReader::new(file)),
        Kind::Json => decode_json(BufReader::new(file)),
        Kind::Xml => decode_xml(BufReader::new(file)),
    }
}
