use crate::error::{ExtractError, Result};
use crate::kind::Kind;
use crate::value::{FieldMap, FieldValue};
use std::io::Read;

/// Decode a JSON document whose top level is an object.
///
/// `null` decodes to an empty map; arrays and scalars are rejected.
pub fn decode_json<R: Read>(reader: R) -> Result<FieldMap> {
    let value: serde_json::Value =
        serde_json::from_reader(reader).map_err(|e| ExtractError::decode(Kind::Json, e))?;

    match FieldValue::from(value) {
        FieldValue::Map(fields) => Ok(fields),
        FieldValue::Null => Ok(FieldMap::new()),
        _ => Err(ExtractError::decode(Kind::Json, "top-level value is not an object")),
    }
}
