use crate::error::{ExtractError, Result};
use crate::kind::Kind;
use crate::value::{FieldMap, FieldValue};
use serde::Deserialize;
use serde_yaml::{Deserializer, Value};
use std::io::Read;

/// Decode the first YAML document of a stream. Its top level must be a mapping.
///
/// An empty stream or document decodes to an empty map. Documents after the
/// first `---` separator are ignored.
pub fn decode_yaml<R: Read>(reader: R) -> Result<FieldMap> {
    let value = match Deserializer::from_reader(reader).next() {
        Some(document) => {
            Value::deserialize(document).map_err(|e| ExtractError::decode(Kind::Yaml, e))?
        }
        None => Value::Null,
    };

    match convert(value)? {
        FieldValue::Map(fields) => Ok(fields),
        FieldValue::Null => Ok(FieldMap::new()),
        _ => Err(ExtractError::decode(Kind::Yaml, "top-level value is not a mapping")),
    }
}

fn convert(value: Value) -> Result<FieldValue> {
    Ok(match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => FieldValue::Integer(i),
            (None, Some(x)) => FieldValue::from(x),
            (None, None) => FieldValue::Text(n.to_string()),
        },
        Value::String(s) => FieldValue::Text(s),
        Value::Sequence(items) => {
            FieldValue::List(items.into_iter().map(convert).collect::<Result<_>>()?)
        }
        Value::Mapping(mapping) => {
            let mut fields = FieldMap::new();
            for (key, value) in mapping {
                fields.insert(key_to_string(key)?, convert(value)?);
            }
            FieldValue::Map(fields)
        }
        Value::Tagged(tagged) => convert(tagged.value)?,
    })
}

fn key_to_string(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => key_to_string(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err(ExtractError::decode(Kind::Yaml, "mapping key is not a scalar"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::to_json;
    use crate::record::{MetadataRecord, Payload};

    #[test]
    fn decodes_nested_mapping() {
        let doc = "title: Release\nversion: 2\nauthors:\n  - ana\n  - li\nbuild:\n  debug: false\n  opt: 3.5\n";
        let fields = decode_yaml(doc.as_bytes()).unwrap();
        assert_eq!(fields["title"], FieldValue::from("Release"));
        assert_eq!(fields["version"], FieldValue::Integer(2));
        assert_eq!(fields["authors"].as_list().unwrap().len(), 2);
        let build = fields["build"].as_map().unwrap();
        assert_eq!(build["debug"], FieldValue::Bool(false));
        assert_eq!(build["opt"], FieldValue::Float(3.5));
    }

    #[test]
    fn scalar_keys_are_stringified() {
        let fields = decode_yaml("1: one\ntrue: yes\n".as_bytes()).unwrap();
        assert_eq!(fields["1"], FieldValue::from("one"));
        assert!(fields.contains_key("true"));
    }

    #[test]
    fn empty_documents_are_empty_maps() {
        assert!(decode_yaml("{}".as_bytes()).unwrap().is_empty());
        assert!(decode_yaml("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn only_the_first_document_is_read() {
        let fields = decode_yaml("a: 1\n---\nb: 2\n".as_bytes()).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["a"], FieldValue::Integer(1));

        let fields = decode_yaml("---\nname: first\n---\n- not a mapping\n".as_bytes()).unwrap();
        assert_eq!(fields["name"], FieldValue::from("first"));
    }

    #[test]
    fn non_finite_floats_survive_round_trip() {
        let fields = decode_yaml("x: .nan\ny: .inf\nz: -.inf\nw: 0.5\n".as_bytes()).unwrap();
        assert_eq!(fields["x"], FieldValue::from(".nan"));
        assert_eq!(fields["y"], FieldValue::from(".inf"));
        assert_eq!(fields["z"], FieldValue::from("-.inf"));
        assert_eq!(fields["w"], FieldValue::Float(0.5));

        let records = vec![MetadataRecord::new("floats.yaml", Payload::new(Kind::Yaml, fields))];
        let json = to_json(&records).unwrap();
        assert!(!json.contains("null"));

        let parsed: Vec<MetadataRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn rejects_malformed_and_non_mappings() {
        assert!(decode_yaml("key: [unclosed".as_bytes()).is_err());
        assert!(decode_yaml("- a\n- b\n".as_bytes()).is_err());
        assert!(decode_yaml("? [a, b]\n: c\n".as_bytes()).is_err());
    }
}
