use crate::error::{ExtractError, Result};
use crate::kind::Kind;
use crate::value::{FieldMap, FieldValue};
use std::io::Read;
use xmltree::{Element, XMLNode};

const TEXT_KEY: &str = "#text";

/// Decode an XML document into the fields of its root element.
///
/// Attributes become `@name` keys, child elements are keyed by name (repeated
/// names collapse into a list) and non-blank text lands under `#text`.
pub fn decode_xml<R: Read>(reader: R) -> Result<FieldMap> {
    let root = Element::parse(reader).map_err(|e| ExtractError::decode(Kind::Xml, e.to_string()))?;
    Ok(element_fields(&root))
}

fn element_fields(element: &Element) -> FieldMap {
    let mut fields = FieldMap::new();

    let mut attributes: Vec<_> = element.attributes.iter().collect();
    attributes.sort();
    for (name, value) in attributes {
        fields.insert(format!("@{name}"), FieldValue::Text(value.clone()));
    }

    let mut text = String::new();
    for child in &element.children {
        match child {
            XMLNode::Element(child) => insert_child(&mut fields, qualified_name(child), element_value(child)),
            XMLNode::Text(t) | XMLNode::CData(t) => text.push_str(t),
            _ => {}
        }
    }

    let text = text.trim();
    if !text.is_empty() {
        fields.insert(TEXT_KEY.to_string(), FieldValue::Text(text.to_string()));
    }
    fields
}

fn element_value(element: &Element) -> FieldValue {
    let mut fields = element_fields(element);
    if fields.is_empty() {
        return FieldValue::Null;
    }
    if fields.len() == 1 {
        if let Some(text) = fields.remove(TEXT_KEY) {
            return text;
        }
    }
    FieldValue::Map(fields)
}

fn insert_child(fields: &mut FieldMap, name: String, value: FieldValue) {
    match fields.get_mut(&name) {
        Some(FieldValue::List(items)) => items.push(value),
        Some(existing) => {
            let first = std::mem::replace(existing, FieldValue::Null);
            *existing = FieldValue::List(vec![first, value]);
        }
        None => {
            fields.insert(name, value);
        }
    }
}

fn qualified_name(element: &Element) -> String {
    match &element.prefix {
        Some(prefix) => format!("{prefix}:{}", element.name),
        None => element.name.clone(),
    }
}
