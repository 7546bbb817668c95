use crate::kind::Kind;
use crate::value::FieldMap;
use serde::{Deserialize, Serialize};

/// Decoded fields, tagged by the kind that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Exif(FieldMap),
    Yaml(FieldMap),
    Json(FieldMap),
    Xml(FieldMap),
}

impl Payload {
    /// Wrap decoded fields in the variant for `kind`.
    pub fn new(kind: Kind, fields: FieldMap) -> Self {
        match kind {
            Kind::Exif => Self::Exif(fields),
            Kind::Yaml => Self::Yaml(fields),
            Kind::Json => Self::Json(fields),
            Kind::Xml => Self::Xml(fields),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Exif(_) => Kind::Exif,
            Self::Yaml(_) => Kind::Yaml,
            Self::Json(_) => Kind::Json,
            Self::Xml(_) => Kind::Xml,
        }
    }

    pub fn fields(&self) -> &FieldMap {
        match self {
            Self::Exif(fields) | Self::Yaml(fields) | Self::Json(fields) | Self::Xml(fields) => fields,
        }
    }

    pub fn into_fields(self) -> FieldMap {
        match self {
            Self::Exif(fields) | Self::Yaml(fields) | Self::Json(fields) | Self::Xml(fields) => fields,
        }
    }
}

/// Metadata extracted from one file or archive entry.
///
/// The kind is read off the payload, so a record can never carry a payload of
/// another kind. Serializes as `{"Filename": ..., "Type": "JSON", "Data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RecordRepr", from = "RecordRepr")]
pub struct MetadataRecord {
    filename: String,
    payload: Payload,
}

impl MetadataRecord {
    pub fn new(filename: impl Into<String>, payload: Payload) -> Self {
        Self {
            filename: filename.into(),
            payload,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn kind(&self) -> Kind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn fields(&self) -> &FieldMap {
        self.payload.fields()
    }
}

/// Wire shape of a record in the output document.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RecordRepr {
    filename: String,
    #[serde(rename = "Type")]
    kind: Kind,
    data: FieldMap,
}

impl From<MetadataRecord> for RecordRepr {
    fn from(record: MetadataRecord) -> Self {
        let kind = record.payload.kind();
        Self {
            filename: record.filename,
            kind,
            data: record.payload.into_fields(),
        }
    }
}

impl From<RecordRepr> for MetadataRecord {
    fn from(repr: RecordRepr) -> Self {
        Self::new(repr.filename, Payload::new(repr.kind, repr.data))
    }
}
