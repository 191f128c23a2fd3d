use crate::{Properties, node::DataSchema};
use serde::Serialize;

///
/// RecordSchema
///
/// Named record with ordered fields and a string-keyed property map.
/// Entity and aspect annotations live in `properties`.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<RecordField>,

    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

impl RecordSchema {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: RecordField) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&RecordField> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.get(key)
    }
}

///
/// RecordField
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordField {
    pub name: String,
    pub ty: DataSchema,

    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

impl RecordField {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: DataSchema) -> Self {
        Self {
            name: name.into(),
            ty,
            properties: Properties::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.get(key)
    }
}
