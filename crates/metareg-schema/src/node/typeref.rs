use crate::node::DataSchema;
use serde::Serialize;

///
/// TyperefSchema
///
/// Named alias wrapping another type; transparently dereferenceable.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TyperefSchema {
    pub name: String,
    pub referenced: Box<DataSchema>,
}

impl TyperefSchema {
    #[must_use]
    pub fn new(name: impl Into<String>, referenced: DataSchema) -> Self {
        Self {
            name: name.into(),
            referenced: Box::new(referenced),
        }
    }

    #[must_use]
    pub fn referenced(&self) -> &DataSchema {
        &self.referenced
    }
}
