use crate::node::DataSchema;
use serde::Serialize;

///
/// ArraySchema
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArraySchema {
    pub items: Box<DataSchema>,
}

impl ArraySchema {
    #[must_use]
    pub fn new(items: DataSchema) -> Self {
        Self {
            items: Box::new(items),
        }
    }

    #[must_use]
    pub fn items(&self) -> &DataSchema {
        &self.items
    }
}
