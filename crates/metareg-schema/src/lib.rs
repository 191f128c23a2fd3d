pub mod node;
pub mod path;
pub mod types;

/// Property key map type used for schema-level and field-level annotations.
pub type Properties = std::collections::BTreeMap<String, serde_json::Value>;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Properties,
        node::*,
        path::{FieldPath, PathSegment},
        types::{Primitive, SchemaKind},
    };
    pub use serde::Serialize;
}
