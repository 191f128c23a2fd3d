mod aspect;
mod entity;
mod field;

pub use aspect::AspectSpec;
pub use entity::EntitySpec;
pub use field::{
    RelationshipFieldSpec, SearchableFieldSpec, TimeseriesFieldCollectionSpec, TimeseriesFieldSpec,
};
