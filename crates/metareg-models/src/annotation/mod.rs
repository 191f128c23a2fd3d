//! Typed views over the loosely-typed annotation payloads found in schema
//! property maps. Each payload is parsed exactly once at the build boundary;
//! downstream code only ever sees these structs.

mod aspect;
mod entity;
mod relationship;
mod searchable;
mod timeseries;

pub use aspect::{AspectAnnotation, AspectKind};
pub use entity::EntityAnnotation;
pub use relationship::RelationshipAnnotation;
pub use searchable::SearchableAnnotation;
pub use timeseries::{TimeseriesFieldAnnotation, TimeseriesFieldCollectionAnnotation};

use crate::error::ModelValidationError;
use serde::de::DeserializeOwned;
use serde_json::Value;

///
/// AnnotationName
///
/// Property-map key under which an annotation payload is stored.
///

pub trait AnnotationName {
    const ANNOTATION_NAME: &'static str;
}

/// Parse an annotation payload into its typed form, attributing failures to
/// the schema that carried it.
pub fn parse_annotation<T>(payload: &Value, schema_name: &str) -> Result<T, ModelValidationError>
where
    T: AnnotationName + DeserializeOwned,
{
    serde_json::from_value(payload.clone()).map_err(|e| ModelValidationError::Annotation {
        annotation: T::ANNOTATION_NAME,
        schema: schema_name.to_string(),
        message: e.to_string(),
    })
}
