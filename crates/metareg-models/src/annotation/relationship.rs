use crate::annotation::AnnotationName;
use serde::{Deserialize, Serialize};

///
/// RelationshipAnnotation
///
/// Declares that a field's value references another entity's identifier,
/// together with the entity types that reference may legally point at.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipAnnotation {
    pub name: String,

    #[serde(default)]
    pub entity_types: Vec<String>,
}

impl AnnotationName for RelationshipAnnotation {
    const ANNOTATION_NAME: &'static str = "Relationship";
}
