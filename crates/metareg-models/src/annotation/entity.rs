use crate::annotation::AnnotationName;
use serde::{Deserialize, Serialize};

///
/// EntityAnnotation
///
/// Entity-level metadata: registry name and the aspect whose fields compose
/// the entity's identifier.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnnotation {
    pub name: String,
    pub key_aspect: String,
}

impl AnnotationName for EntityAnnotation {
    const ANNOTATION_NAME: &'static str = "Entity";
}
