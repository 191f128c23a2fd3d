use crate::annotation::AnnotationName;
use serde::{Deserialize, Serialize};

///
/// AspectAnnotation
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectAnnotation {
    pub name: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AspectKind>,
}

impl AspectAnnotation {
    #[must_use]
    pub fn is_timeseries(&self) -> bool {
        self.kind == Some(AspectKind::Timeseries)
    }
}

impl AnnotationName for AspectAnnotation {
    const ANNOTATION_NAME: &'static str = "Aspect";
}

///
/// AspectKind
///
/// Declared storage/semantics category of an aspect. Absent means a plain
/// versioned aspect.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Timeseries,
}
