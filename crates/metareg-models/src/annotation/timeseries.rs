use crate::annotation::AnnotationName;
use serde::{Deserialize, Serialize};

///
/// TimeseriesFieldAnnotation
///
/// Marks a scalar statistic within a timeseries aspect. The statistic name
/// defaults to the annotated field's path leaf.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeseriesFieldAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AnnotationName for TimeseriesFieldAnnotation {
    const ANNOTATION_NAME: &'static str = "TimeseriesField";
}

///
/// TimeseriesFieldCollectionAnnotation
///
/// Marks an array of per-member statistics; `key` names the member field
/// that identifies each collection entry.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeseriesFieldCollectionAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub key: String,
}

impl AnnotationName for TimeseriesFieldCollectionAnnotation {
    const ANNOTATION_NAME: &'static str = "TimeseriesFieldCollection";
}
