use crate::annotation::AnnotationName;
use serde::{Deserialize, Serialize};

///
/// SearchableAnnotation
///
/// Index-construction hints for one field. Carried opaquely on the field
/// spec; the builders never reinterpret these values.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Index field name override; defaults to the schema field path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_by_default: Option<bool>,

    #[serde(default)]
    pub enable_autocomplete: bool,
}

impl AnnotationName for SearchableAnnotation {
    const ANNOTATION_NAME: &'static str = "Searchable";
}
