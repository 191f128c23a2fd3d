//! Field-spec extractors. Each is a [`SchemaVisitor`] handed to the
//! traversal engine for one annotation kind; the engine does the walking,
//! the extractor only parses the payload and appends a spec, preserving
//! discovery order.

use crate::{
    annotation::{
        AnnotationName, RelationshipAnnotation, SearchableAnnotation, TimeseriesFieldAnnotation,
        TimeseriesFieldCollectionAnnotation, parse_annotation,
    },
    error::ModelValidationError,
    spec::{
        RelationshipFieldSpec, SearchableFieldSpec, TimeseriesFieldCollectionSpec,
        TimeseriesFieldSpec,
    },
    traverse::SchemaVisitor,
};
use metareg_schema::{node::DataSchema, path::FieldPath};
use serde_json::Value;

fn schema_context(schema: &DataSchema, path: &FieldPath) -> String {
    schema
        .name()
        .map_or_else(|| path.to_string(), ToString::to_string)
}

///
/// SearchableFieldSpecExtractor
///

#[derive(Debug, Default)]
pub struct SearchableFieldSpecExtractor {
    specs: Vec<SearchableFieldSpec>,
}

impl SearchableFieldSpecExtractor {
    #[must_use]
    pub fn into_specs(self) -> Vec<SearchableFieldSpec> {
        self.specs
    }
}

impl SchemaVisitor for SearchableFieldSpecExtractor {
    fn visit_field(
        &mut self,
        path: &FieldPath,
        schema: &DataSchema,
        _annotation: &str,
        payload: &Value,
    ) -> Result<(), ModelValidationError> {
        let annotation: SearchableAnnotation =
            parse_annotation(payload, &schema_context(schema, path))?;
        self.specs
            .push(SearchableFieldSpec::new(path.clone(), annotation));

        Ok(())
    }
}

///
/// RelationshipFieldSpecExtractor
///
/// Also the source of the destination entity-type names checked in the
/// global cross-reference pass.
///

#[derive(Debug, Default)]
pub struct RelationshipFieldSpecExtractor {
    specs: Vec<RelationshipFieldSpec>,
}

impl RelationshipFieldSpecExtractor {
    #[must_use]
    pub fn into_specs(self) -> Vec<RelationshipFieldSpec> {
        self.specs
    }
}

impl SchemaVisitor for RelationshipFieldSpecExtractor {
    fn visit_field(
        &mut self,
        path: &FieldPath,
        schema: &DataSchema,
        _annotation: &str,
        payload: &Value,
    ) -> Result<(), ModelValidationError> {
        let annotation: RelationshipAnnotation =
            parse_annotation(payload, &schema_context(schema, path))?;
        self.specs
            .push(RelationshipFieldSpec::new(path.clone(), annotation));

        Ok(())
    }
}

///
/// TimeseriesFieldSpecExtractor
///
/// Registered for both timeseries annotation kinds in a single traversal;
/// dispatches on the matched key.
///

#[derive(Debug, Default)]
pub struct TimeseriesFieldSpecExtractor {
    field_specs: Vec<TimeseriesFieldSpec>,
    collection_specs: Vec<TimeseriesFieldCollectionSpec>,
}

impl TimeseriesFieldSpecExtractor {
    #[must_use]
    pub fn into_specs(self) -> (Vec<TimeseriesFieldSpec>, Vec<TimeseriesFieldCollectionSpec>) {
        (self.field_specs, self.collection_specs)
    }
}

impl SchemaVisitor for TimeseriesFieldSpecExtractor {
    fn visit_field(
        &mut self,
        path: &FieldPath,
        schema: &DataSchema,
        annotation: &str,
        payload: &Value,
    ) -> Result<(), ModelValidationError> {
        let context = schema_context(schema, path);

        if annotation == TimeseriesFieldCollectionAnnotation::ANNOTATION_NAME {
            let annotation: TimeseriesFieldCollectionAnnotation =
                parse_annotation(payload, &context)?;
            self.collection_specs
                .push(TimeseriesFieldCollectionSpec::new(path.clone(), annotation));
        } else {
            let annotation: TimeseriesFieldAnnotation = parse_annotation(payload, &context)?;
            self.field_specs
                .push(TimeseriesFieldSpec::new(path.clone(), annotation));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn searchable_extractor_preserves_discovery_order() {
        let mut extractor = SearchableFieldSpecExtractor::default();
        for field in ["title", "description", "tags"] {
            extractor
                .visit_field(
                    &FieldPath::of(field),
                    &DataSchema::string(),
                    "Searchable",
                    &json!({}),
                )
                .unwrap();
        }

        let specs = extractor.into_specs();
        let paths: Vec<String> = specs.iter().map(|s| s.path.to_string()).collect();
        assert_eq!(paths, vec!["title", "description", "tags"]);
    }

    #[test]
    fn relationship_extractor_rejects_nameless_annotations() {
        let mut extractor = RelationshipFieldSpecExtractor::default();
        let result = extractor.visit_field(
            &FieldPath::of("owner"),
            &DataSchema::string(),
            "Relationship",
            &json!({ "entityTypes": ["corpUser"] }),
        );

        assert!(matches!(
            result,
            Err(ModelValidationError::Annotation { .. })
        ));
    }

    #[test]
    fn timeseries_extractor_dispatches_on_annotation_key() {
        let mut extractor = TimeseriesFieldSpecExtractor::default();
        extractor
            .visit_field(
                &FieldPath::of("rowCount"),
                &DataSchema::long(),
                "TimeseriesField",
                &json!({}),
            )
            .unwrap();
        extractor
            .visit_field(
                &FieldPath::of("columnStats"),
                &DataSchema::array(DataSchema::string()),
                "TimeseriesFieldCollection",
                &json!({ "key": "columnName" }),
            )
            .unwrap();

        let (fields, collections) = extractor.into_specs();
        assert_eq!(fields.len(), 1);
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].key(), "columnName");
    }
}
