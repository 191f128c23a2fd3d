use crate::{
    annotation::AspectAnnotation,
    spec::{
        RelationshipFieldSpec, SearchableFieldSpec, TimeseriesFieldCollectionSpec,
        TimeseriesFieldSpec,
    },
};
use metareg_schema::node::RecordSchema;
use serde::Serialize;

///
/// AspectSpec
///
/// Compiled view of one aspect record: its annotation plus every field
/// spec discovered during traversal, each list in discovery order.
/// Owned exclusively by its EntitySpec once attached.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AspectSpec {
    annotation: AspectAnnotation,
    searchable_field_specs: Vec<SearchableFieldSpec>,
    relationship_field_specs: Vec<RelationshipFieldSpec>,
    timeseries_field_specs: Vec<TimeseriesFieldSpec>,
    timeseries_field_collection_specs: Vec<TimeseriesFieldCollectionSpec>,
    schema: RecordSchema,
}

impl AspectSpec {
    #[must_use]
    pub const fn new(
        annotation: AspectAnnotation,
        searchable_field_specs: Vec<SearchableFieldSpec>,
        relationship_field_specs: Vec<RelationshipFieldSpec>,
        timeseries_field_specs: Vec<TimeseriesFieldSpec>,
        timeseries_field_collection_specs: Vec<TimeseriesFieldCollectionSpec>,
        schema: RecordSchema,
    ) -> Self {
        Self {
            annotation,
            searchable_field_specs,
            relationship_field_specs,
            timeseries_field_specs,
            timeseries_field_collection_specs,
            schema,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.annotation.name
    }

    #[must_use]
    pub fn is_timeseries(&self) -> bool {
        self.annotation.is_timeseries()
    }

    #[must_use]
    pub const fn annotation(&self) -> &AspectAnnotation {
        &self.annotation
    }

    #[must_use]
    pub fn searchable_field_specs(&self) -> &[SearchableFieldSpec] {
        &self.searchable_field_specs
    }

    #[must_use]
    pub fn relationship_field_specs(&self) -> &[RelationshipFieldSpec] {
        &self.relationship_field_specs
    }

    #[must_use]
    pub fn timeseries_field_specs(&self) -> &[TimeseriesFieldSpec] {
        &self.timeseries_field_specs
    }

    #[must_use]
    pub fn timeseries_field_collection_specs(&self) -> &[TimeseriesFieldCollectionSpec] {
        &self.timeseries_field_collection_specs
    }

    /// Underlying record schema this aspect was compiled from.
    #[must_use]
    pub const fn record_schema(&self) -> &RecordSchema {
        &self.schema
    }
}
