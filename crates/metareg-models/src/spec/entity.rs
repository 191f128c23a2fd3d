use crate::{
    annotation::EntityAnnotation,
    spec::{AspectSpec, RelationshipFieldSpec, SearchableFieldSpec, TimeseriesFieldSpec},
};
use metareg_schema::node::{RecordSchema, TyperefSchema};
use serde::Serialize;

///
/// EntitySpec
///
/// Compiled, validated view of one entity definition. Constructed once by
/// the builder and immutable afterwards; exclusively owns its AspectSpecs.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntitySpec {
    annotation: EntityAnnotation,
    aspect_specs: Vec<AspectSpec>,
    schema: RecordSchema,

    /// Typeref wrapping the aspect union; absent when the spec was built
    /// from a precomputed aspect list.
    #[serde(skip_serializing_if = "Option::is_none")]
    aspect_typeref: Option<TyperefSchema>,
}

impl EntitySpec {
    #[must_use]
    pub const fn new(
        annotation: EntityAnnotation,
        aspect_specs: Vec<AspectSpec>,
        schema: RecordSchema,
        aspect_typeref: Option<TyperefSchema>,
    ) -> Self {
        Self {
            annotation,
            aspect_specs,
            schema,
            aspect_typeref,
        }
    }

    /// Registry name; unique case-insensitively across one build.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.annotation.name
    }

    #[must_use]
    pub fn key_aspect_name(&self) -> &str {
        &self.annotation.key_aspect
    }

    #[must_use]
    pub const fn annotation(&self) -> &EntityAnnotation {
        &self.annotation
    }

    /// Aspects in aspect-union member order.
    #[must_use]
    pub fn aspect_specs(&self) -> &[AspectSpec] {
        &self.aspect_specs
    }

    #[must_use]
    pub fn aspect_spec(&self, name: &str) -> Option<&AspectSpec> {
        self.aspect_specs.iter().find(|a| a.name() == name)
    }

    /// The aspect whose fields compose this entity's identifier. Guaranteed
    /// present on any spec returned by a builder.
    #[must_use]
    pub fn key_aspect_spec(&self) -> Option<&AspectSpec> {
        self.aspect_spec(&self.annotation.key_aspect)
    }

    #[must_use]
    pub const fn record_schema(&self) -> &RecordSchema {
        &self.schema
    }

    #[must_use]
    pub const fn aspect_typeref(&self) -> Option<&TyperefSchema> {
        self.aspect_typeref.as_ref()
    }

    /// All searchable field specs across this entity's aspects.
    pub fn searchable_field_specs(&self) -> impl Iterator<Item = &SearchableFieldSpec> {
        self.aspect_specs
            .iter()
            .flat_map(|a| a.searchable_field_specs().iter())
    }

    /// All relationship field specs across this entity's aspects.
    pub fn relationship_field_specs(&self) -> impl Iterator<Item = &RelationshipFieldSpec> {
        self.aspect_specs
            .iter()
            .flat_map(|a| a.relationship_field_specs().iter())
    }

    /// All timeseries field specs across this entity's aspects.
    pub fn timeseries_field_specs(&self) -> impl Iterator<Item = &TimeseriesFieldSpec> {
        self.aspect_specs
            .iter()
            .flat_map(|a| a.timeseries_field_specs().iter())
    }
}
