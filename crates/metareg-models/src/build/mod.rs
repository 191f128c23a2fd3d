//! The build-and-validate pipeline: schema shape validation, annotation
//! parsing, field-spec extraction, and registry-wide invariant checking.

mod context;
mod validate;

pub use context::RegistryBuildContext;

use crate::{
    annotation::{
        AnnotationName, AspectAnnotation, EntityAnnotation, RelationshipAnnotation,
        SearchableAnnotation, TimeseriesFieldAnnotation, TimeseriesFieldCollectionAnnotation,
        parse_annotation,
    },
    error::ModelValidationError,
    extract::{
        RelationshipFieldSpecExtractor, SearchableFieldSpecExtractor, TimeseriesFieldSpecExtractor,
    },
    spec::{AspectSpec, EntitySpec},
    traverse::{AnnotationTraverser, SchemaTraverser},
};
use log::debug;
use metareg_schema::node::{DataSchema, RecordSchema};
use std::collections::BTreeSet;

///
/// ExtractionMode
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExtractionMode {
    /// Extract every field-level annotation kind.
    #[default]
    Default,

    /// Skip field-level extraction entirely; only entity/aspect-level
    /// metadata is parsed. Structural checks (key aspect, timeseries
    /// timestamp) still run — this mode is about traversal cost, not
    /// validation strictness.
    IgnoreAspectFields,
}

///
/// EntitySpecBuilder
///
/// Compiles entity schema definitions into validated EntitySpecs. Holds
/// the registry-wide accumulation context, so one builder instance spans
/// one registry build; it is not safe for concurrent use.
///

#[derive(Debug)]
pub struct EntitySpecBuilder<T = SchemaTraverser> {
    mode: ExtractionMode,
    traverser: T,
    ctx: RegistryBuildContext,
}

impl EntitySpecBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ExtractionMode::Default)
    }

    #[must_use]
    pub fn with_mode(mode: ExtractionMode) -> Self {
        Self::with_traverser(mode, SchemaTraverser)
    }
}

impl Default for EntitySpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AnnotationTraverser> EntitySpecBuilder<T> {
    /// Build with an injected traversal engine, e.g. a stub in tests.
    #[must_use]
    pub fn with_traverser(mode: ExtractionMode, traverser: T) -> Self {
        Self {
            mode,
            traverser,
            ctx: RegistryBuildContext::new(),
        }
    }

    /// Accumulated registry state, for inspection or post-merge checks.
    #[must_use]
    pub const fn context(&self) -> &RegistryBuildContext {
        &self.ctx
    }

    /// Build one EntitySpec per member of the entity union, in member
    /// order, then cross-check every accumulated relationship destination
    /// against the full entity-name set.
    pub fn build_entity_specs(
        &mut self,
        schema: &DataSchema,
    ) -> Result<Vec<EntitySpec>, ModelValidationError> {
        let union = validate::require_union(schema)?;

        let mut specs = Vec::with_capacity(union.members().len());
        for member in union.members() {
            specs.push(self.build_entity_spec(&member.ty)?);
        }

        // Deferred until every entity in the call is known: relationships
        // may reference entities defined later in the same schema set.
        self.ctx.validate_relationships()?;

        debug!(
            "built {} entity specs ({} relationships cross-checked)",
            specs.len(),
            self.ctx.relationships().len()
        );

        Ok(specs)
    }

    /// Build a single EntitySpec, deriving its aspects from the entity
    /// record's aspect union.
    pub fn build_entity_spec(
        &mut self,
        schema: &DataSchema,
    ) -> Result<EntitySpec, ModelValidationError> {
        let parts = validate::validate_entity_record(schema)?;
        let annotation = parse_entity_annotation(parts.record)?;

        let mut aspect_specs = Vec::with_capacity(parts.aspect_union.members().len());
        for member in parts.aspect_union.members() {
            aspect_specs.push(self.build_aspect_spec(&member.ty)?);
        }

        let spec = EntitySpec::new(
            annotation,
            aspect_specs,
            parts.record.clone(),
            Some(parts.aspect_typeref.clone()),
        );
        self.validate_entity_spec(&spec)?;

        debug!(
            "built entity spec '{}' with {} aspects",
            spec.name(),
            spec.aspect_specs().len()
        );

        Ok(spec)
    }

    /// Overload taking precomputed aspects: skips aspect derivation, for
    /// reattaching already-built aspects to a different entity view.
    pub fn build_entity_spec_with_aspects(
        &mut self,
        schema: &DataSchema,
        aspect_specs: Vec<AspectSpec>,
    ) -> Result<EntitySpec, ModelValidationError> {
        let parts = validate::validate_entity_record(schema)?;
        let annotation = parse_entity_annotation(parts.record)?;

        let spec = EntitySpec::new(annotation, aspect_specs, parts.record.clone(), None);
        self.validate_entity_spec(&spec)?;

        Ok(spec)
    }

    /// Build an AspectSpec from a record schema carrying an @Aspect
    /// annotation. Every relationship discovered is registered in the
    /// context for the final cross-entity pass.
    pub fn build_aspect_spec(
        &mut self,
        schema: &DataSchema,
    ) -> Result<AspectSpec, ModelValidationError> {
        let record = validate::require_record(schema)?;

        let payload = record
            .property(AspectAnnotation::ANNOTATION_NAME)
            .ok_or_else(|| ModelValidationError::MissingAnnotation {
                annotation: AspectAnnotation::ANNOTATION_NAME,
                schema: record.name.clone(),
            })?;
        let annotation: AspectAnnotation = parse_annotation(payload, &record.name)?;

        let spec = if self.mode == ExtractionMode::IgnoreAspectFields {
            // Short circuit: entity/aspect-level metadata only.
            AspectSpec::new(
                annotation,
                Vec::new(),
                Vec::new(),
                Vec::new(),
                Vec::new(),
                record.clone(),
            )
        } else {
            self.extract_aspect_fields(record, annotation)?
        };

        validate::validate_timeseries(&spec)?;

        Ok(spec)
    }

    fn extract_aspect_fields(
        &mut self,
        record: &RecordSchema,
        annotation: AspectAnnotation,
    ) -> Result<AspectSpec, ModelValidationError> {
        let mut searchable = SearchableFieldSpecExtractor::default();
        self.traverser.traverse(
            record,
            &[SearchableAnnotation::ANNOTATION_NAME],
            &mut searchable,
        )?;

        let mut relationships = RelationshipFieldSpecExtractor::default();
        self.traverser.traverse(
            record,
            &[RelationshipAnnotation::ANNOTATION_NAME],
            &mut relationships,
        )?;
        let relationship_specs = relationships.into_specs();
        for spec in &relationship_specs {
            self.ctx.register_relationship(spec);
        }

        // Both timeseries kinds are resolved in one traversal.
        let mut timeseries = TimeseriesFieldSpecExtractor::default();
        self.traverser.traverse(
            record,
            &[
                TimeseriesFieldAnnotation::ANNOTATION_NAME,
                TimeseriesFieldCollectionAnnotation::ANNOTATION_NAME,
            ],
            &mut timeseries,
        )?;
        let (timeseries_fields, timeseries_collections) = timeseries.into_specs();

        Ok(AspectSpec::new(
            annotation,
            searchable.into_specs(),
            relationship_specs,
            timeseries_fields,
            timeseries_collections,
            record.clone(),
        ))
    }

    /// Per-entity validation: key aspect present and flat, aspect names
    /// unique, entity name case-insensitively unique across the context.
    fn validate_entity_spec(&mut self, spec: &EntitySpec) -> Result<(), ModelValidationError> {
        let Some(key_aspect) = spec.key_aspect_spec() else {
            return Err(ModelValidationError::KeyAspect {
                entity: spec.name().to_string(),
                reason: format!(
                    "declared key aspect '{}' not found among this entity's aspects",
                    spec.key_aspect_name()
                ),
            });
        };
        validate::validate_key_aspect(key_aspect, spec.name())?;

        let mut aspect_names = BTreeSet::new();
        for aspect in spec.aspect_specs() {
            if !aspect_names.insert(aspect.name().to_string()) {
                return Err(ModelValidationError::DuplicateName {
                    noun: "aspect",
                    name: aspect.name().to_string(),
                    context: format!(" in entity '{}'", spec.name()),
                });
            }
        }

        self.ctx.register_entity(spec.name())
    }
}

fn parse_entity_annotation(record: &RecordSchema) -> Result<EntityAnnotation, ModelValidationError> {
    let payload = record
        .property(EntityAnnotation::ANNOTATION_NAME)
        .ok_or_else(|| ModelValidationError::MissingAnnotation {
            annotation: EntityAnnotation::ANNOTATION_NAME,
            schema: record.name.clone(),
        })?;

    parse_annotation(payload, &record.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::SchemaVisitor;
    use metareg_schema::{node::RecordField, path::FieldPath};
    use serde_json::json;

    fn profile_aspect() -> RecordSchema {
        RecordSchema::new("Profile")
            .with_property("Aspect", json!({ "name": "profile" }))
            .with_field(
                RecordField::new("bio", DataSchema::string())
                    .with_property("Searchable", json!({ "fieldType": "TEXT" })),
            )
            .with_field(
                RecordField::new("manager", DataSchema::string()).with_property(
                    "Relationship",
                    json!({ "name": "ReportsTo", "entityTypes": ["user"] }),
                ),
            )
    }

    #[test]
    fn aspect_without_annotation_is_rejected() {
        let record = RecordSchema::new("Profile");
        let mut builder = EntitySpecBuilder::new();

        assert!(matches!(
            builder.build_aspect_spec(&DataSchema::Record(record)),
            Err(ModelValidationError::MissingAnnotation {
                annotation: "Aspect",
                ..
            })
        ));
    }

    #[test]
    fn non_record_aspect_is_a_shape_error() {
        let mut builder = EntitySpecBuilder::new();

        assert!(matches!(
            builder.build_aspect_spec(&DataSchema::string()),
            Err(ModelValidationError::Shape { .. })
        ));
    }

    #[test]
    fn default_mode_extracts_field_specs_and_registers_relationships() {
        let mut builder = EntitySpecBuilder::new();
        let spec = builder
            .build_aspect_spec(&DataSchema::Record(profile_aspect()))
            .unwrap();

        assert_eq!(spec.searchable_field_specs().len(), 1);
        assert_eq!(spec.relationship_field_specs().len(), 1);
        assert_eq!(builder.context().relationships().len(), 1);
    }

    #[test]
    fn ignore_aspect_fields_mode_short_circuits_extraction() {
        let mut builder = EntitySpecBuilder::with_mode(ExtractionMode::IgnoreAspectFields);
        let spec = builder
            .build_aspect_spec(&DataSchema::Record(profile_aspect()))
            .unwrap();

        assert!(spec.searchable_field_specs().is_empty());
        assert!(spec.relationship_field_specs().is_empty());
        assert!(builder.context().relationships().is_empty());
    }

    #[test]
    fn ignore_aspect_fields_mode_still_checks_the_timeseries_timestamp() {
        let record = RecordSchema::new("UsageStats")
            .with_property("Aspect", json!({ "name": "usageStats", "type": "timeseries" }));
        let mut builder = EntitySpecBuilder::with_mode(ExtractionMode::IgnoreAspectFields);

        assert!(matches!(
            builder.build_aspect_spec(&DataSchema::Record(record)),
            Err(ModelValidationError::MissingField {
                field: "timestampMillis",
                ..
            })
        ));
    }

    ///
    /// StubTraverser
    ///
    /// Feeds one synthetic searchable field to whatever visitor asks for
    /// the Searchable key, bypassing the schema walk entirely.
    ///

    struct StubTraverser;

    impl AnnotationTraverser for StubTraverser {
        fn traverse(
            &self,
            _record: &RecordSchema,
            annotations: &[&str],
            visitor: &mut dyn SchemaVisitor,
        ) -> Result<(), ModelValidationError> {
            if annotations.contains(&SearchableAnnotation::ANNOTATION_NAME) {
                visitor.visit_field(
                    &FieldPath::of("synthetic"),
                    &DataSchema::string(),
                    SearchableAnnotation::ANNOTATION_NAME,
                    &json!({}),
                )?;
            }

            Ok(())
        }
    }

    #[test]
    fn builders_accept_an_injected_traversal_engine() {
        let record =
            RecordSchema::new("Stubbed").with_property("Aspect", json!({ "name": "stubbed" }));
        let mut builder =
            EntitySpecBuilder::with_traverser(ExtractionMode::Default, StubTraverser);
        let spec = builder
            .build_aspect_spec(&DataSchema::Record(record))
            .unwrap();

        let paths: Vec<String> = spec
            .searchable_field_specs()
            .iter()
            .map(|s| s.path.to_string())
            .collect();
        assert_eq!(paths, vec!["synthetic"]);
    }
}
