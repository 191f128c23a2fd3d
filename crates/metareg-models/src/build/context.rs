use crate::{error::ModelValidationError, spec::RelationshipFieldSpec};
use std::collections::BTreeSet;

///
/// RegistryBuildContext
///
/// Accumulation state for one registry build: entity names seen so far
/// (lower-cased) and every relationship field spec discovered. Grow-only
/// within a builder's lifetime; reset by constructing a new builder.
///

#[derive(Debug, Default)]
pub struct RegistryBuildContext {
    entity_names: BTreeSet<String>,
    relationships: Vec<RelationshipFieldSpec>,
}

impl RegistryBuildContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entity name; duplicates are case-insensitive and fatal.
    pub fn register_entity(&mut self, name: &str) -> Result<(), ModelValidationError> {
        if !self.entity_names.insert(name.to_lowercase()) {
            return Err(ModelValidationError::DuplicateName {
                noun: "entity",
                name: name.to_string(),
                context: " in registry build".to_string(),
            });
        }

        Ok(())
    }

    pub fn register_relationship(&mut self, spec: &RelationshipFieldSpec) {
        self.relationships.push(spec.clone());
    }

    #[must_use]
    pub fn contains_entity(&self, name: &str) -> bool {
        self.entity_names.contains(&name.to_lowercase())
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entity_names.len()
    }

    #[must_use]
    pub fn relationships(&self) -> &[RelationshipFieldSpec] {
        &self.relationships
    }

    /// Final cross-reference pass: every declared destination of every
    /// accumulated relationship must resolve to a registered entity.
    /// Deferred until all entities are known, since relationships may point
    /// at entities defined later in the same schema set.
    pub fn validate_relationships(&self) -> Result<(), ModelValidationError> {
        for spec in &self.relationships {
            for destination in spec.valid_destination_types() {
                if !self.contains_entity(destination) {
                    return Err(ModelValidationError::DanglingRelationship {
                        relationship: spec.relationship_name().to_string(),
                        path: spec.path.to_string(),
                        destination: destination.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::RelationshipAnnotation;
    use metareg_schema::path::FieldPath;

    fn relationship(name: &str, destinations: &[&str]) -> RelationshipFieldSpec {
        RelationshipFieldSpec::new(
            FieldPath::of("owner"),
            RelationshipAnnotation {
                name: name.to_string(),
                entity_types: destinations.iter().map(ToString::to_string).collect(),
            },
        )
    }

    #[test]
    fn entity_names_are_case_insensitively_unique() {
        let mut ctx = RegistryBuildContext::new();
        ctx.register_entity("Dataset").unwrap();

        assert!(matches!(
            ctx.register_entity("dataSET"),
            Err(ModelValidationError::DuplicateName { noun: "entity", .. })
        ));
    }

    #[test]
    fn relationship_destinations_resolve_case_insensitively() {
        let mut ctx = RegistryBuildContext::new();
        ctx.register_entity("Dataset").unwrap();
        ctx.register_relationship(&relationship("DownstreamOf", &["DATASET"]));

        assert!(ctx.validate_relationships().is_ok());
    }

    #[test]
    fn unknown_destination_is_a_dangling_relationship() {
        let mut ctx = RegistryBuildContext::new();
        ctx.register_entity("dataset").unwrap();
        ctx.register_relationship(&relationship("OwnedBy", &["corpUser"]));

        assert!(matches!(
            ctx.validate_relationships(),
            Err(ModelValidationError::DanglingRelationship { destination, .. })
                if destination == "corpUser"
        ));
    }
}
