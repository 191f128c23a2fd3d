use crate::annotation::{
    RelationshipAnnotation, SearchableAnnotation, TimeseriesFieldAnnotation,
    TimeseriesFieldCollectionAnnotation,
};
use metareg_schema::path::FieldPath;
use serde::Serialize;

///
/// SearchableFieldSpec
///
/// One searchable field discovered during aspect traversal, in discovery
/// order. Identity is the field path within its aspect.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchableFieldSpec {
    pub path: FieldPath,
    pub annotation: SearchableAnnotation,
}

impl SearchableFieldSpec {
    #[must_use]
    pub const fn new(path: FieldPath, annotation: SearchableAnnotation) -> Self {
        Self { path, annotation }
    }

    /// Index field name: annotation override, else the path leaf.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.annotation.field_name.as_deref().or_else(|| self.path.leaf())
    }
}

///
/// RelationshipFieldSpec
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RelationshipFieldSpec {
    pub path: FieldPath,
    pub annotation: RelationshipAnnotation,
}

impl RelationshipFieldSpec {
    #[must_use]
    pub const fn new(path: FieldPath, annotation: RelationshipAnnotation) -> Self {
        Self { path, annotation }
    }

    #[must_use]
    pub fn relationship_name(&self) -> &str {
        &self.annotation.name
    }

    /// Entity-type names this relationship may legally point at.
    #[must_use]
    pub fn valid_destination_types(&self) -> &[String] {
        &self.annotation.entity_types
    }
}

///
/// TimeseriesFieldSpec
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TimeseriesFieldSpec {
    pub path: FieldPath,
    pub annotation: TimeseriesFieldAnnotation,
}

impl TimeseriesFieldSpec {
    #[must_use]
    pub const fn new(path: FieldPath, annotation: TimeseriesFieldAnnotation) -> Self {
        Self { path, annotation }
    }

    /// Statistic name: annotation override, else the path leaf.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.annotation.name.as_deref().or_else(|| self.path.leaf())
    }
}

///
/// TimeseriesFieldCollectionSpec
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TimeseriesFieldCollectionSpec {
    pub path: FieldPath,
    pub annotation: TimeseriesFieldCollectionAnnotation,
}

impl TimeseriesFieldCollectionSpec {
    #[must_use]
    pub const fn new(path: FieldPath, annotation: TimeseriesFieldCollectionAnnotation) -> Self {
        Self { path, annotation }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.annotation.key
    }
}
