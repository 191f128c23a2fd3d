//! The annotation-processing engine is injected into the builders as a
//! capability so they can be exercised with a stub that feeds synthetic
//! (path, payload) pairs straight to the extractors.

use crate::error::ModelValidationError;
use metareg_schema::{
    node::{DataSchema, RecordSchema},
    path::FieldPath,
};
use serde_json::Value;
use std::collections::BTreeSet;

///
/// SchemaVisitor
///
/// Invoked once per annotated field in traversal order. `annotation` is the
/// property key that matched; `payload` is its raw value.
///

pub trait SchemaVisitor {
    fn visit_field(
        &mut self,
        path: &FieldPath,
        schema: &DataSchema,
        annotation: &str,
        payload: &Value,
    ) -> Result<(), ModelValidationError>;
}

///
/// AnnotationTraverser
///
/// Walks a record schema and hands every field carrying one of the
/// requested annotation keys to the visitor.
///

pub trait AnnotationTraverser {
    fn traverse(
        &self,
        record: &RecordSchema,
        annotations: &[&str],
        visitor: &mut dyn SchemaVisitor,
    ) -> Result<(), ModelValidationError>;
}

///
/// SchemaTraverser
///
/// Default engine: depth-first over fields, descending through
/// dereferenced records, array items, and union members. A visiting set on
/// record names keeps recursive schemas terminating.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SchemaTraverser;

impl SchemaTraverser {
    fn walk_record(
        record: &RecordSchema,
        annotations: &[&str],
        visitor: &mut dyn SchemaVisitor,
        path: &mut FieldPath,
        visiting: &mut BTreeSet<String>,
    ) -> Result<(), ModelValidationError> {
        if !visiting.insert(record.name.clone()) {
            return Ok(());
        }

        for field in &record.fields {
            path.push_field(&field.name);

            for annotation in annotations {
                if let Some(payload) = field.property(annotation) {
                    visitor.visit_field(path, &field.ty, annotation, payload)?;
                }
            }

            Self::walk_type(&field.ty, annotations, visitor, path, visiting)?;
            path.pop();
        }

        visiting.remove(&record.name);

        Ok(())
    }

    fn walk_type(
        schema: &DataSchema,
        annotations: &[&str],
        visitor: &mut dyn SchemaVisitor,
        path: &mut FieldPath,
        visiting: &mut BTreeSet<String>,
    ) -> Result<(), ModelValidationError> {
        match schema.dereferenced() {
            DataSchema::Record(record) => {
                Self::walk_record(record, annotations, visitor, path, visiting)
            }
            DataSchema::Array(array) => {
                path.push_item();
                Self::walk_type(array.items(), annotations, visitor, path, visiting)?;
                path.pop();

                Ok(())
            }
            DataSchema::Union(union) => {
                for member in union.members() {
                    Self::walk_type(&member.ty, annotations, visitor, path, visiting)?;
                }

                Ok(())
            }
            DataSchema::Enum(_) | DataSchema::Primitive(_) => Ok(()),
            // dereferenced() never yields a typeref
            DataSchema::Typeref(_) => Ok(()),
        }
    }
}

impl AnnotationTraverser for SchemaTraverser {
    fn traverse(
        &self,
        record: &RecordSchema,
        annotations: &[&str],
        visitor: &mut dyn SchemaVisitor,
    ) -> Result<(), ModelValidationError> {
        let mut path = FieldPath::new();
        let mut visiting = BTreeSet::new();

        Self::walk_record(record, annotations, visitor, &mut path, &mut visiting)
    }
}
