//! Compiles annotated entity/aspect schema definitions into validated
//! specification objects for a metadata registry.
//!
//! The entry point is [`build::EntitySpecBuilder`]: hand it a union of
//! entity record schemas and it returns one validated [`spec::EntitySpec`]
//! per member, or the first [`error::ModelValidationError`] found.

pub mod annotation;
pub mod build;
pub mod error;
pub mod extract;
pub mod spec;
pub mod traverse;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        annotation::*,
        build::{EntitySpecBuilder, ExtractionMode, RegistryBuildContext},
        error::ModelValidationError,
        extract::*,
        spec::*,
        traverse::{AnnotationTraverser, SchemaTraverser, SchemaVisitor},
    };
    pub use metareg_schema::prelude::*;
}
