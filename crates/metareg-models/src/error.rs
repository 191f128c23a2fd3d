use metareg_schema::types::SchemaKind;
use thiserror::Error as ThisError;

///
/// ModelValidationError
///
/// Every violation is fatal and aborts the enclosing build call with the
/// first problem found; no partial specs are returned.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ModelValidationError {
    /// A present annotation payload failed typed parsing.
    #[error("invalid @{annotation} annotation on '{schema}': {message}")]
    Annotation {
        annotation: &'static str,
        schema: String,
        message: String,
    },

    /// A relationship declares a destination entity type unknown to the registry.
    #[error(
        "relationship '{relationship}' at path '{path}' declares unknown destination entity type '{destination}'"
    )]
    DanglingRelationship {
        relationship: String,
        path: String,
        destination: String,
    },

    /// Duplicate aspect name within an entity, or duplicate entity name in a registry build.
    #[error("duplicate {noun} name '{name}'{context}")]
    DuplicateName {
        noun: &'static str,
        name: String,
        context: String,
    },

    /// Key aspect missing or structurally unfit to compose an identifier.
    #[error("invalid key aspect for entity '{entity}': {reason}")]
    KeyAspect { entity: String, reason: String },

    /// Entity or aspect annotation absent from the record's properties.
    #[error("schema '{schema}' is missing the @{annotation} annotation")]
    MissingAnnotation {
        annotation: &'static str,
        schema: String,
    },

    /// Required field absent or of the wrong dereferenced type.
    #[error("schema '{schema}' has a missing or invalid '{field}' field: {reason}")]
    MissingField {
        schema: String,
        field: &'static str,
        reason: String,
    },

    /// Input schema is not the required shape (record, or union for registry builds).
    #[error("schema '{schema}' must be {expected}-shaped, found {found}")]
    Shape {
        schema: String,
        expected: SchemaKind,
        found: SchemaKind,
    },
}
