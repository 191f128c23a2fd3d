mod array;
mod r#enum;
mod record;
mod typeref;
mod union;

pub use array::ArraySchema;
pub use r#enum::EnumSchema;
pub use record::{RecordField, RecordSchema};
pub use typeref::TyperefSchema;
pub use union::{UnionMember, UnionSchema};

use crate::types::{Primitive, SchemaKind};
use serde::Serialize;

///
/// DataSchema
///
/// A node in a parsed schema tree. Builders consume this representation;
/// they never parse schema source themselves.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum DataSchema {
    Array(ArraySchema),
    Enum(EnumSchema),
    Primitive(Primitive),
    Record(RecordSchema),
    Typeref(TyperefSchema),
    Union(UnionSchema),
}

impl DataSchema {
    #[must_use]
    pub const fn kind(&self) -> SchemaKind {
        match self {
            Self::Array(_) => SchemaKind::Array,
            Self::Enum(_) => SchemaKind::Enum,
            Self::Primitive(prim) => prim.kind(),
            Self::Record(_) => SchemaKind::Record,
            Self::Typeref(_) => SchemaKind::Typeref,
            Self::Union(_) => SchemaKind::Union,
        }
    }

    /// Follow any chain of typerefs to the concrete underlying type.
    #[must_use]
    pub fn dereferenced(&self) -> &Self {
        let mut schema = self;
        while let Self::Typeref(typeref) = schema {
            schema = &typeref.referenced;
        }

        schema
    }

    /// Kind of the concrete type behind any typeref chain.
    #[must_use]
    pub fn dereferenced_kind(&self) -> SchemaKind {
        self.dereferenced().kind()
    }

    /// Display name of the node, where it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Enum(e) => Some(&e.name),
            Self::Record(r) => Some(&r.name),
            Self::Typeref(t) => Some(&t.name),
            Self::Array(_) | Self::Primitive(_) | Self::Union(_) => None,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordSchema> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> Option<&ArraySchema> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_union(&self) -> Option<&UnionSchema> {
        match self {
            Self::Union(union) => Some(union),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_typeref(&self) -> Option<&TyperefSchema> {
        match self {
            Self::Typeref(typeref) => Some(typeref),
            _ => None,
        }
    }

    //
    // constructors, mostly for fixture code
    //

    #[must_use]
    pub const fn string() -> Self {
        Self::Primitive(Primitive::String)
    }

    #[must_use]
    pub const fn long() -> Self {
        Self::Primitive(Primitive::Long)
    }

    #[must_use]
    pub fn array(items: Self) -> Self {
        Self::Array(ArraySchema::new(items))
    }

    #[must_use]
    pub fn typeref(name: impl Into<String>, referenced: Self) -> Self {
        Self::Typeref(TyperefSchema::new(name, referenced))
    }

    #[must_use]
    pub fn union(members: impl IntoIterator<Item = Self>) -> Self {
        Self::Union(UnionSchema::new(members))
    }
}

impl From<RecordSchema> for DataSchema {
    fn from(record: RecordSchema) -> Self {
        Self::Record(record)
    }
}

impl From<EnumSchema> for DataSchema {
    fn from(e: EnumSchema) -> Self {
        Self::Enum(e)
    }
}

impl From<Primitive> for DataSchema {
    fn from(prim: Primitive) -> Self {
        Self::Primitive(prim)
    }
}
