use derive_more::{Display, FromStr};
use serde::Serialize;

///
/// SchemaKind
///
/// The kind of every node that can appear in a schema tree.
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum SchemaKind {
    Array,
    Boolean,
    Bytes,
    Double,
    Enum,
    Float,
    Int,
    Long,
    Record,
    String,
    Typeref,
    Union,
}

///
/// Primitive
///
/// Leaf value types. Kept separate from SchemaKind so primitives stay
/// Copy and pattern-matchable without the structural kinds.
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    Boolean,
    Bytes,
    Double,
    Float,
    Int,
    Long,
    String,
}

impl Primitive {
    #[must_use]
    pub const fn kind(self) -> SchemaKind {
        match self {
            Self::Boolean => SchemaKind::Boolean,
            Self::Bytes => SchemaKind::Bytes,
            Self::Double => SchemaKind::Double,
            Self::Float => SchemaKind::Float,
            Self::Int => SchemaKind::Int,
            Self::Long => SchemaKind::Long,
            Self::String => SchemaKind::String,
        }
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int | Self::Long)
    }
}
