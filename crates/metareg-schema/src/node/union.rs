use crate::node::DataSchema;
use serde::Serialize;

///
/// UnionSchema
///
/// Ordered member list; member order is significant and preserved by
/// everything built from it.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UnionSchema {
    pub members: Vec<UnionMember>,
}

impl UnionSchema {
    #[must_use]
    pub fn new(members: impl IntoIterator<Item = DataSchema>) -> Self {
        Self {
            members: members.into_iter().map(UnionMember::new).collect(),
        }
    }

    #[must_use]
    pub fn members(&self) -> &[UnionMember] {
        &self.members
    }
}

///
/// UnionMember
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnionMember {
    pub ty: DataSchema,
}

impl UnionMember {
    #[must_use]
    pub const fn new(ty: DataSchema) -> Self {
        Self { ty }
    }
}
