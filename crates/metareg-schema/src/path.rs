use serde::Serialize;
use std::fmt::{self, Display};

///
/// FieldPath
///
/// Location of a field within an aspect schema tree. Segments are field
/// names, with `Item` marking descent into an array element. Renders
/// dot-separated with `*` for array descents, e.g. `members.*.name`.
///

#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn of(field: &str) -> Self {
        let mut path = Self::new();
        path.push_field(field);
        path
    }

    pub fn push_field(&mut self, name: impl Into<String>) {
        self.0.push(PathSegment::Field(name.into()));
    }

    pub fn push_item(&mut self) {
        self.0.push(PathSegment::Item);
    }

    pub fn pop(&mut self) {
        self.0.pop();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Last field-name segment, skipping trailing array descents.
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.0.iter().rev().find_map(|segment| match segment {
            PathSegment::Field(name) => Some(name.as_str()),
            PathSegment::Item => None,
        })
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match segment {
                PathSegment::Field(name) => write!(f, "{name}")?,
                PathSegment::Item => write!(f, "*")?,
            }
        }

        Ok(())
    }
}

///
/// PathSegment
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum PathSegment {
    Field(String),
    Item,
}
