use serde::Serialize;

///
/// EnumSchema
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EnumSchema {
    pub name: String,
    pub symbols: Vec<String>,
}

impl EnumSchema {
    #[must_use]
    pub fn new(name: impl Into<String>, symbols: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            name: name.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }
}
