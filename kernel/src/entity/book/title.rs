use derive_more::{AsRef, From, Into};

#[derive(Debug, Clone, Eq, PartialEq, From, Into, AsRef)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}
