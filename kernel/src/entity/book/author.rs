use derive_more::{AsRef, From, Into};

#[derive(Debug, Clone, Eq, PartialEq, From, Into, AsRef)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }
}
