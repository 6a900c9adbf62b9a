use derive_more::{AsRef, From, Into};

/// Free-form text, no checksum or format validation.
#[derive(Debug, Clone, Eq, PartialEq, From, Into, AsRef)]
pub struct BookIsbn(String);

impl BookIsbn {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }
}
