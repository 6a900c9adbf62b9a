use derive_more::{AsRef, From, Into};

#[derive(Debug, Clone, Eq, PartialEq, From, Into, AsRef)]
pub struct BookId(i64);

impl BookId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
