use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            isbn,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}

pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Patch for an existing book. All three mutable fields are overwritten; the
/// id names the target and is never written.
pub struct UpdateBookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

pub struct DeleteBookDto {
    pub id: i64,
}
