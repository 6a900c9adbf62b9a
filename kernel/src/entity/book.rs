mod author;
mod id;
mod isbn;
mod title;

pub use self::{author::*, id::*, isbn::*, title::*};
use destructure::{Destructure, Mutation};

#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    isbn: BookIsbn,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author: BookAuthor, isbn: BookIsbn) -> Self {
        Self {
            id,
            title,
            author,
            isbn,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn isbn(&self) -> &BookIsbn {
        &self.isbn
    }
}

/// A book that has not been persisted yet. The store assigns the id on insert.
#[derive(Debug, Clone, Eq, PartialEq, Destructure)]
pub struct BookDraft {
    title: BookTitle,
    author: BookAuthor,
    isbn: BookIsbn,
}

impl BookDraft {
    pub fn new(title: BookTitle, author: BookAuthor, isbn: BookIsbn) -> Self {
        Self {
            title,
            author,
            isbn,
        }
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn author(&self) -> &BookAuthor {
        &self.author
    }

    pub fn isbn(&self) -> &BookIsbn {
        &self.isbn
    }
}
