use serde::Deserialize;

use application::transfer::{CreateBookDto, DeleteBookDto, UpdateBookDto};

use crate::controller::Intake;

// Missing body fields decode to empty strings. A supplied `id` field is
// ignored; the store (create) or the path (update) decides the id.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    isbn: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    isbn: String,
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: i64,
}

impl DeleteBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            author: input.author,
            isbn: input.isbn,
        }
    }
}

impl Intake<(i64, UpdateBookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (i64, UpdateBookRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id,
            title: input.title,
            author: input.author,
            isbn: input.isbn,
        }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

#[cfg(test)]
mod test {
    use crate::request::{CreateBookRequest, UpdateBookRequest};

    #[test]
    fn missing_fields_decode_to_empty_strings() {
        let req: UpdateBookRequest = serde_json::from_str(r#"{"title":"Dune (rev)"}"#).unwrap();
        assert_eq!(req.title, "Dune (rev)");
        assert_eq!(req.author, "");
        assert_eq!(req.isbn, "");
    }

    #[test]
    fn body_id_is_ignored() {
        let req: CreateBookRequest =
            serde_json::from_str(r#"{"id":42,"title":"Dune","author":"Herbert","isbn":"111"}"#)
                .unwrap();
        assert_eq!(req.title, "Dune");
        assert_eq!(req.author, "Herbert");
        assert_eq!(req.isbn, "111");
    }
}
