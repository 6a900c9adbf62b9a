use error_stack::Report;

use kernel::interface::database::{DependOnDatabaseConnection, QueryDatabaseConnection};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    Book, BookAuthor, BookDraft, BookId, BookIsbn, BookTitle, DestructBook,
};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, UpdateBookDto};

#[async_trait::async_trait]
pub trait GetAllBookService<Connection: Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = self.book_query().find_all(&mut connection).await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection: Send, T> GetAllBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateBookService<Connection: Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let draft = BookDraft::new(
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
            BookIsbn::new(dto.isbn),
        );
        let book = self.book_modifier().create(&mut connection, draft).await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: Send, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateBookService<Connection: Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    /// Overwrites title, author and isbn of the targeted book. The stored id
    /// never changes. Fails with [`KernelError::NotFound`] before any write
    /// when the id does not exist.
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;
        let book = match book {
            Some(book) => book,
            None => {
                return Err(Report::new(KernelError::NotFound)
                    .attach_printable(format!("Book not found: {}", dto.id)))
            }
        };

        let DestructBook { id, .. } = book.into_destruct();
        let book = Book::new(
            id,
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
            BookIsbn::new(dto.isbn),
        );
        self.book_modifier().update(&mut connection, &book).await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: Send, T> UpdateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBookService<Connection: Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    /// Removing an absent id is a silent no-op, so the operation is idempotent.
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        self.book_modifier().delete(&mut connection, &id).await?;

        Ok(())
    }
}

impl<Connection: Send, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    use kernel::interface::database::QueryDatabaseConnection;
    use kernel::interface::query::{BookQuery, DependOnBookQuery};
    use kernel::interface::update::{BookModifier, DependOnBookModifier};
    use kernel::prelude::entity::{
        Book, BookDraft, BookId, DestructBookDraft,
    };
    use kernel::KernelError;

    use crate::service::{
        CreateBookService, DeleteBookService, GetAllBookService, UpdateBookService,
    };
    use crate::transfer::{CreateBookDto, DeleteBookDto, UpdateBookDto};

    pub struct InMemoryConnection;

    #[derive(Default)]
    struct InMemoryDatabase {
        books: Mutex<BTreeMap<i64, Book>>,
        sequence: AtomicI64,
    }

    #[async_trait::async_trait]
    impl QueryDatabaseConnection<InMemoryConnection> for InMemoryDatabase {
        async fn transact(&self) -> error_stack::Result<InMemoryConnection, KernelError> {
            Ok(InMemoryConnection)
        }
    }

    #[async_trait::async_trait]
    impl BookQuery<InMemoryConnection> for InMemoryDatabase {
        async fn find_all(
            &self,
            _con: &mut InMemoryConnection,
        ) -> error_stack::Result<Vec<Book>, KernelError> {
            Ok(self.books.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(
            &self,
            _con: &mut InMemoryConnection,
            id: &BookId,
        ) -> error_stack::Result<Option<Book>, KernelError> {
            Ok(self.books.lock().unwrap().get(id.as_ref()).cloned())
        }
    }

    #[async_trait::async_trait]
    impl BookModifier<InMemoryConnection> for InMemoryDatabase {
        async fn create(
            &self,
            _con: &mut InMemoryConnection,
            draft: BookDraft,
        ) -> error_stack::Result<Book, KernelError> {
            let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
            let DestructBookDraft {
                title,
                author,
                isbn,
            } = draft.into_destruct();
            let book = Book::new(BookId::new(id), title, author, isbn);
            self.books.lock().unwrap().insert(id, book.clone());
            Ok(book)
        }

        async fn update(
            &self,
            _con: &mut InMemoryConnection,
            book: &Book,
        ) -> error_stack::Result<(), KernelError> {
            self.books
                .lock()
                .unwrap()
                .insert(*book.id().as_ref(), book.clone());
            Ok(())
        }

        async fn delete(
            &self,
            _con: &mut InMemoryConnection,
            id: &BookId,
        ) -> error_stack::Result<(), KernelError> {
            self.books.lock().unwrap().remove(id.as_ref());
            Ok(())
        }
    }

    impl DependOnBookQuery<InMemoryConnection> for InMemoryDatabase {
        type BookQuery = InMemoryDatabase;
        fn book_query(&self) -> &Self::BookQuery {
            self
        }
    }

    impl DependOnBookModifier<InMemoryConnection> for InMemoryDatabase {
        type BookModifier = InMemoryDatabase;
        fn book_modifier(&self) -> &Self::BookModifier {
            self
        }
    }

    fn dune() -> CreateBookDto {
        CreateBookDto {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "111".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_list_contains_it() {
        let db = InMemoryDatabase::default();

        let created = db.create_book(dune()).await.unwrap();
        assert_eq!(created.title, "Dune");
        assert_eq!(created.author, "Herbert");
        assert_eq!(created.isbn, "111");

        let all = db.get_all_books().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn update_after_create_keeps_id_and_overwrites_fields() {
        let db = InMemoryDatabase::default();
        let created = db.create_book(dune()).await.unwrap();

        let updated = db
            .update_book(UpdateBookDto {
                id: created.id,
                title: "Dune (rev)".to_string(),
                author: "Herbert".to_string(),
                isbn: "111".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Dune (rev)");
        assert_eq!(updated.author, "Herbert");
        assert_eq!(updated.isbn, "111");
    }

    #[tokio::test]
    async fn update_missing_id_fails_not_found_and_mutates_nothing() {
        let db = InMemoryDatabase::default();
        let created = db.create_book(dune()).await.unwrap();

        let result = db
            .update_book(UpdateBookDto {
                id: created.id + 1,
                title: "other".to_string(),
                author: "other".to_string(),
                isbn: "000".to_string(),
            })
            .await;

        let report = result.expect_err("update of a missing id must fail");
        assert!(matches!(report.current_context(), KernelError::NotFound));

        let all = db.get_all_books().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let db = InMemoryDatabase::default();
        let created = db.create_book(dune()).await.unwrap();

        db.delete_book(DeleteBookDto { id: created.id }).await.unwrap();
        db.delete_book(DeleteBookDto { id: created.id }).await.unwrap();

        let all = db.get_all_books().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let db = InMemoryDatabase::default();

        let created = db.create_book(dune()).await.unwrap();

        let updated = db
            .update_book(UpdateBookDto {
                id: created.id,
                title: "Dune (rev)".to_string(),
                author: "Herbert".to_string(),
                isbn: "111".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Dune (rev)");

        db.delete_book(DeleteBookDto { id: created.id }).await.unwrap();
        let all = db.get_all_books().await.unwrap();
        assert!(all.iter().all(|book| book.id != created.id));

        let result = db
            .update_book(UpdateBookDto {
                id: created.id,
                title: "Dune (rev)".to_string(),
                author: "Herbert".to_string(),
                isbn: "111".to_string(),
            })
            .await;
        let report = result.expect_err("update after delete must fail");
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }
}
