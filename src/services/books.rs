//! Books service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book, its id is assigned by the store
    pub async fn create(&self, data: &BookInput) -> AppResult<Book> {
        let data = normalize(data)?;
        let book = self.repository.books.create(&data).await?;
        tracing::info!(book_id = book.id, "Book created");
        Ok(book)
    }

    /// Replace author and book name of an existing book
    pub async fn update(&self, id: i32, data: &BookInput) -> AppResult<Book> {
        let data = normalize(data)?;
        self.repository.books.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }

    /// Number of stored books (for health)
    pub async fn count(&self) -> AppResult<usize> {
        self.repository.books.count().await
    }
}

fn normalize(data: &BookInput) -> AppResult<BookInput> {
    let data = data.trimmed();
    if data.author.is_empty() {
        return Err(AppError::Validation("Author cannot be empty".to_string()));
    }
    if data.book_name.is_empty() {
        return Err(AppError::Validation("Book name cannot be empty".to_string()));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use super::*;
    use crate::repository::books::MockBookRepository;

    fn service(mock: MockBookRepository) -> BooksService {
        BooksService::new(Repository::new(Arc::new(mock)))
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let mut mock = MockBookRepository::new();
        mock.expect_create()
            .withf(|data| data.author == "Adam Fawer" && data.book_name == "Empati")
            .times(1)
            .returning(|data| Ok(Book::from_input(2, data)));

        let book = service(mock)
            .create(&BookInput::new("  Adam Fawer ", "Empati\n"))
            .await
            .unwrap();
        assert_eq!(book.id, 2);
        assert_eq!(book.author, "Adam Fawer");
    }

    #[tokio::test]
    async fn test_blank_fields_never_reach_the_store() {
        let mut mock = MockBookRepository::new();
        mock.expect_create().never();
        mock.expect_update().never();
        let service = service(mock);

        assert!(matches!(
            service.create(&BookInput::new("   ", "Empati")).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.update(1, &BookInput::new("Adam Fawer", " ")).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_forwards_id() {
        let mut mock = MockBookRepository::new();
        mock.expect_update()
            .with(eq(7), mockall::predicate::always())
            .times(1)
            .returning(|id, data| Ok(Book::from_input(id, data)));

        let book = service(mock).update(7, &BookInput::new("X", "Y")).await.unwrap();
        assert_eq!(book.id, 7);
    }

    #[tokio::test]
    async fn test_not_found_propagates() {
        let mut mock = MockBookRepository::new();
        mock.expect_get_by_id()
            .with(eq(9))
            .returning(|id| Err(AppError::NotFound(format!("Book {} not found", id))));
        mock.expect_delete()
            .with(eq(9))
            .returning(|id| Err(AppError::NotFound(format!("Book {} not found", id))));
        let service = service(mock);

        assert!(matches!(service.get_by_id(9).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(9).await, Err(AppError::NotFound(_))));
    }
}
