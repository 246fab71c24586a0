//! In-memory book store

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    config::IdStrategy,
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
};

/// Storage operations on books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books, in insertion order
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get_by_id(&self, id: i32) -> AppResult<Book>;

    /// Append a new book and return it with its assigned id
    async fn create(&self, data: &BookInput) -> AppResult<Book>;

    async fn update(&self, id: i32, data: &BookInput) -> AppResult<Book>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn count(&self) -> AppResult<usize>;
}

struct BookStore {
    books: Vec<Book>,
    /// Next id handed out by `IdStrategy::Sequential`
    next_id: i64,
}

impl BookStore {
    fn position(&self, id: i32) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    fn assign_id(&mut self, strategy: IdStrategy) -> AppResult<i32> {
        match strategy {
            IdStrategy::Sequential => {
                let id = i32::try_from(self.next_id)
                    .map_err(|_| AppError::Internal("Book id space exhausted".to_string()))?;
                self.next_id += 1;
                Ok(id)
            }
            IdStrategy::StoreLength => i32::try_from(self.books.len() + 1)
                .map_err(|_| AppError::Internal("Book id space exhausted".to_string())),
        }
    }
}

/// Book store kept in process memory, lost on restart
pub struct InMemoryBookRepository {
    store: RwLock<BookStore>,
    id_strategy: IdStrategy,
}

impl InMemoryBookRepository {
    pub fn new(seed: Vec<Book>, id_strategy: IdStrategy) -> Self {
        let next_id = seed
            .iter()
            .map(|book| book.id)
            .max()
            .map_or(1, |max| i64::from(max) + 1);

        Self {
            store: RwLock::new(BookStore { books: seed, next_id }),
            id_strategy,
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.store.read().await.books.clone())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.store
            .read()
            .await
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, data: &BookInput) -> AppResult<Book> {
        let mut store = self.store.write().await;
        let id = store.assign_id(self.id_strategy)?;
        let book = Book::from_input(id, data);
        store.books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: i32, data: &BookInput) -> AppResult<Book> {
        let mut store = self.store.write().await;
        let book = store
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| not_found(id))?;
        book.apply(data);
        Ok(book.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut store = self.store.write().await;
        let index = store.position(id).ok_or_else(|| not_found(id))?;
        store.books.remove(index);
        Ok(())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.store.read().await.books.len())
    }
}
