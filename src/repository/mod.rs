//! Repository layer for book storage

pub mod books;
pub mod seed;

use std::sync::Arc;

use crate::{config::IdStrategy, models::Book};

pub use books::{BookRepository, InMemoryBookRepository};

/// Main repository struct holding the storage backends
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookRepository>,
}

impl Repository {
    /// Create a new repository with the given book storage
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    /// Repository backed by an in-memory store holding `seed`
    pub fn in_memory(seed: Vec<Book>, id_strategy: IdStrategy) -> Self {
        Self::new(Arc::new(InMemoryBookRepository::new(seed, id_strategy)))
    }
}
