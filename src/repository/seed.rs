//! Initial book list loaded at startup

use std::{collections::HashSet, fs, path::Path};

use anyhow::{bail, Context};

use crate::models::book::{Book, BookInput};

/// Built-in seed used when no seed file is configured
pub fn default_books() -> Vec<Book> {
    vec![Book::from_input(1, &BookInput::new("Adam Fawer", "Empati"))]
}

/// Load the seed list from a JSON array of books, or fall back to the built-in one
pub fn load_seed_books(path: Option<&Path>) -> anyhow::Result<Vec<Book>> {
    let Some(path) = path else {
        return Ok(default_books());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let books: Vec<Book> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid seed file {}", path.display()))?;

    let mut seen = HashSet::new();
    for book in &books {
        if !seen.insert(book.id) {
            bail!("Duplicate book id {} in seed file {}", book.id, path.display());
        }
    }

    Ok(books)
}
