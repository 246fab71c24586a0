//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"id": 1, "author": "Adam Fawer", "bookName": "Empati"}))]
pub struct Book {
    /// The auto-generated id of a book
    pub id: i32,
    /// Author of the book
    pub author: String,
    /// Title of the book
    pub book_name: String,
}

/// Create / update book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"author": "Adam Fawer", "bookName": "Empati"}))]
pub struct BookInput {
    #[validate(length(min = 1, max = 255, message = "author must be 1 to 255 characters"))]
    pub author: String,
    #[validate(length(min = 1, max = 255, message = "bookName must be 1 to 255 characters"))]
    pub book_name: String,
}

impl BookInput {
    pub fn new(author: impl Into<String>, book_name: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            book_name: book_name.into(),
        }
    }

    /// Copy with surrounding whitespace removed from both fields
    pub fn trimmed(&self) -> Self {
        Self::new(self.author.trim(), self.book_name.trim())
    }
}

impl Book {
    pub fn from_input(id: i32, data: &BookInput) -> Self {
        Self {
            id,
            author: data.author.clone(),
            book_name: data.book_name.clone(),
        }
    }

    /// Overwrite the mutable fields, the id is left untouched
    pub fn apply(&mut self, data: &BookInput) {
        self.author = data.author.clone();
        self.book_name = data.book_name.clone();
    }
}
