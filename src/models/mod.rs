//! Data models for the Library API

pub mod book;

pub use book::{Book, BookInput};
