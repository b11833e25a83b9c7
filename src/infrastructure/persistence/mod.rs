//! Storage engine implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::UrlRepository`].
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Durable storage in a SQLite file
//! - [`InMemoryUrlRepository`] - Process-local storage with identical semantics
//!
//! Engine errors are turned into domain errors by a [`classify::Classifier`].

pub mod classify;
pub mod memory_url_repository;
pub mod sqlite_url_repository;

pub use classify::{Classifier, classify_generic, classify_sqlite};
pub use memory_url_repository::InMemoryUrlRepository;
pub use sqlite_url_repository::{SqliteUrlRepository, StorageOptions};
