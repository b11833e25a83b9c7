//! Storage contract for alias to URL mappings.

use crate::domain::errors::StorageError;
use async_trait::async_trait;

/// Repository interface for alias to URL mappings.
///
/// Request handlers depend on this trait only, so the concrete engine can be
/// swapped without touching them. Implementations must be safe for concurrent
/// use without external locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - DashMap implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new mapping and returns the id assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is bound to a live
    /// record. A uniqueness violation is never reported any other way.
    ///
    /// Returns [`StorageError::Failure`] on any other engine error.
    async fn save(&self, target: &str, alias: &str) -> Result<i64, StorageError>;

    /// Resolves an alias to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no live record matches.
    /// Returns [`StorageError::Failure`] on engine errors.
    async fn get(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the mapping for an alias.
    ///
    /// Returns the number of removed records: `0` when nothing matched,
    /// `1` otherwise. Deleting a missing alias is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Failure`] on engine errors.
    async fn delete(&self, alias: &str) -> Result<u64, StorageError>;
}
