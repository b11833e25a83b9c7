//! HTTP request handlers for API endpoints.
//!
//! Handlers are the only place storage errors get logged; the repositories
//! just return them.

pub mod redirect;
pub mod urls;

pub use redirect::redirect_handler;
pub use urls::{delete_url_handler, save_url_handler};

use crate::domain::errors::StorageError;
use crate::error::AppError;

/// Logs a storage error at a level matching its severity and maps it to a response.
pub(crate) fn storage_error(err: StorageError) -> AppError {
    match &err {
        StorageError::Failure { .. } | StorageError::Initialization { .. } => {
            tracing::error!(op = err.op(), error = %err, "storage failure");
        }
        StorageError::AliasExists { .. } | StorageError::NotFound { .. } => {
            tracing::info!(op = err.op(), "{}", err);
        }
    }
    AppError::from(err)
}
