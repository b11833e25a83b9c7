//! # shortlink
//!
//! Maps short aliases to long URLs and back, persisting the mapping in SQLite
//! so redirects survive restarts.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record, the storage contract and its error taxonomy
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory storage engines
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::errors::{ErrorKind, StorageError};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{
        InMemoryUrlRepository, SqliteUrlRepository, StorageOptions,
    };
    pub use crate::state::{AppState, Credentials};
}
