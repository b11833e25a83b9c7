//! API route configuration.
//!
//! Management endpoints require HTTP Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_url_handler, save_url_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Alias management routes, mounted under `/url`.
///
/// # Endpoints
///
/// - `POST   /`          - Bind an alias to a URL
/// - `DELETE /{alias}`   - Remove an alias (idempotent)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(save_url_handler))
        .route("/{alias}", delete(delete_url_handler))
}
