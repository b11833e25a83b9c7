//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::api::handlers::storage_error;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Every request is a fresh storage lookup.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
/// Returns 500 Internal Server Error if storage fails.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target = state.urls.get(&alias).await.map_err(storage_error)?;

    debug!(alias = %alias, target = %target, "Redirecting");

    Ok(Redirect::temporary(&target))
}
