//! Handlers for alias management endpoints (create, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::api::handlers::storage_error;
use crate::error::AppError;
use crate::state::AppState;

/// Binds a new alias to a URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "ex1"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or fails validation.
/// Returns 409 Conflict if the alias is already taken.
/// Returns 500 Internal Server Error if storage fails.
pub async fn save_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Failed to decode request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let id = state
        .urls
        .save(&payload.url, &payload.alias)
        .await
        .map_err(storage_error)?;

    info!(id, alias = %payload.alias, "URL added");

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            alias: payload.alias,
            url: payload.url,
        }),
    ))
}

/// Removes an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// Deleting an alias that does not exist also returns 204, so clients can
/// retry freely.
///
/// # Errors
///
/// Returns 500 Internal Server Error if storage fails.
pub async fn delete_url_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let affected = state.urls.delete(&alias).await.map_err(storage_error)?;

    info!(alias = %alias, affected, "URL deleted");

    Ok(StatusCode::NO_CONTENT)
}
