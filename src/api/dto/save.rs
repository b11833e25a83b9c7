//! DTOs for the alias creation endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Aliases are used as a single path segment.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

/// Request to bind an alias to a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// Target URL (absolute, http or https).
    #[validate(custom(function = "validate_target"))]
    pub url: String,

    #[validate(length(min = 1, max = 64, message = "Alias must be 1-64 characters"))]
    #[validate(regex(
        path = "*ALIAS_REGEX",
        message = "Alias may only contain letters, digits, '-' and '_'"
    ))]
    pub alias: String,
}

/// Response for a created alias.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub alias: String,
    pub url: String,
}

fn validate_target(target: &str) -> Result<(), ValidationError> {
    let parsed = url::Url::parse(target).map_err(|_| {
        ValidationError::new("url").with_message("Invalid URL format".into())
    })?;

    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Ok(()),
        _ => Err(ValidationError::new("url")
            .with_message("URL must be absolute http or https".into())),
    }
}
