use sha2::{Digest, Sha256};
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::domain::repositories::UrlRepository;

/// Basic auth credentials guarding the management routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Compares SHA-256 digests in constant time, so neither the content nor
    /// the length of the configured values leaks through timing.
    pub fn matches(&self, user: &str, password: &str) -> bool {
        let user_ok = digest_eq(&self.user, user);
        let password_ok = digest_eq(&self.password, password);
        (user_ok & password_ok).into()
    }
}

fn digest_eq(expected: &str, given: &str) -> subtle::Choice {
    let expected = Sha256::digest(expected.as_bytes());
    let given = Sha256::digest(given.as_bytes());
    expected.as_slice().ct_eq(given.as_slice())
}

/// Shared state injected into every handler.
///
/// The repository is constructed once at startup and shared by reference.
#[derive(Clone)]
pub struct AppState {
    pub urls: Arc<dyn UrlRepository>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(urls: Arc<dyn UrlRepository>, credentials: Credentials) -> Self {
        Self {
            urls,
            credentials: Arc::new(credentials),
        }
    }
}
