//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite database file (created if missing)
//! - `HTTP_USER` / `HTTP_PASSWORD` - Basic auth credentials for `/url` routes
//!
//! ## Optional Variables
//!
//! - `ENV` - `local`, `dev` or `prod` (default: `local`), selects the log format
//! - `LISTEN` - Bind address (default: `localhost:8080`)
//! - `HTTP_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `STORAGE_MAX_CONNECTIONS` - Pool size (default: 4)
//! - `STORAGE_BUSY_TIMEOUT` - Seconds to wait on a locked database (default: 5)
//! - `STORAGE_ACQUIRE_TIMEOUT` - Seconds to wait for a pooled connection (default: 3)
//! - `RUST_LOG` - Log filter (default depends on `ENV`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::persistence::StorageOptions;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Developer machine: human-readable logs, debug level.
    Local,
    /// Shared development server: JSON logs, debug level.
    Dev,
    /// Production: JSON logs, info level.
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => anyhow::bail!("ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: Environment,
    pub storage_path: String,
    pub storage_max_connections: u32,
    /// Seconds SQLite waits on a locked database (`STORAGE_BUSY_TIMEOUT`).
    pub storage_busy_timeout: u64,
    /// Seconds a request waits for a pooled connection (`STORAGE_ACQUIRE_TIMEOUT`).
    pub storage_acquire_timeout: u64,
    pub listen_addr: String,
    /// Per-request timeout in seconds (`HTTP_TIMEOUT`).
    pub http_timeout: u64,
    pub http_user: String,
    pub http_password: String,
    /// Explicit `RUST_LOG` filter; `None` means the environment default.
    pub log_level: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let env = match env::var("ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Local,
        };

        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

        let storage_max_connections = parse_var("STORAGE_MAX_CONNECTIONS", 4)?;
        let storage_busy_timeout = parse_var("STORAGE_BUSY_TIMEOUT", 5)?;
        let storage_acquire_timeout = parse_var("STORAGE_ACQUIRE_TIMEOUT", 3)?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "localhost:8080".to_string());
        let http_timeout = parse_var("HTTP_TIMEOUT", 4)?;

        let http_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let http_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        let log_level = env::var("RUST_LOG").ok().filter(|v| !v.is_empty());

        Ok(Self {
            env,
            storage_path,
            storage_max_connections,
            storage_busy_timeout,
            storage_acquire_timeout,
            listen_addr,
            http_timeout,
            http_user,
            http_password,
            log_level,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `listen_addr` is not `host:port`
    /// - the pool size is outside `1..=64`
    /// - any timeout is zero
    /// - credentials are empty
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage_max_connections == 0 || self.storage_max_connections > 64 {
            anyhow::bail!(
                "STORAGE_MAX_CONNECTIONS must be between 1 and 64, got {}",
                self.storage_max_connections
            );
        }

        if self.storage_busy_timeout == 0 {
            anyhow::bail!("STORAGE_BUSY_TIMEOUT must be greater than 0");
        }
        if self.storage_acquire_timeout == 0 {
            anyhow::bail!("STORAGE_ACQUIRE_TIMEOUT must be greater than 0");
        }
        if self.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.http_user.is_empty() || self.http_password.is_empty() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must not be empty");
        }

        Ok(())
    }

    /// Connection settings for the storage engine.
    pub fn storage_options(&self) -> StorageOptions {
        StorageOptions {
            path: self.storage_path.clone().into(),
            max_connections: self.storage_max_connections,
            busy_timeout: Duration::from_secs(self.storage_busy_timeout),
            acquire_timeout: Duration::from_secs(self.storage_acquire_timeout),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Storage pool size: {}", self.storage_max_connections);
        tracing::info!("  Request timeout: {}s", self.http_timeout);
        tracing::info!("  Basic auth user: {}", self.http_user);
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
