//! Tracing subscriber setup.
//!
//! The log format follows the deployment environment:
//!
//! | `ENV`   | Format | Default level |
//! |---------|--------|---------------|
//! | `local` | text   | `debug`       |
//! | `dev`   | JSON   | `debug`       |
//! | `prod`  | JSON   | `info`        |
//!
//! `RUST_LOG` replaces the default level when set.

use tracing_subscriber::EnvFilter;

use crate::config::Environment;

fn default_level(env: Environment) -> &'static str {
    match env {
        Environment::Local | Environment::Dev => "debug",
        Environment::Prod => "info",
    }
}

/// Builds the filter from an explicit directive or the environment default.
pub fn filter(env: Environment, directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level(env)))
}

/// Installs the global subscriber. Call once, before anything logs.
pub fn init(env: Environment, directive: Option<&str>) {
    let filter = filter(env, directive);

    match env {
        Environment::Local => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
        Environment::Dev | Environment::Prod => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init(),
    }
}
