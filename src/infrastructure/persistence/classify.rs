//! Classification of native `sqlx` errors at the storage boundary.
//!
//! Engines hold a [`Classifier`] and call it on every failed write. Swapping
//! the concrete database only requires a new classifier; call sites stay the
//! same.

use crate::domain::errors::ErrorKind;

/// Maps a native engine error to a domain [`ErrorKind`].
pub type Classifier = fn(&sqlx::Error) -> ErrorKind;

/// `SQLITE_CONSTRAINT_UNIQUE`
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
/// `SQLITE_CONSTRAINT_PRIMARYKEY`
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";

/// Default classifier for SQLite.
///
/// Looks at the extended result code first and falls back to the
/// driver-reported error kind.
pub fn classify_sqlite(err: &sqlx::Error) -> ErrorKind {
    let Some(db_err) = err.as_database_error() else {
        return ErrorKind::Other;
    };

    if matches!(
        db_err.code().as_deref(),
        Some(SQLITE_CONSTRAINT_UNIQUE | SQLITE_CONSTRAINT_PRIMARYKEY)
    ) {
        return ErrorKind::UniqueViolation;
    }

    if db_err.is_unique_violation() {
        ErrorKind::UniqueViolation
    } else {
        ErrorKind::Other
    }
}

/// Driver-agnostic classifier relying only on `sqlx`'s error kind.
pub fn classify_generic(err: &sqlx::Error) -> ErrorKind {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => ErrorKind::UniqueViolation,
        _ => ErrorKind::Other,
    }
}
