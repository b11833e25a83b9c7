//! Storage error taxonomy.
//!
//! Every engine reports failures through [`StorageError`]. Callers match on the
//! variant to pick a transport-level response; the underlying engine error is
//! only available as an opaque [`std::error::Error`] source for diagnostics.

use thiserror::Error;

/// Opaque cause carried by [`StorageError::Failure`] and
/// [`StorageError::Initialization`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Classification of a native engine error.
///
/// Produced by the engine's classifier function at the storage boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A uniqueness constraint rejected the write.
    UniqueViolation,
    /// Anything else: I/O, connectivity, other constraint types.
    Other,
}

#[derive(Debug, Error)]
pub enum StorageError {
    /// `save` was called with an alias bound to a live record.
    #[error("{op}: alias already exists: {alias}")]
    AliasExists { op: &'static str, alias: String },

    /// `get` found no live record for the alias.
    #[error("{op}: alias not found: {alias}")]
    NotFound { op: &'static str, alias: String },

    /// Any other engine-level failure.
    #[error("{op}: {source}")]
    Failure {
        op: &'static str,
        #[source]
        source: BoxError,
    },

    /// The store could not be opened or its schema created/verified.
    #[error("{op}: storage initialization failed: {source}")]
    Initialization {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl StorageError {
    pub fn failure(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Failure {
            op,
            source: source.into(),
        }
    }

    pub fn initialization(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Initialization {
            op,
            source: source.into(),
        }
    }

    /// Builds the error for a failed write from its classification.
    pub fn from_kind(
        kind: ErrorKind,
        op: &'static str,
        alias: &str,
        source: impl Into<BoxError>,
    ) -> Self {
        match kind {
            ErrorKind::UniqueViolation => Self::AliasExists {
                op,
                alias: alias.to_string(),
            },
            ErrorKind::Other => Self::failure(op, source),
        }
    }

    /// Name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            Self::AliasExists { op, .. }
            | Self::NotFound { op, .. }
            | Self::Failure { op, .. }
            | Self::Initialization { op, .. } => op,
        }
    }

    pub fn is_alias_exists(&self) -> bool {
        matches!(self, Self::AliasExists { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
