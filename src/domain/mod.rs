//! Domain layer containing the persisted entity, the storage contract and its
//! error taxonomy.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage contract implemented by the infrastructure layer
//! - [`errors`] - Typed storage failures surfaced to callers
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Engine-specific error types never appear here; engines classify their
//!   native errors into [`errors::ErrorKind`] and report [`errors::StorageError`]

pub mod entities;
pub mod errors;
pub mod repositories;
