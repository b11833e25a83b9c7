//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::UrlRecord;
use crate::domain::errors::StorageError;
use crate::domain::repositories::UrlRepository;

/// In-memory repository backed by a `DashMap`.
///
/// Sharded locks let different aliases be written concurrently; the entry API
/// makes check-and-insert atomic per alias, so racing saves of one alias have
/// exactly one winner. Nothing survives the process.
#[derive(Debug)]
pub struct InMemoryUrlRepository {
    records: DashMap<String, UrlRecord>,
    last_id: AtomicI64,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            last_id: AtomicI64::new(0),
        }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn save(&self, target: &str, alias: &str) -> Result<i64, StorageError> {
        const OP: &str = "storage.memory.save";

        // Mirrors the CHECK constraints of the SQLite schema.
        if alias.is_empty() {
            return Err(StorageError::failure(OP, "CHECK constraint failed: alias <> ''"));
        }
        if target.is_empty() {
            return Err(StorageError::failure(OP, "CHECK constraint failed: target <> ''"));
        }

        match self.records.entry(alias.to_string()) {
            Entry::Occupied(_) => Err(StorageError::AliasExists {
                op: OP,
                alias: alias.to_string(),
            }),
            Entry::Vacant(slot) => {
                let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
                slot.insert(UrlRecord::new(id, alias, target));
                Ok(id)
            }
        }
    }

    async fn get(&self, alias: &str) -> Result<String, StorageError> {
        self.records
            .get(alias)
            .map(|record| record.target.clone())
            .ok_or_else(|| StorageError::NotFound {
                op: "storage.memory.get",
                alias: alias.to_string(),
            })
    }

    async fn delete(&self, alias: &str) -> Result<u64, StorageError> {
        Ok(u64::from(self.records.remove(alias).is_some()))
    }
}
