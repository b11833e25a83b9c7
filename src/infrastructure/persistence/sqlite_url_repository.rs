//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::errors::StorageError;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::classify::{Classifier, classify_sqlite};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url (
        id     INTEGER PRIMARY KEY AUTOINCREMENT,
        alias  TEXT NOT NULL CHECK (alias <> ''),
        target TEXT NOT NULL CHECK (target <> '')
    )
"#;

const CREATE_ALIAS_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// Connection settings for [`SqliteUrlRepository::open`].
#[derive(Debug, Clone)]
pub struct StorageOptions {
    /// Database file; created if missing, its directory must exist.
    pub path: PathBuf,
    pub max_connections: u32,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Duration,
    /// How long a caller waits for a pooled connection before failing.
    pub acquire_timeout: Duration,
}

impl StorageOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 4,
            busy_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(3),
        }
    }
}

/// SQLite repository for alias to URL mappings.
///
/// Uniqueness of aliases is enforced by the `idx_alias` unique index; every
/// operation is a single autocommit statement, so concurrent callers only ever
/// observe whole records. `AUTOINCREMENT` keeps ids from being reused after
/// deletion.
#[derive(Debug, Clone)]
pub struct SqliteUrlRepository {
    pool: SqlitePool,
    classify: Classifier,
}

impl SqliteUrlRepository {
    /// Opens the database, creating the file, table and index when absent.
    ///
    /// Safe to call repeatedly against the same location.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Initialization`] if the location is
    /// inaccessible or the schema cannot be created or verified.
    pub async fn open(options: &StorageOptions) -> Result<Self, StorageError> {
        const OP: &str = "storage.sqlite.open";

        let connect_options = SqliteConnectOptions::new()
            .filename(&options.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(options.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.acquire_timeout)
            .connect_with(connect_options)
            .await
            .map_err(|e| StorageError::initialization(OP, e))?;

        let repository = Self::new(pool);
        repository.init_schema().await?;

        Ok(repository)
    }

    /// Wraps an existing pool. The schema is assumed to be in place.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            classify: classify_sqlite,
        }
    }

    /// Replaces the function used to classify failed writes.
    pub fn with_classifier(mut self, classify: Classifier) -> Self {
        self.classify = classify;
        self
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every pooled connection, waiting for in-flight statements.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn init_schema(&self) -> Result<(), StorageError> {
        const OP: &str = "storage.sqlite.init_schema";

        for statement in [CREATE_TABLE, CREATE_ALIAS_INDEX] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| StorageError::initialization(OP, e))?;
        }

        // Fails on a pre-existing table with an incompatible layout.
        sqlx::query("SELECT id, alias, target FROM url LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::initialization(OP, e))?;

        Ok(())
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, target: &str, alias: &str) -> Result<i64, StorageError> {
        const OP: &str = "storage.sqlite.save";

        let result = sqlx::query("INSERT INTO url (target, alias) VALUES (?, ?)")
            .bind(target)
            .bind(alias)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(err) => Err(StorageError::from_kind((self.classify)(&err), OP, alias, err)),
        }
    }

    async fn get(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "storage.sqlite.get";

        sqlx::query_scalar::<_, String>("SELECT target FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::failure(OP, e))?
            .ok_or_else(|| StorageError::NotFound {
                op: OP,
                alias: alias.to_string(),
            })
    }

    async fn delete(&self, alias: &str) -> Result<u64, StorageError> {
        const OP: &str = "storage.sqlite.delete";

        let done = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::failure(OP, e))?;

        Ok(done.rows_affected())
    }
}
