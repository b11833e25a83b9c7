#![allow(dead_code)]

use shortlink::domain::repositories::UrlRepository;
use shortlink::infrastructure::persistence::{SqliteUrlRepository, StorageOptions};
use shortlink::state::{AppState, Credentials};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const USER: &str = "admin";
pub const PASSWORD: &str = "secret";

/// A SQLite store in a throwaway directory, removed on drop.
pub struct TestStore {
    pub repo: SqliteUrlRepository,
    pub dir: TempDir,
}

impl TestStore {
    pub fn path(&self) -> PathBuf {
        db_path(&self.dir)
    }
}

pub fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("storage.db")
}

pub async fn sqlite_store() -> TestStore {
    let dir = TempDir::new().unwrap();
    let repo = SqliteUrlRepository::open(&StorageOptions::new(db_path(&dir)))
        .await
        .unwrap();
    TestStore { repo, dir }
}

pub fn create_test_state(repo: Arc<dyn UrlRepository>) -> AppState {
    AppState::new(repo, Credentials::new(USER, PASSWORD))
}

// ─── Contract properties shared by every engine ─────────────────────────────

pub async fn assert_round_trip(repo: &dyn UrlRepository) {
    repo.save("https://example.com/some/long/path?q=1", "rt1")
        .await
        .unwrap();

    assert_eq!(
        repo.get("rt1").await.unwrap(),
        "https://example.com/some/long/path?q=1"
    );
}

pub async fn assert_uniqueness(repo: &dyn UrlRepository) {
    repo.save("https://first.com", "uniq").await.unwrap();

    let err = repo.save("https://second.com", "uniq").await.unwrap_err();
    assert!(err.is_alias_exists(), "unexpected error: {err}");

    let err = repo.save("https://first.com", "uniq").await.unwrap_err();
    assert!(err.is_alias_exists(), "unexpected error: {err}");

    assert_eq!(repo.get("uniq").await.unwrap(), "https://first.com");
}

pub async fn assert_not_found(repo: &dyn UrlRepository) {
    let err = repo.get("never-saved").await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
}

pub async fn assert_idempotent_delete(repo: &dyn UrlRepository) {
    assert_eq!(repo.delete("ghost").await.unwrap(), 0);

    repo.save("https://example.com", "del1").await.unwrap();
    assert_eq!(repo.delete("del1").await.unwrap(), 1);
    assert!(repo.get("del1").await.unwrap_err().is_not_found());

    assert_eq!(repo.delete("del1").await.unwrap(), 0);
}

pub async fn assert_recreate_after_delete(repo: &dyn UrlRepository) {
    let first = repo.save("https://one.com", "again").await.unwrap();
    assert_eq!(repo.delete("again").await.unwrap(), 1);
    let second = repo.save("https://two.com", "again").await.unwrap();

    assert_ne!(first, second);
    assert_eq!(repo.get("again").await.unwrap(), "https://two.com");
}

pub async fn assert_shared_targets(repo: &dyn UrlRepository) {
    let a = repo.save("https://same.com", "same-a").await.unwrap();
    let b = repo.save("https://same.com", "same-b").await.unwrap();

    assert_ne!(a, b);
    assert_eq!(repo.get("same-a").await.unwrap(), "https://same.com");
    assert_eq!(repo.get("same-b").await.unwrap(), "https://same.com");
}

/// Runs the end-to-end scenario on a fresh store; the first id must be 1.
pub async fn assert_scenario(repo: &dyn UrlRepository) {
    assert_eq!(repo.save("https://example.com", "ex1").await.unwrap(), 1);
    assert_eq!(repo.get("ex1").await.unwrap(), "https://example.com");
    assert!(
        repo.save("https://other.com", "ex1")
            .await
            .unwrap_err()
            .is_alias_exists()
    );
    assert_eq!(repo.delete("ex1").await.unwrap(), 1);
    assert!(repo.get("ex1").await.unwrap_err().is_not_found());
}

/// Fires `n` concurrent saves of one alias; returns (successes, conflicts).
pub async fn race_saves(repo: Arc<dyn UrlRepository>, alias: &str, n: usize) -> (usize, usize) {
    let mut handles = Vec::with_capacity(n);

    for i in 0..n {
        let repo = Arc::clone(&repo);
        let alias = alias.to_string();
        handles.push(tokio::spawn(async move {
            repo.save(&format!("https://racer{i}.com"), &alias).await
        }));
    }

    let mut wins = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => wins += 1,
            Err(e) if e.is_alias_exists() => conflicts += 1,
            Err(e) => panic!("unexpected error in race: {e}"),
        }
    }

    (wins, conflicts)
}
