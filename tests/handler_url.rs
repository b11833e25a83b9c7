mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use shortlink::domain::errors::StorageError;
use shortlink::domain::repositories::UrlRepository;
use shortlink::routes::router;
use std::sync::Arc;
use std::time::Duration;

/// `admin:secret`
const AUTH: &str = "Basic YWRtaW46c2VjcmV0";
/// `admin:wrong`
const BAD_AUTH: &str = "Basic YWRtaW46d3Jvbmc=";

fn make_server(repo: Arc<dyn UrlRepository>) -> TestServer {
    let state = common::create_test_state(repo);
    TestServer::new(router(state, Duration::from_secs(4))).unwrap()
}

async fn sqlite_server() -> (TestServer, common::TestStore) {
    let store = common::sqlite_store().await;
    let server = make_server(Arc::new(store.repo.clone()));
    (server, store)
}

// ─── POST /url ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_save_and_redirect() {
    let (server, _store) = sqlite_server().await;

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://example.com/target", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["alias"], "ex1");
    assert_eq!(body["url"], "https://example.com/target");

    let response = server.get("/ex1").await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_save_duplicate_alias_is_conflict() {
    let (server, store) = sqlite_server().await;
    store.repo.save("https://first.com", "taken").await.unwrap();

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://second.com", "alias": "taken" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "conflict");

    assert_eq!(store.repo.get("taken").await.unwrap(), "https://first.com");
}

#[tokio::test]
async fn test_save_requires_auth() {
    let (server, store) = sqlite_server().await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "noauth" }))
        .await;

    response.assert_status_unauthorized();
    assert!(response.headers().get("www-authenticate").is_some());
    assert!(store.repo.get("noauth").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_save_wrong_password() {
    let (server, _store) = sqlite_server().await;

    let response = server
        .post("/url")
        .add_header("Authorization", BAD_AUTH)
        .json(&json!({ "url": "https://example.com", "alias": "badauth" }))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_save_validation_errors() {
    let (server, _store) = sqlite_server().await;

    for body in [
        json!({ "url": "https://example.com", "alias": "" }),
        json!({ "url": "https://example.com", "alias": "with space" }),
        json!({ "url": "example.com", "alias": "ok" }),
        json!({ "alias": "missing-url" }),
    ] {
        let response = server
            .post("/url")
            .add_header("Authorization", AUTH)
            .json(&body)
            .await;

        response.assert_status_bad_request();
    }
}

// ─── GET /{alias} ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _store) = sqlite_server().await;

    let response = server.get("/nothing-here").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_does_not_require_auth() {
    let (server, store) = sqlite_server().await;
    store.repo.save("https://example.com", "public").await.unwrap();

    let response = server.get("/public").await;

    assert_eq!(response.status_code(), 307);
}

// ─── DELETE /url/{alias} ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_then_redirect_is_not_found() {
    let (server, store) = sqlite_server().await;
    store.repo.save("https://example.com", "gone").await.unwrap();

    server
        .delete("/url/gone")
        .add_header("Authorization", AUTH)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.get("/gone").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (server, _store) = sqlite_server().await;

    for _ in 0..2 {
        server
            .delete("/url/never-existed")
            .add_header("Authorization", AUTH)
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn test_delete_requires_auth() {
    let (server, store) = sqlite_server().await;
    store.repo.save("https://example.com", "guarded").await.unwrap();

    server.delete("/url/guarded").await.assert_status_unauthorized();

    assert_eq!(
        store.repo.get("guarded").await.unwrap(),
        "https://example.com"
    );
}

// ─── Middleware ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_request_id_is_generated() {
    let (server, _store) = sqlite_server().await;

    let response = server.get("/anything").await;

    assert!(response.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let (server, _store) = sqlite_server().await;

    let response = server
        .get("/anything")
        .add_header("x-request-id", "req-42")
        .await;

    assert_eq!(response.header("x-request-id"), "req-42");
}

#[tokio::test]
async fn test_request_without_connect_info_is_served() {
    let (server, store) = sqlite_server().await;
    store.repo.save("https://example.com", "plain").await.unwrap();

    let response = server
        .get("/plain")
        .add_header("user-agent", "curl/8.5.0")
        .await;

    assert_eq!(response.status_code(), 307);
    assert!(response.headers().get("x-request-id").is_some());
}

/// Engine that never answers in time.
struct StalledRepository;

#[async_trait]
impl UrlRepository for StalledRepository {
    async fn save(&self, _target: &str, _alias: &str) -> Result<i64, StorageError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(1)
    }

    async fn get(&self, _alias: &str) -> Result<String, StorageError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok("https://example.com".to_string())
    }

    async fn delete(&self, _alias: &str) -> Result<u64, StorageError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(0)
    }
}

#[tokio::test]
async fn test_stalled_storage_times_out() {
    let state = common::create_test_state(Arc::new(StalledRepository));
    let server = TestServer::new(router(state, Duration::from_millis(100))).unwrap();

    let response = server.get("/slow").await;

    response.assert_status(StatusCode::REQUEST_TIMEOUT);
}

/// Engine whose every call panics.
struct PanickingRepository;

#[async_trait]
impl UrlRepository for PanickingRepository {
    async fn save(&self, _target: &str, _alias: &str) -> Result<i64, StorageError> {
        panic!("save exploded")
    }

    async fn get(&self, _alias: &str) -> Result<String, StorageError> {
        panic!("get exploded")
    }

    async fn delete(&self, _alias: &str) -> Result<u64, StorageError> {
        panic!("delete exploded")
    }
}

#[tokio::test]
async fn test_panicking_handler_is_500() {
    let server = make_server(Arc::new(PanickingRepository));

    let response = server.get("/boom").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
