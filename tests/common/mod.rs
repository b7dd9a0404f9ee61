// Common test utilities for integration tests
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::http::{header, Method};
use poem::{Request, Response};
use sea_orm::Database;
use tempfile::TempDir;

use studio_portal_backend::config::{ApplicationSettings, StorageSettings};
use studio_portal_backend::providers::FsBlobStore;
use studio_portal_backend::AppData;

pub const TEST_BUCKET: &str = "test-bucket";
pub const TEST_URL_BASE: &str = "http://localhost:3000/storage";

/// Application context wired against an in-memory database and a
/// temp-directory blob store
pub struct TestContext {
    pub app_data: Arc<AppData>,
    // Held so the storage directory outlives the test body
    pub storage_dir: TempDir,
}

/// Creates a migrated test database and assembles AppData around it
pub async fn setup_context() -> TestContext {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let storage_dir = tempfile::tempdir().expect("Failed to create storage dir");

    let settings = ApplicationSettings {
        database_url: "sqlite::memory:".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        session_secret: "integration-test-secret-0123456789abcdef".to_string(),
        storage: StorageSettings {
            bucket: TEST_BUCKET.to_string(),
            root: storage_dir.path().to_path_buf(),
            public_url_base: TEST_URL_BASE.to_string(),
        },
        public_dir: PathBuf::from("public"),
    };

    let blob_store =
        Arc::new(FsBlobStore::new(&settings.storage).expect("Failed to init blob store"));
    let app_data = Arc::new(AppData::with_blob_store(db, settings, blob_store));

    TestContext {
        app_data,
        storage_dir,
    }
}

/// Build a JSON POST request
pub fn post_json(path: &str, body: serde_json::Value) -> Request {
    Request::builder()
        .method(Method::POST)
        .uri(path.parse().unwrap())
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
}

/// Build a JSON PUT request
pub fn put_json(path: &str, body: serde_json::Value) -> Request {
    Request::builder()
        .method(Method::PUT)
        .uri(path.parse().unwrap())
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
}

/// Build a bodyless request with the given method
pub fn request(method: Method, path: &str) -> Request {
    Request::builder()
        .method(method)
        .uri(path.parse().unwrap())
        .finish()
}

/// Build a bodyless request carrying a session cookie
pub fn request_with_cookie(method: Method, path: &str, cookie: &str) -> Request {
    Request::builder()
        .method(method)
        .uri(path.parse().unwrap())
        .header(header::COOKIE, cookie)
        .finish()
}

/// Build a multipart upload request with each file in an "images" field
pub fn multipart_upload(path: &str, files: &[(&str, &[u8])]) -> Request {
    let boundary = "PORTALTESTBOUNDARY";
    let mut body: Vec<u8> = Vec::new();

    for (name, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"images\"; \
                 filename=\"{name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(path.parse().unwrap())
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(body)
}

/// Read a response body as JSON
pub async fn json_body(resp: Response) -> serde_json::Value {
    let text = resp
        .into_body()
        .into_string()
        .await
        .expect("Failed to read response body");
    serde_json::from_str(&text).expect("Response body should be JSON")
}

/// Extract the session cookie pair from a login response
pub fn session_cookie(resp: &Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .expect("Response should set a session cookie")
        .to_str()
        .expect("Cookie should be valid UTF-8")
        .split(';')
        .next()
        .expect("Cookie should have a name=value pair")
        .to_string()
}
