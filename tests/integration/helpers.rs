//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use bytes::Bytes;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use lockdrop_core::config::AppConfig;

/// Multipart boundary used by [`TestApp::upload`].
pub const BOUNDARY: &str = "lockdrop-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by in-memory blob storage.
    pub async fn new() -> Self {
        Self::with_config(Self::test_config()).await
    }

    /// Create a test application from an explicit configuration.
    pub async fn with_config(config: AppConfig) -> Self {
        let state = lockdrop_api::build_state(config.clone())
            .await
            .expect("Failed to build application state");
        let router = lockdrop_api::build_router(state);

        Self { router, config }
    }

    /// Defaults with the memory provider and cheap hashing parameters.
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.provider = "memory".to_string();
        config.hashing.memory_kib = 64;
        config.hashing.iterations = 1;
        config.hashing.parallelism = 1;
        config
    }

    /// Send a raw request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            bytes,
            body,
        }
    }

    /// Send a bodiless request
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Upload `data` as the `file` part with the given filename.
    pub async fn upload(&self, filename: &str, data: &[u8]) -> TestResponse {
        self.send_multipart(multipart_body("file", filename, data))
            .await
    }

    /// Post a prebuilt multipart body to `/upload`.
    pub async fn send_multipart(&self, body: Vec<u8>) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header("Content-Length", body.len())
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Submit the download form for `link` (a `/download/{id}` path).
    pub async fn download(&self, link: &str, password: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(link)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(format!("password={password}")))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Upload a file and return `(link, password)` from the response.
    pub async fn share(&self, filename: &str, data: &[u8]) -> (String, String) {
        let response = self.upload(filename, data).await;
        assert_eq!(response.status, StatusCode::OK, "upload failed: {:?}", response.body);

        let link = response.body["link"]
            .as_str()
            .expect("missing link")
            .to_string();
        let password = response.body["password"]
            .as_str()
            .expect("missing password")
            .to_string();
        (link, password)
    }
}

/// Build a single-part multipart body.
pub fn multipart_body(field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub bytes: Bytes,
    /// Parsed JSON body, `Null` when not JSON
    pub body: Value,
}

impl TestResponse {
    /// Header value as a string, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
