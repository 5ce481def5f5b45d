//! Integration tests for upload and password-gated download.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};

use helpers::{TestApp, multipart_body};

#[tokio::test]
async fn test_upload_then_download() {
    let app = TestApp::new().await;
    let (link, password) = app.share("notes.txt", b"hello world").await;

    assert!(link.starts_with("/download/"));
    assert!(password.len() >= 11);

    let response = app.download(&link, &password).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.bytes[..], b"hello world");
    assert_eq!(
        response.header("content-disposition"),
        Some("attachment; filename=\"notes.txt\"")
    );
    assert_eq!(response.header("content-type"), Some("text/plain"));
    assert_eq!(response.header("content-length"), Some("11"));
}

#[tokio::test]
async fn test_download_is_repeatable() {
    let app = TestApp::new().await;
    let (link, password) = app.share("data.bin", &[7u8; 2048]).await;

    for _ in 0..3 {
        let response = app.download(&link, &password).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.bytes.len(), 2048);
    }
}

#[tokio::test]
async fn test_wrong_password_is_forbidden() {
    let app = TestApp::new().await;
    let (link, password) = app.share("secret.txt", b"classified").await;

    let response = app.download(&link, "not-the-password").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
    assert_eq!(response.body["message"], "Incorrect password");
    assert!(!response.bytes.windows(10).any(|w| w == b"classified"));

    let response = app.download(&link, "").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // A failed attempt does not lock the share.
    let response = app.download(&link, &password).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_link_is_not_found() {
    let app = TestApp::new().await;
    let (_, password) = app.share("a.txt", b"a").await;

    let response = app
        .download("/download/AAAAAAAAAAAAAAAAAAAAAA", &password)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let response = app.download("/download/not.a.valid.link", "x").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_passwords_are_not_interchangeable() {
    let app = TestApp::new().await;
    let (link_a, password_a) = app.share("a.txt", b"first").await;
    let (link_b, password_b) = app.share("b.txt", b"second").await;

    assert_ne!(link_a, link_b);
    assert_ne!(password_a, password_b);

    let response = app.download(&link_a, &password_b).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.download(&link_b, &password_b).await;
    assert_eq!(&response.bytes[..], b"second");
}

#[tokio::test]
async fn test_upload_without_file_part() {
    let app = TestApp::new().await;
    let response = app
        .send_multipart(multipart_body("attachment", "x.txt", b"data"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upload_with_empty_filename() {
    let app = TestApp::new().await;
    let response = app.upload("", b"data").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "No file selected");
}

#[tokio::test]
async fn test_upload_with_empty_content() {
    let app = TestApp::new().await;
    let response = app.upload("empty.txt", b"").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let mut config = TestApp::test_config();
    config.upload.max_body_bytes = 1024;
    let app = TestApp::with_config(config).await;

    let response = app.upload("big.bin", &[0u8; 4096]).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_traversal_filename_is_sanitized() {
    let app = TestApp::new().await;
    let (link, password) = app.share("../../etc/passwd", b"root:x:0:0").await;

    let response = app.download(&link, &password).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header("content-disposition"),
        Some("attachment; filename=\"etc_passwd\"")
    );
}

#[tokio::test]
async fn test_unknown_extension_is_octet_stream() {
    let app = TestApp::new().await;
    let (link, password) = app.share("blob.zzz", b"\x00\x01").await;

    let response = app.download(&link, &password).await;
    assert_eq!(
        response.header("content-type"),
        Some("application/octet-stream")
    );
}

#[tokio::test]
async fn test_download_without_form_body() {
    let app = TestApp::new().await;
    let (link, _) = app.share("a.txt", b"a").await;

    let bare_post = |uri: &str| {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.send(bare_post("/download/AAAAAAAAAAAAAAAAAAAAAA")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let response = app.send(bare_post(&link)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "Incorrect password");
}
