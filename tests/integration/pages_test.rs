//! Integration tests for the HTML forms and health endpoint.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_index_serves_upload_form() {
    let app = TestApp::new().await;
    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = String::from_utf8_lossy(&response.bytes);
    assert!(html.contains("enctype=\"multipart/form-data\""));
    assert!(html.contains("name=\"file\""));
}

#[tokio::test]
async fn test_download_form_does_not_reveal_existence() {
    let app = TestApp::new().await;
    let (link, _) = app.share("a.txt", b"a").await;

    let known = app.get(&link).await;
    let unknown = app.get("/download/AAAAAAAAAAAAAAAAAAAAAA").await;

    assert_eq!(known.status, StatusCode::OK);
    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(known.bytes, unknown.bytes);
    assert!(String::from_utf8_lossy(&known.bytes).contains("name=\"password\""));
}

#[tokio::test]
async fn test_health_reports_share_count() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["shares"], 0);
    assert_eq!(response.body["data"]["storage"], "memory");

    app.share("a.txt", b"a").await;
    app.share("b.txt", b"b").await;

    let response = app.get("/health").await;
    assert_eq!(response.body["data"]["shares"], 2);
}
