//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Span, info, warn};

/// Logs request method, path, status, and duration.
///
/// Download paths carry the share link, so only the route prefix is logged
/// for them.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = loggable_path(request.uri().path());
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "HTTP request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "HTTP request"
        );
    }

    response
}

/// Span for tower-http's `TraceLayer`, with the link masked out of the path.
pub fn request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %loggable_path(request.uri().path()),
    )
}

fn loggable_path(path: &str) -> String {
    match path.strip_prefix("/download/") {
        Some(_) => "/download/{link}".to_string(),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_links_are_masked() {
        assert_eq!(loggable_path("/download/abcDEF123_-"), "/download/{link}");
        assert_eq!(loggable_path("/upload"), "/upload");
        assert_eq!(loggable_path("/"), "/");
    }

    #[test]
    fn test_request_span_omits_link() {
        let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
        tracing::subscriber::with_default(subscriber, || {
            let request = axum::http::Request::builder()
                .method("POST")
                .uri("/download/secretLinkValue123")
                .body(axum::body::Body::empty())
                .unwrap();

            let span = request_span(&request);
            let metadata = span.metadata().expect("span is enabled");
            assert_eq!(metadata.name(), "request");
            assert!(metadata.fields().field("path").is_some());
            assert!(metadata.fields().field("uri").is_none());
        });
    }
}
