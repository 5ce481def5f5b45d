//! Route definitions for the Lockdrop HTTP surface.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.upload.max_body_bytes;

    Router::new()
        .merge(page_routes())
        .merge(share_routes())
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(max_body))
        .layer(RequestBodyLimitLayer::new(max_body))
        .layer(TraceLayer::new_for_http().make_span_with(middleware::logging::request_span))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Upload form
fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::pages::index))
}

/// Upload, download form, and password-gated download
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handlers::share::upload))
        .route(
            "/download/{link}",
            get(handlers::pages::download_form).post(handlers::share::download),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
