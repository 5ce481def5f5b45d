//! # lockdrop-api
//!
//! HTTP layer for Lockdrop built on Axum.
//!
//! Provides the upload and download endpoints, the HTML forms, request
//! logging middleware, the typed multipart extractor, DTOs, and the mapping
//! from [`AppError`](lockdrop_core::AppError) to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_state;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
