//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let stats = state.share_service.stats().await;

    Json(ApiResponse::ok(HealthResponse {
        status: if stats.storage_healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        shares: stats.shares,
        storage: stats.storage_provider,
    }))
}
