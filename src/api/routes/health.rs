//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let history_ok = tokio::fs::metadata(state.history.path()).await.is_ok();
    let history_entries = state.history.len().await;

    Json(HealthResponse {
        status: if history_ok { "healthy" } else { "degraded" }.to_string(),
        history: if history_ok { "ok" } else { "error" }.to_string(),
        history_entries,
        analyzer: state.analyzer.name().to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
