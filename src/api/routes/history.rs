//! History Routes
//!
//! - GET /history - All stored analyses, oldest first
//! - DELETE /clear-history - Remove every stored analysis

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::MessageResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::history::HistoryEntry;

/// GET /history
pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<Vec<HistoryEntry>> {
    Json(state.history.entries().await)
}

/// DELETE /clear-history
pub async fn clear_history(State(state): State<Arc<AppState>>) -> ApiResult<Json<MessageResponse>> {
    state.history.clear().await?;
    Ok(Json(MessageResponse::success("Historique effacé.")))
}
