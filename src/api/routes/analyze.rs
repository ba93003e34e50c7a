//! Analyze Route
//!
//! - POST /analyze - Classify a text and record it in the history

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{AnalyzeRequest, AnalyzeResponse, LabelScore};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::history::HistoryEntry;
use crate::sentiment::detect_language;

/// POST /analyze
///
/// Detects the language, classifies the sentiment, then appends the
/// result to the history. A history write failure is logged, not returned:
/// the caller still gets its analysis.
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let text = validate_analyze_request(payload)?;

    let language = detect_language(&text);
    let sentiment = state.analyzer.analyze(&text).await?;

    tracing::info!(
        label = %sentiment.label,
        score = sentiment.score,
        language = %language,
        chars = text.chars().count(),
        "Text analyzed"
    );

    let entry = HistoryEntry::new(&text, &sentiment, &language);
    if let Err(e) = state.history.append(entry).await {
        tracing::error!("Failed to record analysis in history: {}", e);
    }

    Ok(Json(AnalyzeResponse {
        status: "success".to_string(),
        label: sentiment.label,
        score: sentiment.score,
        language,
        all_results: vec![LabelScore {
            label: sentiment.label,
            score: sentiment.score,
        }],
    }))
}

/// Extract the trimmed text from an analyze request
fn validate_analyze_request(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<String> {
    let text = match payload {
        Ok(Json(AnalyzeRequest { text: Some(text) })) => text,
        Ok(_) => return Err(ApiError::Validation("No text provided".to_string())),
        Err(rejection) => {
            tracing::debug!("Rejected analyze body: {}", rejection);
            return Err(ApiError::Validation("No text provided".to_string()));
        }
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ApiError::Validation("Empty text provided".to_string()));
    }

    Ok(text.to_string())
}
