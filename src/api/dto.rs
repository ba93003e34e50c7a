//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentLabel;

// ============================================
// ANALYZE DTOs
// ============================================

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to classify
    #[serde(default)]
    pub text: Option<String>,
}

/// Analyze response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Status: "success"
    pub status: String,
    pub label: SentimentLabel,
    pub score: f64,
    /// ISO 639-3 code, "short-text" or "undetermined"
    pub language: String,
    /// Every class the backend scored; currently the winning one only
    pub all_results: Vec<LabelScore>,
}

/// A label with its confidence
#[derive(Debug, Serialize)]
pub struct LabelScore {
    pub label: SentimentLabel,
    pub score: f64,
}

// ============================================
// SHARED DTOs
// ============================================

/// Status + human readable message, used for confirmations and errors
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Status: "success" or "error"
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// History store status: "ok" or "error"
    pub history: String,
    pub history_entries: usize,
    /// Name of the sentiment backend
    pub analyzer: String,
    pub uptime_seconds: u64,
    pub version: String,
}
