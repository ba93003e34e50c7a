//! Sentiment Analysis
//!
//! Classification is delegated to an external chat-completions model;
//! language detection runs locally.
//!
//! ## Architecture
//!
//! - **SentimentAnalyzer**: Trait implemented by classification backends
//! - **OpenAiAnalyzer**: Backend for OpenAI-compatible APIs
//! - **language**: Local language detection with `whatlang`

mod language;
mod openai;

pub use language::{detect_language, SHORT_TEXT, UNDETERMINED};
pub use openai::{parse_sentiment, OpenAiAnalyzer};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Sentiment classes a backend may return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 5] = [
        SentimentLabel::VeryPositive,
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
        SentimentLabel::VeryNegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "very positive",
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
            SentimentLabel::VeryNegative => "very negative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == s)
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Confidence in [0, 1]
    pub score: f64,
}

/// Classification backend
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Classify the sentiment of `text`
    async fn analyze(&self, text: &str) -> Result<Sentiment, SentimentError>;

    /// Backend name for health reporting
    fn name(&self) -> &str;
}

/// Errors raised while classifying text
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Invalid JSON from model: {content}. Error: {error}")]
    InvalidJson { content: String, error: String },

    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    #[error("Invalid score: {0}")]
    InvalidScore(String),
}
