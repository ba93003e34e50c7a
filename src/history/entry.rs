//! History record

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::{Sentiment, SentimentLabel};

/// Characters of the input kept in the display form of an entry
pub const DISPLAY_TEXT_CHARS: usize = 200;

/// One past analysis, as stored and as served by `GET /history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Display form: the first 200 characters, followed by `...` when cut
    pub text: String,
    /// The analyzed input
    pub full_text: String,
    pub label: SentimentLabel,
    pub score: f64,
    pub language: String,
    /// RFC 3339, UTC, `Z` suffix
    pub timestamp: String,
}

impl HistoryEntry {
    /// Build an entry for a fresh analysis, stamped with the current time
    pub fn new(text: &str, sentiment: &Sentiment, language: &str) -> Self {
        Self {
            text: display_text(text),
            full_text: text.to_string(),
            label: sentiment.label,
            score: sentiment.score,
            language: language.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

fn display_text(text: &str) -> String {
    if text.chars().count() > DISPLAY_TEXT_CHARS {
        let head: String = text.chars().take(DISPLAY_TEXT_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
