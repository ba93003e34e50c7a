//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::history::HistoryStore;
use crate::sentiment::SentimentAnalyzer;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistent log of analyses
    pub history: Arc<HistoryStore>,
    /// Sentiment classification backend
    pub analyzer: Arc<dyn SentimentAnalyzer>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(history: Arc<HistoryStore>, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self {
            history,
            analyzer,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
