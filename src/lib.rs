//! # Sentimeter
//!
//! Sentiment analysis server backing the Sentimeter web front-end.
//!
//! ## Features
//!
//! - **Analysis**: Sentiment label and confidence from an OpenAI-compatible model
//! - **Language detection**: Local detection for every analyzed text
//! - **History**: Bounded JSON-file log of past analyses
//! - **Front-end hosting**: Serves the Leptos build from the same origin
//!
//! ## Modules
//!
//! - [`api`]: HTTP API with Axum
//! - [`history`]: History persistence
//! - [`sentiment`]: Analyzer trait, OpenAI backend, language detection
//! - [`config`]: TOML + environment configuration

pub mod api;
pub mod config;
pub mod history;
pub mod sentiment;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    Config, ConfigError, ConfigLookup, HistoryConfig, LoggingConfig, OpenAiConfig, ServerConfig,
};

pub use history::{HistoryEntry, HistoryError, HistoryResult, HistoryStore};

pub use sentiment::{
    detect_language, OpenAiAnalyzer, Sentiment, SentimentAnalyzer, SentimentError,
    SentimentLabel,
};
