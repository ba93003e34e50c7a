//! API Module
//!
//! HTTP client for the Sentimeter API.

pub mod client;
pub mod types;

pub use client::HttpApi;
pub use types::{AnalysisResult, HistoryEntry};

use async_trait::async_trait;
use thiserror::Error;

/// Shown for non-2xx responses without a `message`
pub const UNKNOWN_ERROR: &str = "Erreur inconnue";

/// Shown when the server could not be reached
pub const NETWORK_ERROR: &str = "Impossible de joindre le serveur";

/// Errors returned by API calls
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Request never completed (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Server { status: u16, message: Option<String> },

    /// 2xx response with an unexpected body
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text shown to the user after the action's prefix
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => NETWORK_ERROR.to_string(),
            ClientError::Server { message, .. } => {
                message.clone().unwrap_or_else(|| UNKNOWN_ERROR.to_string())
            }
            ClientError::Decode(_) => "Réponse invalide du serveur".to_string(),
        }
    }
}

/// Operations the front-end performs against the server
#[async_trait(?Send)]
pub trait SentimentApi {
    /// `POST /analyze`
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ClientError>;

    /// `GET /history`
    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ClientError>;

    /// `DELETE /clear-history`, returning the server's confirmation message
    async fn clear_history(&self) -> Result<Option<String>, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ClientError::Server {
            status: 500,
            message: Some("boom".to_string()),
        };
        assert_eq!(err.user_message(), "boom");
        assert_eq!(err.to_string(), "Server error 500: boom");

        let err = ClientError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.user_message(), NETWORK_ERROR);
    }
}
