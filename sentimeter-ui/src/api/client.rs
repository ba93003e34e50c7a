//! HTTP API Client
//!
//! `gloo-net` implementation of [`SentimentApi`].

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use super::types::{self, AnalysisResult, AnalyzeRequest, HistoryEntry};
use super::{ClientError, SentimentApi};

/// Local storage key overriding the API base URL
pub const API_BASE_KEY: &str = "sentimeter_api_url";

/// Get the API base URL from local storage, defaulting to the page origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_default();
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Client for the Sentimeter REST API
#[derive(Clone, Debug)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client targeting the configured base URL
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn network(e: gloo_net::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

async fn read_body(response: &Response) -> Result<String, ClientError> {
    response.text().await.map_err(network)
}

#[async_trait(?Send)]
impl SentimentApi for HttpApi {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ClientError> {
        let response = Request::post(&self.url("/analyze"))
            .json(&AnalyzeRequest { text })
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        let body = read_body(&response).await?;
        types::decode_analysis(response.ok(), response.status(), &body)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        let response = Request::get(&self.url("/history"))
            .send()
            .await
            .map_err(network)?;

        let body = read_body(&response).await?;
        types::decode_history(&body)
    }

    async fn clear_history(&self) -> Result<Option<String>, ClientError> {
        let response = Request::delete(&self.url("/clear-history"))
            .send()
            .await
            .map_err(network)?;

        let body = read_body(&response).await?;
        types::decode_clear(response.ok(), response.status(), &body)
    }
}
