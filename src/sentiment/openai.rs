//! OpenAI Chat Completions Backend
//!
//! Asks the model for a strict JSON object `{"label": ..., "score": ...}`
//! and validates it before it reaches the API layer.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Sentiment, SentimentAnalyzer, SentimentError, SentimentLabel};
use crate::config::OpenAiConfig;

const PROMPT: &str = "You are a sentiment analysis system. Analyze the sentiment of the following text. \
Respond ONLY with a valid JSON object in this exact format: \
{\"label\": \"very positive|positive|neutral|negative|very negative\", \"score\": 0.0}. \
The 'score' must be a confidence value between 0.0 and 1.0. \
Do not add any explanation, markdown, or extra text.\n\nText: ";

/// Sentiment analyzer backed by an OpenAI-compatible API
pub struct OpenAiAnalyzer {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiAnalyzer {
    /// Create an analyzer from configuration
    pub fn new(config: &OpenAiConfig) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
            model: config.model.clone(),
        })
    }

    fn request_body<'a>(&'a self, text: &str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: format!("{}{}", PROMPT, text),
            }],
            temperature: 0.0,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }
}

#[async_trait]
impl SentimentAnalyzer for OpenAiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Sentiment, SentimentError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(text))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SentimentError::Timeout
                } else {
                    SentimentError::Request(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(SentimentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(SentimentError::EmptyResponse)?;

        let sentiment = parse_sentiment(&content)?;
        tracing::debug!(label = %sentiment.label, score = sentiment.score, "Sentiment classified");
        Ok(sentiment)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// Parse and validate the model's JSON reply
pub fn parse_sentiment(content: &str) -> Result<Sentiment, SentimentError> {
    let content = content.trim();

    let reply: ModelReply =
        serde_json::from_str(content).map_err(|e| SentimentError::InvalidJson {
            content: content.to_string(),
            error: e.to_string(),
        })?;

    let label = match &reply.label {
        serde_json::Value::String(s) => SentimentLabel::parse(s),
        _ => None,
    }
    .ok_or_else(|| SentimentError::InvalidLabel(reply.label.to_string()))?;

    let score = reply
        .score
        .as_f64()
        .filter(|s| (0.0..=1.0).contains(s))
        .ok_or_else(|| SentimentError::InvalidScore(reply.score.to_string()))?;

    Ok(Sentiment { label, score })
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Raw model reply; fields are validated after parsing
#[derive(Debug, Deserialize)]
struct ModelReply {
    #[serde(default)]
    label: serde_json::Value,
    #[serde(default)]
    score: serde_json::Value,
}
