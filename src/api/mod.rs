//! Sentimeter HTTP API
//!
//! HTTP API layer for Sentimeter, built with Axum.
//!
//! # Endpoints
//!
//! ## Analysis
//! - `POST /analyze` - Classify a text
//!
//! ## History
//! - `GET /history` - List past analyses
//! - `DELETE /clear-history` - Remove all past analyses
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! Every other path is served from the front-end build directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use sentimeter::api::{serve, AppState};
//! use sentimeter::config::Config;
//! use sentimeter::history::HistoryStore;
//! use sentimeter::sentiment::OpenAiAnalyzer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let history = Arc::new(HistoryStore::open("history.json", 100).await?);
//!     let analyzer = Arc::new(OpenAiAnalyzer::new(&config.openai)?);
//!
//!     serve(AppState::new(history, analyzer), &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    let router = Router::new()
        .route("/analyze", post(routes::analyze::analyze_text))
        .route("/history", get(routes::history::get_history))
        .route("/clear-history", delete(routes::history::clear_history))
        .nest("/health", health_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http());

    let router = if config.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state, config);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Sentimeter listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Sentimeter shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryStore;
    use crate::sentiment::{Sentiment, SentimentAnalyzer, SentimentError, SentimentLabel};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    /// Analyzer returning a fixed answer
    struct FixedAnalyzer {
        result: Option<Sentiment>,
    }

    #[async_trait]
    impl SentimentAnalyzer for FixedAnalyzer {
        async fn analyze(&self, _text: &str) -> Result<Sentiment, SentimentError> {
            self.result.ok_or(SentimentError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    async fn create_test_app(
        result: Option<Sentiment>,
    ) -> (Router, Arc<HistoryStore>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let history = Arc::new(
            HistoryStore::open(dir.path().join("history.json"), 100)
                .await
                .unwrap(),
        );
        let state = AppState::new(Arc::clone(&history), Arc::new(FixedAnalyzer { result }));
        let config = ServerConfig {
            static_dir: dir.path().join("dist").to_string_lossy().to_string(),
            ..Default::default()
        };

        (build_router(state, &config), history, dir)
    }

    fn positive() -> Option<Sentiment> {
        Some(Sentiment {
            label: SentimentLabel::Positive,
            score: 0.875,
        })
    }

    fn analyze_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _history, _dir) = create_test_app(positive()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _history, _dir) = create_test_app(positive()).await;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["analyzer"], "fixed");
        assert_eq!(body["history_entries"], 0);
    }

    #[tokio::test]
    async fn test_analyze_success_records_history() {
        let (app, history, _dir) = create_test_app(positive()).await;

        let response = app
            .oneshot(analyze_request(
                r#"{"text": "  What a lovely afternoon we had together  "}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["label"], "positive");
        assert_eq!(body["score"], 0.875);
        assert!(body["language"].is_string());
        assert_eq!(body["all_results"][0]["label"], "positive");

        let entries = history.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].full_text, "What a lovely afternoon we had together");
    }

    #[tokio::test]
    async fn test_analyze_short_text_language() {
        let (app, _history, _dir) = create_test_app(positive()).await;

        let response = app.oneshot(analyze_request(r#"{"text": "Top"}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["language"], "short-text");
    }

    #[tokio::test]
    async fn test_analyze_blank_text() {
        let (app, history, _dir) = create_test_app(positive()).await;

        let response = app.oneshot(analyze_request(r#"{"text": "   "}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Empty text provided");
        assert!(history.entries().await.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_missing_text() {
        let (app, _history, _dir) = create_test_app(positive()).await;

        let response = app.oneshot(analyze_request(r#"{"content": "hi"}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], "No text provided");
    }

    #[tokio::test]
    async fn test_analyze_invalid_json() {
        let (app, _history, _dir) = create_test_app(positive()).await;

        let response = app.oneshot(analyze_request("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], "No text provided");
    }

    #[tokio::test]
    async fn test_analyze_backend_failure() {
        let (app, history, _dir) = create_test_app(None).await;

        let response = app
            .oneshot(analyze_request(r#"{"text": "Ce film était vraiment magnifique"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(
            body["message"],
            "Échec de l’analyse de sentiment : API error 503: overloaded"
        );
        assert!(history.entries().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_history() {
        let (app, history, _dir) = create_test_app(positive()).await;
        let sentiment = positive().unwrap();
        history
            .append(crate::history::HistoryEntry::new("first", &sentiment, "short-text"))
            .await
            .unwrap();

        let response = app
            .oneshot(Request::builder().uri("/history").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["text"], "first");
        assert_eq!(entries[0]["label"], "positive");
    }

    #[tokio::test]
    async fn test_clear_history() {
        let (app, history, _dir) = create_test_app(positive()).await;
        let sentiment = positive().unwrap();
        history
            .append(crate::history::HistoryEntry::new("first", &sentiment, "short-text"))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/clear-history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Historique effacé.");
        assert!(history.entries().await.is_empty());
    }
}
