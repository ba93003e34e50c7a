//! Sentimeter Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Settings come from `--config`, `~/.config/sentimeter/config.toml` or
//! `./config.toml`, then environment variables (a `.env` file is honored):
//! - `OPENAI_API_KEY`: API key for the sentiment backend (required)
//! - `OPENAI_BASE_URL`, `OPENAI_MODEL`: Backend endpoint and model
//! - `SENTIMETER_HOST`, `SENTIMETER_PORT` / `PORT`: Bind address (default: 0.0.0.0:5001)
//! - `SENTIMETER_HISTORY_FILE`: History file (default: history.json)
//! - `SENTIMETER_STATIC_DIR`: Front-end build directory
//! - `RUST_LOG`: Log filter (default: sentimeter=info,tower_http=debug)

use anyhow::Context;
use clap::{Parser, Subcommand};
use sentimeter::api::{serve, AppState};
use sentimeter::config::{generate_default_config, Config, ConfigLookup, LoggingConfig};
use sentimeter::history::HistoryStore;
use sentimeter::sentiment::OpenAiAnalyzer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sentimeter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sentiment analysis server with history")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print a commented default configuration
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::InitConfig) = cli.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // .env is optional
    let _ = dotenvy::dotenv();

    let (mut config, lookup) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, None),
        None => {
            let ConfigLookup {
                config,
                source,
                failures,
            } = Config::load_default();
            (config, Some((source, failures)))
        }
    };

    if let Some(Commands::Serve { host, port }) = cli.command {
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Sentimeter v{}", env!("CARGO_PKG_VERSION"));
    match &lookup {
        Some((source, failures)) => {
            for failure in failures {
                tracing::warn!("Skipped config file: {}", failure);
            }
            match source {
                Some(path) => tracing::info!("Loaded config from {:?}", path),
                None => tracing::info!("Using default config with environment overrides"),
            }
        }
        None => {
            if let Some(path) = &cli.config {
                tracing::info!("Loaded config from {:?}", path);
            }
        }
    }

    config.validate()?;

    tracing::info!("History file: {}", config.history.path);
    let history = Arc::new(
        HistoryStore::open(&config.history.path, config.history.max_entries)
            .await
            .with_context(|| format!("Failed to open history file {}", config.history.path))?,
    );

    let analyzer = Arc::new(
        OpenAiAnalyzer::new(&config.openai).context("Failed to create sentiment backend")?,
    );
    tracing::info!("Sentiment backend: {} ({})", config.openai.model, config.openai.base_url);

    tracing::info!("Serving front-end from {}", config.server.static_dir);
    serve(AppState::new(history, analyzer), &config.server).await?;

    tracing::info!("Sentimeter stopped");
    Ok(())
}

/// Initialize tracing, `RUST_LOG` taking precedence over the config
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
