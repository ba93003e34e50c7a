//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub openai: OpenAiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built front-end (Trunk `dist/`)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Allow any origin (useful when the UI runs on `trunk serve`)
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_static_dir() -> String {
    "sentimeter-ui/dist".to_string()
}

fn default_cors_permissive() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_permissive: default_cors_permissive(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// History persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_history_path")]
    pub path: String,

    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_history_path() -> String {
    "history.json".to_string()
}

fn default_max_entries() -> usize {
    100
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            max_entries: default_max_entries(),
        }
    }
}

/// OpenAI-compatible sentiment backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// API key; usually supplied through `OPENAI_API_KEY`
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    #[serde(default = "default_openai_model")]
    pub model: String,

    #[serde(default = "default_openai_timeout")]
    pub request_timeout_secs: u64,
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo-1106".to_string()
}

fn default_openai_timeout() -> u64 {
    30
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_base_url(),
            model: default_openai_model(),
            request_timeout_secs: default_openai_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "sentimeter=info,tower_http=debug".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here: the lookup runs before tracing is set up, so
    /// the caller reports the returned [`ConfigLookup`] once it is.
    pub fn load_default() -> ConfigLookup {
        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("sentimeter").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&candidates)
    }

    /// Load the first candidate that exists and parses
    fn load_first(candidates: &[PathBuf]) -> ConfigLookup {
        let mut failures = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return ConfigLookup {
                        config,
                        source: Some(path.clone()),
                        failures,
                    }
                }
                Err(e) => failures.push(e),
            }
        }

        ConfigLookup {
            config: Self::from_env(),
            source: None,
            failures,
        }
    }

    /// Check settings that the server cannot start without
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.openai.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => return Err(ConfigError::Missing("OPENAI_API_KEY".to_string())),
        }

        if self.history.max_entries == 0 {
            return Err(ConfigError::Invalid(
                "history.max_entries must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("SENTIMETER_HOST") {
            self.server.host = host;
        }
        // SENTIMETER_PORT wins over the conventional PORT
        for key in ["PORT", "SENTIMETER_PORT"] {
            if let Some(port) = var(key).and_then(|p| p.parse().ok()) {
                self.server.port = port;
            }
        }
        if let Some(dir) = var("SENTIMETER_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        // History overrides
        if let Some(path) = var("SENTIMETER_HISTORY_FILE") {
            self.history.path = path;
        }

        // OpenAI overrides
        if let Some(key) = var("OPENAI_API_KEY") {
            self.openai.api_key = Some(key);
        }
        if let Some(url) = var("OPENAI_BASE_URL") {
            self.openai.base_url = url;
        }
        if let Some(model) = var("OPENAI_MODEL") {
            self.openai.model = model;
        }

        // Logging overrides
        if let Some(level) = var("SENTIMETER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SENTIMETER_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of looking up the config in its default locations
#[derive(Debug)]
pub struct ConfigLookup {
    pub config: Config,
    /// File the config was read from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but could not be loaded, in lookup order
    pub failures: Vec<ConfigError>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Missing required setting: {0}")]
    Missing(String),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Sentimeter Configuration
#
# Environment variables override these settings:
# - SENTIMETER_HOST, SENTIMETER_PORT (or PORT)
# - SENTIMETER_STATIC_DIR
# - SENTIMETER_HISTORY_FILE
# - OPENAI_API_KEY, OPENAI_BASE_URL, OPENAI_MODEL
# - SENTIMETER_LOG_LEVEL, SENTIMETER_LOG_FORMAT

[server]
host = "0.0.0.0"
port = 5001

# Built front-end served on every path the API does not claim
static_dir = "sentimeter-ui/dist"

# Allow cross-origin requests (trunk serve on another port)
cors_permissive = true

[history]
# JSON file holding past analyses
path = "history.json"

# Oldest entries are dropped beyond this count
max_entries = 100

[openai]
# Prefer the OPENAI_API_KEY environment variable
# api_key = ""
base_url = "https://api.openai.com/v1"
model = "gpt-3.5-turbo-1106"
request_timeout_secs = 30

[logging]
# EnvFilter directive, RUST_LOG takes precedence
level = "sentimeter=info,tower_http=debug"

# pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
