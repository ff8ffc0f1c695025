//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SpamError};
use crate::spam::SpamConfig;

/// Main service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub spam: SpamConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:8000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Maximum accepted size of an uploaded training corpus
    #[serde(default = "default_max_upload")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_max_upload() -> usize {
    10 * 1024 * 1024 // 10MB
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            max_upload_bytes: default_max_upload(),
        }
    }
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
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from an optional file, then apply `SPAM_RS__*`
    /// environment overrides (e.g. `SPAM_RS__SERVER__LISTEN_ADDR`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(
                config::Environment::with_prefix("SPAM_RS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| SpamError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(SpamError::Config(format!(
                "Invalid listen address '{}'",
                self.server.listen_addr
            )));
        }

        if !(0.0..=1.0).contains(&self.spam.spam_threshold) {
            return Err(SpamError::Config(format!(
                "spam_threshold must be within [0, 1], got {}",
                self.spam.spam_threshold
            )));
        }

        if self.spam.top_terms == 0 {
            return Err(SpamError::Config("top_terms must be positive".to_string()));
        }

        Ok(())
    }
}
