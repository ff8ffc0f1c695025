//! Error types for spam-rs

use thiserror::Error;

/// Result type alias for spam-rs operations
pub type Result<T> = std::result::Result<T, SpamError>;

#[derive(Error, Debug)]
pub enum SpamError {
    /// Input rejected before scoring (e.g. empty subject and body)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Training corpus unusable (missing columns, bad labels, no rows)
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be loaded
    #[error("Settings error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpamError {
    /// Whether the error was caused by caller input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SpamError::Validation(_) | SpamError::Configuration(_) | SpamError::Csv(_)
        )
    }
}
