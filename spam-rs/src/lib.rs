//! spam-rs: Heuristic spam scoring service
//!
//! Classifies e-mail as spam from a fixed set of text features and additive
//! weighted-threshold rules. The keyword lexicon can be recalibrated at
//! runtime from a labeled CSV corpus.
//!
//! # Features
//!
//! - **Scoring**: deterministic spam probability in `[0, 1]` with the
//!   feature vector it was derived from
//! - **Recalibration**: merge the most frequent terms of each class from a
//!   labeled corpus into the lexicon
//! - **HTTP API**: axum endpoints for prediction, training and status
//!
//! # Example
//!
//! ```
//! use spam_rs::spam::SpamScorer;
//!
//! let scorer = SpamScorer::default();
//! let result = scorer.score("Meeting", "Please see attached report, regards").unwrap();
//! assert!(!result.is_spam);
//! assert_eq!(result.confidence, 100.0);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`spam`]: Feature extraction, scoring and recalibration
//! - [`api`]: REST API

pub mod api;
pub mod config;
pub mod error;
pub mod spam;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
