//! Spam scoring module
//!
//! Provides heuristic spam detection with rule-based scoring over a keyword
//! lexicon that can be recalibrated from a labeled corpus.

pub mod corpus;
pub mod lexicon;
pub mod manager;
pub mod scorer;
pub mod types;

pub use corpus::TrainingCorpus;
pub use lexicon::Lexicon;
pub use manager::SpamManager;
pub use scorer::{weighted_score, SpamScorer};
pub use types::*;
