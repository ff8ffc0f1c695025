//! Spam types and data structures

use serde::{Deserialize, Serialize};

/// Signals extracted from a single message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Characters in the combined lower-cased text
    pub total_length: usize,
    /// Characters in the subject
    pub subject_length: usize,
    /// Whitespace-separated words
    pub word_count: usize,
    pub exclamation_marks: usize,
    pub question_marks: usize,
    /// Occurrences of '$', '€' and '£'
    pub currency_symbols: usize,
    /// Share of uppercase characters, 0-100
    pub uppercase_pct: f64,
    /// Body contains something that looks like an HTML tag
    pub has_html: bool,
    pub url_count: usize,
    /// Spam lexicon terms found in the text
    pub spam_keywords: usize,
    /// Ham lexicon terms found in the text
    pub ham_keywords: usize,
    pub urgency_words: usize,
}

/// Spam scoring result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamResult {
    /// Is this message spam (score > threshold)
    pub is_spam: bool,
    /// Confidence in the classification, as a percentage (2 decimals)
    pub confidence: f64,
    /// Spam probability in [0, 1] (3 decimals)
    pub spam_score: f64,
    /// Features the score was computed from
    pub features: FeatureVector,
    /// Whether the lexicons were extended from a training corpus
    pub using_custom_lexicon: bool,
}

/// Outcome of a successful recalibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecalibrationSummary {
    /// Rows in the corpus
    pub records: usize,
    pub spam_count: usize,
    pub ham_count: usize,
    /// Column the message text was read from
    pub text_column: String,
    /// Column the 0/1 label was read from
    pub label_column: String,
}

/// Snapshot of the engine state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub recalibrated: bool,
    pub spam_terms: usize,
    pub ham_terms: usize,
    pub urgency_terms: usize,
}

/// Spam configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpamConfig {
    /// Score above which a message is classified as spam
    #[serde(default = "default_spam_threshold")]
    pub spam_threshold: f64,
    /// Most frequent terms per class merged into the lexicon on recalibration
    #[serde(default = "default_top_terms")]
    pub top_terms: usize,
}

fn default_spam_threshold() -> f64 {
    0.5
}

fn default_top_terms() -> usize {
    20
}

impl Default for SpamConfig {
    fn default() -> Self {
        Self {
            spam_threshold: default_spam_threshold(),
            top_terms: default_top_terms(),
        }
    }
}
