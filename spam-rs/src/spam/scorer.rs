//! Spam scoring engine
//!
//! Extracts a fixed feature vector from a message and turns it into a
//! bounded spam probability with additive weighted-threshold rules.

use regex::Regex;

use super::corpus::{top_terms, TrainingCorpus};
use super::lexicon::Lexicon;
use super::types::*;
use crate::error::{Result, SpamError};

const HTML_TAG_PATTERN: &str = r"<[^>]+>";
const URL_PATTERN: &str =
    r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+";

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£'];

/// A single weighted-threshold rule
struct ScoreRule {
    applies: fn(&FeatureVector) -> bool,
    weight: f64,
}

const SCORE_RULES: &[ScoreRule] = &[
    ScoreRule { applies: |f| f.spam_keywords > 2, weight: 0.30 },
    ScoreRule { applies: |f| f.spam_keywords > 0 && f.spam_keywords <= 2, weight: 0.15 },
    ScoreRule { applies: |f| f.urgency_words > 0, weight: 0.20 },
    ScoreRule { applies: |f| f.uppercase_pct > 30.0, weight: 0.15 },
    ScoreRule { applies: |f| f.exclamation_marks > 3, weight: 0.10 },
    ScoreRule { applies: |f| f.currency_symbols > 2, weight: 0.10 },
    ScoreRule { applies: |f| f.url_count > 3, weight: 0.15 },
    ScoreRule { applies: |f| f.ham_keywords > 2, weight: -0.20 },
];

/// Spam scorer engine
pub struct SpamScorer {
    config: SpamConfig,
    lexicon: Lexicon,
    recalibrated: bool,
    html_tag: Regex,
    url: Regex,
}

impl SpamScorer {
    /// Create a new spam scorer with the seed lexicon
    pub fn new(config: SpamConfig) -> Self {
        Self {
            config,
            lexicon: Lexicon::seeded(),
            recalibrated: false,
            html_tag: Regex::new(HTML_TAG_PATTERN).expect("valid HTML tag pattern"),
            url: Regex::new(URL_PATTERN).expect("valid URL pattern"),
        }
    }

    /// Get current config
    pub fn config(&self) -> &SpamConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Whether the lexicon has been extended from a corpus
    pub fn is_recalibrated(&self) -> bool {
        self.recalibrated
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            recalibrated: self.recalibrated,
            spam_terms: self.lexicon.spam_terms().len(),
            ham_terms: self.lexicon.ham_terms().len(),
            urgency_terms: self.lexicon.urgency_terms().len(),
        }
    }

    /// Score a message. At least one of subject and body must be non-empty.
    pub fn score(&self, subject: &str, body: &str) -> Result<SpamResult> {
        if subject.is_empty() && body.is_empty() {
            return Err(SpamError::Validation(
                "Subject or body is required".to_string(),
            ));
        }

        let features = self.extract_features(subject, body);
        let score = weighted_score(&features);

        let is_spam = score > self.config.spam_threshold;
        let confidence = if is_spam { score } else { 1.0 - score };

        Ok(SpamResult {
            is_spam,
            confidence: round_to(confidence * 100.0, 2),
            spam_score: round_to(score, 3),
            features,
            using_custom_lexicon: self.recalibrated,
        })
    }

    /// Compute the feature vector for a message
    pub fn extract_features(&self, subject: &str, body: &str) -> FeatureVector {
        let original = format!("{} {}", subject, body);
        let text = original.to_lowercase();

        let original_len = original.chars().count();
        let uppercase = original.chars().filter(|c| c.is_uppercase()).count();

        FeatureVector {
            total_length: text.chars().count(),
            subject_length: subject.chars().count(),
            word_count: text.split_whitespace().count(),
            exclamation_marks: text.matches('!').count(),
            question_marks: text.matches('?').count(),
            currency_symbols: text.matches(CURRENCY_SYMBOLS).count(),
            uppercase_pct: uppercase as f64 / original_len.max(1) as f64 * 100.0,
            has_html: self.html_tag.is_match(body),
            url_count: self.url.find_iter(&text).count(),
            spam_keywords: self.lexicon.spam_hits(&text),
            ham_keywords: self.lexicon.ham_hits(&text),
            urgency_words: self.lexicon.urgency_hits(&text),
        }
    }

    /// Extend the lexicon from a labeled corpus, detecting columns by name
    pub fn recalibrate(&mut self, corpus: &TrainingCorpus) -> Result<RecalibrationSummary> {
        self.recalibrate_with_columns(corpus, None, None)
    }

    /// Extend the lexicon from a labeled corpus.
    ///
    /// Nothing is mutated unless the whole corpus validates.
    pub fn recalibrate_with_columns(
        &mut self,
        corpus: &TrainingCorpus,
        text_column: Option<&str>,
        label_column: Option<&str>,
    ) -> Result<RecalibrationSummary> {
        let columns = corpus.resolve_columns(text_column, label_column)?;

        if corpus.is_empty() {
            return Err(SpamError::Configuration(
                "Training corpus has no records".to_string(),
            ));
        }

        let texts = corpus.partition(&columns)?;
        let spam_terms = top_terms(&texts.spam, self.config.top_terms);
        let ham_terms = top_terms(&texts.ham, self.config.top_terms);

        self.lexicon.merge(spam_terms, ham_terms);
        self.recalibrated = true;

        Ok(RecalibrationSummary {
            records: corpus.len(),
            spam_count: texts.spam.len(),
            ham_count: texts.ham.len(),
            text_column: columns.text_name,
            label_column: columns.label_name,
        })
    }
}

impl Default for SpamScorer {
    fn default() -> Self {
        Self::new(SpamConfig::default())
    }
}

/// Sum the contributions of every matching rule, clamped to [0, 1]
pub fn weighted_score(features: &FeatureVector) -> f64 {
    let raw: f64 = SCORE_RULES
        .iter()
        .filter(|rule| (rule.applies)(features))
        .map(|rule| rule.weight)
        .sum();

    raw.clamp(0.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_features() -> FeatureVector {
        FeatureVector {
            total_length: 10,
            subject_length: 0,
            word_count: 2,
            exclamation_marks: 0,
            question_marks: 0,
            currency_symbols: 0,
            uppercase_pct: 0.0,
            has_html: false,
            url_count: 0,
            spam_keywords: 0,
            ham_keywords: 0,
            urgency_words: 0,
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        let scorer = SpamScorer::default();
        let err = scorer.score("", "").unwrap_err();
        assert!(matches!(err, SpamError::Validation(_)));
        assert!(scorer.score("", "body only").is_ok());
        assert!(scorer.score("subject only", "").is_ok());
    }

    #[test]
    fn test_feature_extraction() {
        let scorer = SpamScorer::default();
        let f = scorer.extract_features(
            "Hi?",
            "<b>Pay $5 or €3!</b> http://a.com https://b.org/x",
        );
        assert_eq!(f.subject_length, 3);
        assert_eq!(f.question_marks, 1);
        assert_eq!(f.exclamation_marks, 1);
        assert_eq!(f.currency_symbols, 2);
        assert!(f.has_html);
        assert_eq!(f.url_count, 2);
        assert_eq!(f.word_count, 7);
    }

    #[test]
    fn test_html_only_checked_in_body() {
        let scorer = SpamScorer::default();
        assert!(!scorer.extract_features("<b>bold</b>", "plain").has_html);
    }

    #[test]
    fn test_uppercase_uses_original_case() {
        let scorer = SpamScorer::default();
        let f = scorer.extract_features("ABC", "d");
        // "ABC d": 3 uppercase of 5 chars
        assert!((f.uppercase_pct - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_counts_characters() {
        let scorer = SpamScorer::default();
        let f = scorer.extract_features("€", "ñ");
        assert_eq!(f.total_length, 3);
        assert_eq!(f.subject_length, 1);
    }

    #[test]
    fn test_spam_keyword_buckets() {
        let mut f = blank_features();
        assert_eq!(weighted_score(&f), 0.0);
        f.spam_keywords = 1;
        assert!((weighted_score(&f) - 0.15).abs() < 1e-9);
        f.spam_keywords = 2;
        assert!((weighted_score(&f) - 0.15).abs() < 1e-9);
        f.spam_keywords = 3;
        assert!((weighted_score(&f) - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut f = blank_features();
        f.exclamation_marks = 3;
        f.currency_symbols = 2;
        f.url_count = 3;
        f.uppercase_pct = 30.0;
        f.ham_keywords = 2;
        assert_eq!(weighted_score(&f), 0.0);

        f.exclamation_marks = 4;
        assert!((weighted_score(&f) - 0.10).abs() < 1e-9);
    }

    #[test]
    fn test_clamping() {
        let mut f = blank_features();
        f.spam_keywords = 5;
        f.urgency_words = 1;
        f.uppercase_pct = 80.0;
        f.exclamation_marks = 10;
        f.currency_symbols = 5;
        f.url_count = 5;
        assert_eq!(weighted_score(&f), 1.0);

        let mut f = blank_features();
        f.ham_keywords = 3;
        assert_eq!(weighted_score(&f), 0.0);
    }

    #[test]
    fn test_ham_penalty_offsets_spam() {
        let mut f = blank_features();
        f.spam_keywords = 3;
        f.urgency_words = 1;
        f.ham_keywords = 3;
        assert!((weighted_score(&f) - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.12345, 3), 0.123);
        assert_eq!(round_to(66.666666, 2), 66.67);
    }

    #[test]
    fn test_status_reports_lexicon() {
        let scorer = SpamScorer::default();
        let status = scorer.status();
        assert!(!status.recalibrated);
        assert_eq!(status.spam_terms, 18);
        assert_eq!(status.ham_terms, 11);
        assert_eq!(status.urgency_terms, 6);
    }
}
