//! Spam manager shared by the API handlers
//!
//! Wraps a single [`SpamScorer`] behind a read/write lock: scoring takes a
//! shared lock, recalibration an exclusive one, so lexicon updates never
//! interleave with a scan over the lexicon.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::corpus::TrainingCorpus;
use super::scorer::SpamScorer;
use super::types::*;
use crate::error::Result;

/// Spam manager
#[derive(Clone)]
pub struct SpamManager {
    scorer: Arc<RwLock<SpamScorer>>,
}

impl SpamManager {
    /// Create a new spam manager
    pub fn new(config: SpamConfig) -> Self {
        Self::with_scorer(SpamScorer::new(config))
    }

    pub fn with_scorer(scorer: SpamScorer) -> Self {
        Self {
            scorer: Arc::new(RwLock::new(scorer)),
        }
    }

    /// Score a message
    pub async fn score_message(&self, subject: &str, body: &str) -> Result<SpamResult> {
        let scorer = self.scorer.read().await;
        let result = scorer.score(subject, body)?;

        debug!(
            "Scored message (subject {} chars): score={} spam={}",
            result.features.subject_length, result.spam_score, result.is_spam
        );

        Ok(result)
    }

    /// Extend the lexicon from a labeled corpus
    pub async fn recalibrate(
        &self,
        corpus: &TrainingCorpus,
        text_column: Option<&str>,
        label_column: Option<&str>,
    ) -> Result<RecalibrationSummary> {
        let mut scorer = self.scorer.write().await;

        match scorer.recalibrate_with_columns(corpus, text_column, label_column) {
            Ok(summary) => {
                info!(
                    "Lexicon recalibrated from {} records ({} spam, {} ham) using columns '{}'/'{}'",
                    summary.records,
                    summary.spam_count,
                    summary.ham_count,
                    summary.text_column,
                    summary.label_column
                );
                Ok(summary)
            }
            Err(e) => {
                warn!("Recalibration rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Current engine state
    pub async fn status(&self) -> EngineStatus {
        self.scorer.read().await.status()
    }
}

impl Default for SpamManager {
    fn default() -> Self {
        Self::new(SpamConfig::default())
    }
}
