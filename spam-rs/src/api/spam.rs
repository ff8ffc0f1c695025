//! Spam API endpoints
//!
//! Message classification, lexicon recalibration from an uploaded CSV, and
//! engine status.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

use crate::api::handlers::{ApiResponse, AppState};
use crate::error::SpamError;
use crate::spam::TrainingCorpus;

/// Classification request
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

/// Classify a message
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictRequest>,
) -> Response {
    match state.spam_manager.score_message(&req.subject, &req.body).await {
        Ok(result) => Json(ApiResponse::success(result)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Recalibrate the lexicon from a CSV upload (multipart field `file`,
/// optional `text_column` and `label_column`)
pub async fn train(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let mut file_data = None;
    let mut text_column = None;
    let mut label_column = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed training upload: {}", e);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<()>::error(&format!("Invalid upload: {}", e))),
                )
                    .into_response();
            }
        };

        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("file") => {
                file_data = field.bytes().await.ok().map(|b| b.to_vec());
            }
            Some("text_column") => {
                text_column = field.text().await.ok().filter(|s| !s.trim().is_empty());
            }
            Some("label_column") => {
                label_column = field.text().await.ok().filter(|s| !s.trim().is_empty());
            }
            _ => {}
        }
    }

    let data = match file_data {
        Some(d) => d,
        None => {
            return SpamError::Validation("Missing file field".to_string()).into_response();
        }
    };

    let corpus = match TrainingCorpus::from_csv_reader(data.as_slice()) {
        Ok(corpus) => corpus,
        Err(e) => return e.into_response(),
    };

    match state
        .spam_manager
        .recalibrate(&corpus, text_column.as_deref(), label_column.as_deref())
        .await
    {
        Ok(summary) => Json(ApiResponse::success(summary)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Engine status
pub async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::success(state.spam_manager.status().await))
}
