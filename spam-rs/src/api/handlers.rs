//! Shared API state, response wrapper and service-level handlers

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::error::SpamError;
use crate::spam::SpamManager;

/// Shared application state
pub struct AppState {
    pub spam_manager: SpamManager,
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

impl IntoResponse for SpamError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(ApiResponse::<()>::error(&self.to_string()))).into_response()
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// API index response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
}

/// Health check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// API index
pub async fn root() -> impl IntoResponse {
    let endpoints = [
        ("GET", "/api"),
        ("GET", "/api/health"),
        ("POST", "/api/spam/predict"),
        ("POST", "/api/spam/train"),
        ("GET", "/api/spam/status"),
    ]
    .into_iter()
    .map(|(method, path)| EndpointInfo {
        method: method.to_string(),
        path: path.to_string(),
    })
    .collect();

    Json(RootResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Heuristic spam scoring with corpus-driven lexicon recalibration"
            .to_string(),
        endpoints,
    })
}
