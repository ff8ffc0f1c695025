//! API Server - HTTP server for REST API

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::api::spam;
use crate::spam::SpamManager;

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
    max_upload_bytes: usize,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(spam_manager: SpamManager, addr: String, max_upload_bytes: usize) -> Self {
        let state = Arc::new(AppState { spam_manager });

        Self {
            state,
            addr,
            max_upload_bytes,
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // CORS configuration
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let spam_routes = Router::new()
            .route("/predict", post(spam::predict))
            .route("/train", post(spam::train))
            .route("/status", get(spam::status));

        let api_routes = Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .nest("/spam", spam_routes);

        Router::new()
            .nest("/api", api_routes)
            .layer(DefaultBodyLimit::max(self.max_upload_bytes))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
