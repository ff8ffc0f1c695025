//! REST API for spam scoring

pub mod handlers;
pub mod server;
pub mod spam;

pub use handlers::{ApiResponse, AppState};
pub use server::ApiServer;
