//! spam-rs: HTTP server for the spam scoring engine

use spam_rs::api::ApiServer;
use spam_rs::spam::SpamManager;
use spam_rs::Config;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the level can come from it
    let config_path = std::env::args().nth(1);
    let config = Config::load(config_path.as_deref().map(Path::new))?;
    config.validate()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("spam_rs={},tower_http=info", config.logging.level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }

    info!("Starting spam-rs v{}", env!("CARGO_PKG_VERSION"));
    match config_path {
        Some(path) => info!("Configuration loaded from {}", path),
        None => info!("No config file specified, using defaults and environment"),
    }
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Spam threshold: {}", config.spam.spam_threshold);

    let manager = SpamManager::new(config.spam.clone());
    let server = ApiServer::new(
        manager,
        config.server.listen_addr.clone(),
        config.server.max_upload_bytes,
    );

    server.run().await?;

    Ok(())
}
