//! Pathlens Server - Service Entry Point

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pathlens_server::config::ServiceConfig;
use pathlens_server::server;
use pathlens_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before the subscriber so a RUST_LOG in .env takes effect; a
    // missing file is fine, the environment alone is enough.
    let env_file = dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    if let Some(path) = env_file {
        info!(path = %path.display(), "loaded .env");
    }

    let config = ServiceConfig::from_env().context("reading configuration")?;
    info!(
        use_ollama = config.use_ollama,
        model = %config.model_name,
        "starting pathlens server"
    );

    let state = Arc::new(AppState::new(config));
    server::serve(state).await.context("serving HTTP")?;
    Ok(())
}
