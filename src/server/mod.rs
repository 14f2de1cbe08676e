//! HTTP Server
//!
//! Router assembly and the serve loop.

pub mod health;
pub mod solve;

pub use health::HealthResponse;
pub use solve::SolveRequest;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::state::AppState;

/// Assemble the service router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/agent/solve", post(solve::solve))
        .route("/health", get(health::health))
        .with_state(state)
        .layer(cors)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(state: Arc<AppState>) -> std::io::Result<()> {
    let addr = state.config.bind_addr();
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
}
