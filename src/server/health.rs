//! Health Endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub use_ollama: bool,
    pub provider: &'static str,
    pub model_name: String,
    pub service_version: &'static str,
    pub pid: u32,
}

/// Report liveness and the active provider wiring.
///
/// Always returns 200. Reports the stub model name when the live provider is
/// not selected.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        use_ollama: state.config.use_ollama,
        provider: state.config.provider_label(),
        model_name: state.config.reported_model_name().to_string(),
        service_version: env!("CARGO_PKG_VERSION"),
        pid: std::process::id(),
    })
}
