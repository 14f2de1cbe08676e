//! Shared Test Harness
//!
//! Spawns the full router on an ephemeral port so tests exercise the service
//! exactly as an HTTP client would.

use std::net::SocketAddr;
use std::sync::Arc;

use pathlens_server::{build_router, AppState, ServiceConfig};
use tokio::net::TcpListener;

/// Configuration wired to the stub provider.
pub fn stub_config() -> ServiceConfig {
    ServiceConfig {
        use_ollama: false,
        model_name: "qwen2.5:1.5b-instruct".to_string(),
        ollama_base: "http://localhost:11434".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Configuration wiring the live provider to `base`.
pub fn live_config(base: &str) -> ServiceConfig {
    ServiceConfig {
        use_ollama: true,
        ollama_base: base.to_string(),
        ..stub_config()
    }
}

/// Spawn the service on an ephemeral port and return its address.
pub async fn spawn_app(config: ServiceConfig) -> SocketAddr {
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}
