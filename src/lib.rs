//! Pathlens Server - HTTP Service Library
//!
//! This library provides the HTTP service around a single planning-agent
//! invocation. It includes:
//! - The axum router and request handlers (`/agent/solve`, `/health`)
//! - Process-wide configuration read once from the environment
//! - Application state wiring the live or stub LLM provider

pub mod config;
pub mod error;
pub mod server;
pub mod state;

// Re-export the pieces binaries and integration tests work with
pub use config::ServiceConfig;
pub use error::{ApiError, ConfigError};
pub use server::{build_router, serve, HealthResponse, SolveRequest};
pub use state::AppState;
