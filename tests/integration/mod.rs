//! Integration Tests Module
//!
//! End-to-end tests driving the service over real HTTP sockets. Tests cover
//! the health endpoint, the solve endpoint against the stub provider, and the
//! primary/fallback paths against a mocked chat-completions upstream.

mod common;

// Health endpoint tests
mod health_test;

// Solve endpoint tests
mod solve_test;
