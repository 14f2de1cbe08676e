//! Pathlens Core
//!
//! Domain types and pure parsing logic for the Pathlens workspace. This crate
//! has zero dependencies on application-level code (HTTP server, LLM
//! providers, etc.).
//!
//! ## Module Organization
//!
//! - `plan` - The `Plan` response shape, the `AgentOutput` sum type, and the
//!   safe coercion adapter
//! - `fallback` - Heuristic plain-text-to-`Plan` parser used when structured
//!   parsing fails
//!
//! ## Design Principles
//!
//! 1. **Total functions** - coercion and fallback parsing never fail; every
//!    input produces a valid `Plan`
//! 2. **Unidirectional dependency** - this crate depends on nothing else in
//!    the workspace

pub mod fallback;
pub mod plan;

// ── Plan Model & Coercion ──────────────────────────────────────────────
pub use plan::{coerce_to_plan, AgentOutput, Plan};

// ── Fallback Text Parser ───────────────────────────────────────────────
pub use fallback::parse_plain_text;
