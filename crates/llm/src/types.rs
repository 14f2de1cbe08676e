//! LLM Type Definitions
//!
//! Shared types for provider interactions: conversation messages, provider
//! configuration, and the error taxonomy used across the llm crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of a message in a chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// Configuration for an LLM provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model identifier, e.g. `qwen2.5:1.5b-instruct`.
    pub model: String,
    /// Provider base URL without the `/v1/...` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Completion token cap sent with every request.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_max_tokens() -> u32 {
    4096
}

impl ProviderConfig {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: base_url.into(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Errors surfaced by providers, the agent, and the raw debug call.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Transport-level failure (connection, timeout, body read).
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the provider.
    #[error("provider returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body did not match the expected envelope.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// Model output never matched the required shape within the retry budget.
    #[error("model output failed validation after {attempts} attempts: {detail}")]
    OutputValidation { attempts: u32, detail: String },
}

/// Result type alias for LLM operations.
pub type LlmResult<T> = Result<T, LlmError>;

impl LlmError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            LlmError::Network(_) => true,
            LlmError::Http { status, .. } => *status == 429 || *status >= 500,
            LlmError::InvalidResponse(_) | LlmError::OutputValidation { .. } => false,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Network(err.to_string())
    }
}
