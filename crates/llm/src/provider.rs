//! LLM Provider Trait
//!
//! Defines the common interface for all LLM providers.

use async_trait::async_trait;

use super::types::{LlmResult, Message};

/// Trait implemented by every model backend.
///
/// A provider turns a conversation into the model's text reply. Transport
/// details (endpoint, auth, envelope parsing) stay behind this seam so the
/// agent can retry and repair without knowing which backend is live.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for identification and logs.
    fn name(&self) -> &'static str;

    /// Model identifier currently in use.
    fn model(&self) -> &str;

    /// Send a conversation and return the model's text reply.
    ///
    /// # Arguments
    /// * `system` - Optional system prompt, sent ahead of the conversation
    /// * `messages` - Conversation history in order
    async fn send_message(&self, system: Option<&str>, messages: &[Message]) -> LlmResult<String>;
}

/// Map a non-success HTTP status to an `LlmError`, keeping a bounded body
/// excerpt for the message.
pub fn parse_http_error(status: u16, body: &str) -> super::types::LlmError {
    super::types::LlmError::Http {
        status,
        message: body.trim().chars().take(200).collect(),
    }
}
