//! Ollama Provider
//!
//! Implementation of the LlmProvider trait against Ollama's OpenAI-compatible
//! chat-completions endpoint. Plain HTTP, no SDK; local Ollama needs no
//! authentication.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::provider::{parse_http_error, LlmProvider};
use super::types::{LlmError, LlmResult, Message, ProviderConfig};

/// Path of the OpenAI-compatible completions endpoint under the base URL.
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Ollama provider speaking the OpenAI-compatible API.
pub struct OllamaProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl OllamaProvider {
    /// Create a new Ollama provider with the given configuration.
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Full completions URL, tolerant of a trailing slash on the base.
    fn completions_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }

    /// Build the request body for the API.
    fn build_request_body(&self, system: Option<&str>, messages: &[Message]) -> serde_json::Value {
        let mut wire_messages: Vec<Message> = Vec::with_capacity(messages.len() + 1);
        if let Some(sys) = system {
            wire_messages.push(Message::system(sys));
        }
        wire_messages.extend(messages.iter().cloned());

        serde_json::json!({
            "model": self.config.model,
            "messages": wire_messages,
            "max_tokens": self.config.max_tokens,
        })
    }

    /// Pull the first choice's message content out of a parsed response.
    fn parse_response(&self, response: ChatResponse) -> LlmResult<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| {
                LlmError::InvalidResponse("response contained no message content".to_string())
            })
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn name(&self) -> &'static str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn send_message(&self, system: Option<&str>, messages: &[Message]) -> LlmResult<String> {
        let body = self.build_request_body(system, messages);
        debug!(model = %self.config.model, url = %self.completions_url(), "sending chat completion request");

        let response = self
            .client
            .post(self.completions_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body_text = response.text().await?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text));
        }

        let chat_response: ChatResponse = serde_json::from_str(&body_text).map_err(|e| {
            LlmError::InvalidResponse(format!("failed to parse completion response: {e}"))
        })?;

        self.parse_response(chat_response)
    }
}

/// Chat-completions response envelope (the subset this service reads).
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
