//! Stub Provider
//!
//! Deterministic, network-free provider selected when the live flag is off.
//! Always replies with the minimal plan-shaped JSON, so the rest of the
//! pipeline can run end to end in tests and offline development.

use async_trait::async_trait;

use super::provider::LlmProvider;
use super::types::{LlmResult, Message};

/// Model name reported when the stub is active.
pub const STUB_MODEL_NAME: &str = "TestModel";

/// The schema-conforming reply the stub always returns.
const STUB_REPLY: &str = r#"{"steps": ["a"], "answer": "a"}"#;

/// Offline provider with a fixed reply.
#[derive(Debug, Default)]
pub struct StubProvider;

impl StubProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "test"
    }

    fn model(&self) -> &str {
        STUB_MODEL_NAME
    }

    async fn send_message(
        &self,
        _system: Option<&str>,
        _messages: &[Message],
    ) -> LlmResult<String> {
        Ok(STUB_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlens_core::Plan;

    #[tokio::test]
    async fn test_stub_reply_is_a_valid_plan() {
        let provider = StubProvider::new();
        let reply = provider
            .send_message(Some("rules"), &[Message::user("anything")])
            .await
            .unwrap();
        let plan: Plan = serde_json::from_str(&reply).unwrap();
        assert_eq!(plan.steps, vec!["a"]);
        assert_eq!(plan.answer, "a");
    }

    #[test]
    fn test_stub_identity() {
        let provider = StubProvider::new();
        assert_eq!(provider.name(), "test");
        assert_eq!(provider.model(), STUB_MODEL_NAME);
    }
}
