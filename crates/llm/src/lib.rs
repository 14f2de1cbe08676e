//! Pathlens LLM
//!
//! Provider abstraction and orchestration for the single model call this
//! service makes:
//! - Ollama via its OpenAI-compatible chat-completions endpoint
//! - A deterministic stub for offline and test runs
//!
//! Also includes the agent retry/repair loop and the raw debug call used to
//! capture fallback text.

pub mod agent;
pub mod ollama;
pub mod provider;
pub mod raw;
pub mod stub;
pub mod types;

// Re-export main types
pub use agent::{Agent, AGENT_SYSTEM_PROMPT};
pub use ollama::OllamaProvider;
pub use provider::LlmProvider;
pub use raw::{extract_chat_content, fetch_raw_completion};
pub use stub::{StubProvider, STUB_MODEL_NAME};
pub use types::{LlmError, LlmResult, Message, ProviderConfig, Role};
