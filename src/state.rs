//! Application State
//!
//! Shared state handed to every request handler. Built once at startup from
//! [`ServiceConfig`] and never mutated afterwards.

use std::sync::Arc;

use pathlens_llm::{Agent, LlmProvider, OllamaProvider, ProviderConfig, StubProvider};

use crate::config::ServiceConfig;

/// Immutable per-process state shared across handlers.
pub struct AppState {
    /// Startup configuration.
    pub config: ServiceConfig,
    /// Provider settings reused by the raw debug call.
    pub provider_config: ProviderConfig,
    /// The planning agent, wired to the live or stub provider.
    pub agent: Agent,
    /// Client for the raw debug call, kept separate from the agent's provider.
    pub debug_client: reqwest::Client,
}

impl AppState {
    /// Wire up the provider selected by configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let provider_config =
            ProviderConfig::new(config.model_name.clone(), config.ollama_base.clone());

        let provider: Arc<dyn LlmProvider> = if config.use_ollama {
            Arc::new(OllamaProvider::new(provider_config.clone()))
        } else {
            Arc::new(StubProvider::new())
        };
        let agent = Agent::new(provider);

        Self {
            config,
            provider_config,
            agent,
            debug_client: reqwest::Client::new(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("provider", &self.agent.provider_name())
            .finish()
    }
}
