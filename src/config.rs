//! Service Configuration
//!
//! All configuration is read from the environment exactly once at startup and
//! carried through application state. Nothing reads environment variables
//! after that.

use std::env;

use crate::error::ConfigError;

/// Default model served by a local Ollama install.
const DEFAULT_MODEL: &str = "qwen2.5:1.5b-instruct";

/// Default Ollama base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default bind host.
const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
const DEFAULT_PORT: u16 = 8000;

/// Process-wide configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Live Ollama provider selected (`USE_OLLAMA` set to exactly `1`).
    pub use_ollama: bool,
    /// Model identifier for the live provider.
    pub model_name: String,
    /// Ollama base URL without the `/v1` suffix.
    pub ollama_base: String,
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let use_ollama = lookup("USE_OLLAMA").as_deref() == Some("1");
        let model_name = lookup("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let ollama_base = lookup("OLLAMA_BASE").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            use_ollama,
            model_name,
            ollama_base,
            host,
            port,
        })
    }

    /// Address string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Provider label exposed by the health endpoint.
    pub fn provider_label(&self) -> &'static str {
        if self.use_ollama {
            "ollama"
        } else {
            "test"
        }
    }

    /// Model name exposed by the health endpoint.
    pub fn reported_model_name(&self) -> &str {
        if self.use_ollama {
            &self.model_name
        } else {
            pathlens_llm::STUB_MODEL_NAME
        }
    }
}
