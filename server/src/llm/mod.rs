//! LLM — Gemini-backed text generation for answer writing and query
//! rewriting.
//!
//! DESIGN
//! ======
//! `LlmClient` wraps the concrete Gemini HTTP client behind the [`LlmChat`]
//! trait so the chat service (and its tests) depend only on the trait.
//! Configuration comes from environment variables; a missing key is
//! non-fatal at startup, the service falls back to canned answers.

pub mod config;
pub mod gemini;
pub mod types;

use config::LlmConfig;
pub use types::{LlmChat, LlmError, Message};

/// Concrete LLM client configured from the environment.
pub struct LlmClient {
    inner: gemini::GeminiClient,
}

impl LlmClient {
    /// Build an LLM client from environment variables (see
    /// [`LlmConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to build.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = gemini::GeminiClient::new(
            config.api_key,
            config.base_url,
            config.model,
            config.timeouts,
        )?;
        Ok(Self { inner })
    }

    /// The configured model name (e.g. `"gemini-2.5-flash-lite"`).
    #[must_use]
    pub fn model(&self) -> &str {
        self.inner.model()
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, system: Option<&str>, messages: &[Message]) -> Result<String, LlmError> {
        self.inner.generate(system, messages).await
    }
}
