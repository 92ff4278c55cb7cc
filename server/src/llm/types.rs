//! LLM types — provider-neutral messages, errors, and the chat trait.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// MESSAGES
// =============================================================================

/// A provider-neutral conversation message.
///
/// Roles follow the Gemini convention: `user` and `model`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_owned(), content: content.into() }
    }

    #[must_use]
    pub fn model(content: impl Into<String>) -> Self {
        Self { role: "model".to_owned(), content: content.into() }
    }
}

// =============================================================================
// CHAT TRAIT
// =============================================================================

/// Object-safe chat interface so services can depend on a mockable trait
/// rather than the concrete HTTP client.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Send `messages` (with an optional system instruction) and return the
    /// generated text.
    async fn chat(&self, system: Option<&str>, messages: &[Message]) -> Result<String, LlmError>;
}
