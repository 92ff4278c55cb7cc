//! LLM configuration parsed from environment variables.

use super::types::LlmError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Build typed LLM config from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY`
    ///
    /// Optional:
    /// - `GEMINI_MODEL`: default `gemini-2.5-flash-lite`
    /// - `GEMINI_BASE_URL`: default Gemini API base URL
    /// - `LLM_REQUEST_TIMEOUT_SECS`: default 120
    /// - `LLM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] when `GEMINI_API_KEY` is unset.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() })?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let base_url = normalize_base_url(std::env::var("GEMINI_BASE_URL").ok().as_deref());
        let timeouts = LlmTimeouts {
            request_secs: parse_u64(
                std::env::var("LLM_REQUEST_TIMEOUT_SECS").ok().as_deref(),
                DEFAULT_LLM_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_u64(
                std::env::var("LLM_CONNECT_TIMEOUT_SECS").ok().as_deref(),
                DEFAULT_LLM_CONNECT_TIMEOUT_SECS,
            ),
        };
        Ok(Self { api_key, model, base_url, timeouts })
    }
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.unwrap_or(DEFAULT_GEMINI_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

fn parse_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}
