//! Gemini API client (`models/{model}:generateContent`).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::types::{LlmError, Message};

#[cfg(test)]
#[path = "gemini_test.rs"]
mod gemini_test;

const DEFAULT_TEMPERATURE: f64 = 0.2;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Build a client with its HTTP timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the reqwest client cannot be
    /// constructed.
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        timeouts: LlmTimeouts,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url, model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one `generateContent` call and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] on transport failure, non-200 status, or an
    /// unparseable response body.
    pub async fn generate(
        &self,
        system: Option<&str>,
        messages: &[Message],
    ) -> Result<String, LlmError> {
        let body = build_generate_request(system, messages);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        parse_generate_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    contents: Vec<WireContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<WirePart>,
}

#[derive(Serialize, Deserialize)]
struct WireContent {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<WirePart>,
}

#[derive(Serialize, Deserialize)]
struct WirePart {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<WireContent>,
}

fn build_generate_request(system: Option<&str>, messages: &[Message]) -> GenerateRequest {
    GenerateRequest {
        system_instruction: system.map(|text| SystemInstruction {
            parts: vec![WirePart { text: text.to_owned() }],
        }),
        contents: messages
            .iter()
            .map(|m| WireContent {
                role: m.role.clone(),
                parts: vec![WirePart { text: m.content.clone() }],
            })
            .collect(),
        generation_config: GenerationConfig { temperature: DEFAULT_TEMPERATURE },
    }
}

fn parse_generate_response(raw: &str) -> Result<String, LlmError> {
    let response: GenerateResponse =
        serde_json::from_str(raw).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| LlmError::ApiParse("response has no candidates".to_owned()))?;
    let text = content
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");
    if text.is_empty() {
        return Err(LlmError::ApiParse("candidate has no text parts".to_owned()));
    }
    Ok(text)
}
