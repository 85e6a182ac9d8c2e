//! Anthropic Messages API backend.
//!
//! One request per call: no retries, no streaming, no client-side timeout.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::CompletionBackend;

pub const MODEL: &str = "claude-sonnet-4-20250514";
pub const MAX_TOKENS: u32 = 4000;
pub const TEMPERATURE: f64 = 0.7;
pub const API_VERSION: &str = "2023-06-01";

pub struct AnthropicBackend {
    api_key: String,
    base_url: String,
    http: Client,
}

impl AnthropicBackend {
    /// Build a backend from configuration. Fails with `MissingApiKey`
    /// before any network activity when no key is configured.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config.require_api_key()?.to_string();
        debug!(base_url = %config.base_url, "from_config: api key present");
        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            http: Client::new(),
        })
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": MODEL,
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl CompletionBackend for AnthropicBackend {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> Option<&str> {
        Some(MODEL)
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        debug!(prompt_len = prompt.len(), "complete: called");
        let response = self
            .http
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&self.build_request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(%status, "complete: API error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let body = response.text().await?;
        let api_response: AnthropicResponse = serde_json::from_str(&body)?;
        debug!(stop_reason = ?api_response.stop_reason, "complete: success");
        first_text(api_response)
    }
}

/// Text of the first content block. Anything else is a malformed response.
fn first_text(response: AnthropicResponse) -> Result<String, LlmError> {
    match response.content.into_iter().next() {
        Some(AnthropicContentBlock::Text { text }) => Ok(text),
        Some(AnthropicContentBlock::Other) => Err(LlmError::InvalidResponse(
            "first content block is not text".into(),
        )),
        None => Err(LlmError::InvalidResponse("response has no content".into())),
    }
}

/// Pull `error.message` out of an Anthropic error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<AnthropicErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum AnthropicContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    error: AnthropicErrorDetail,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorDetail {
    message: String,
}
