use crate::error::LlmError;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Connection settings for the completion API.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl LlmConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The API key, or `MissingApiKey` when unset or blank.
    pub fn require_api_key(&self) -> Result<&str, LlmError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(LlmError::MissingApiKey),
        }
    }
}
