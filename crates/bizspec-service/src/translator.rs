use std::sync::Arc;

use bizspec_core::{segment, Translation};
use bizspec_llm::{AnthropicBackend, CompletionBackend, LlmConfig};
use tracing::debug;

use crate::TranslateError;

/// Turns a business requirement into a four-section `Translation`.
///
/// Stateless between calls: every `translate` builds a prompt, makes one
/// completion call and segments the reply.
#[derive(Clone)]
pub struct Translator {
    backend: Arc<dyn CompletionBackend>,
}

impl Translator {
    /// Build a translator backed by the Anthropic API.
    ///
    /// Returns `TranslateError::Configuration` when the API key is missing.
    pub fn new(config: &LlmConfig) -> Result<Self, TranslateError> {
        let backend = AnthropicBackend::from_config(config)?;
        Ok(Self::with_backend(Arc::new(backend)))
    }

    pub fn with_backend(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn model(&self) -> Option<&str> {
        self.backend.model()
    }

    pub async fn translate(&self, business_requirement: &str) -> Result<Translation, TranslateError> {
        let prompt = bizspec_prompts::assemble_prompt(business_requirement);
        debug!(
            backend = self.backend.name(),
            prompt_len = prompt.len(),
            "translate: sending prompt"
        );

        let raw = self
            .backend
            .complete(&prompt)
            .await
            .map_err(TranslateError::Upstream)?;
        debug!(response_len = raw.len(), "translate: response received");

        Ok(segment(&raw))
    }
}
