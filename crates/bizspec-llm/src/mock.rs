use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::CompletionBackend;

/// A canned backend for tests: returns fixed text or a fixed API failure
/// and remembers every prompt it was given.
pub struct MockBackend {
    outcome: Result<String, (u16, String)>,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    /// Create a mock that answers every prompt with `text`.
    pub fn success(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that fails every call with an API error.
    pub fn failure(status: u16, message: &str) -> Self {
        Self {
            outcome: Err((status, message.to_string())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts().len()
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
