pub mod anthropic;
pub mod config;
pub mod error;
pub mod mock;

use async_trait::async_trait;

pub use anthropic::AnthropicBackend;
pub use config::LlmConfig;
pub use error::LlmError;
pub use mock::MockBackend;

/// A text-completion API that turns one prompt into one response.
///
/// The trait does NOT handle:
/// - Prompt assembly (handled by bizspec-prompts)
/// - Response segmentation (handled by bizspec-core)
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Human-readable backend name for logging.
    fn name(&self) -> &str;

    /// Model identifier sent upstream, if any.
    fn model(&self) -> Option<&str> {
        None
    }

    /// Send `prompt` as a single user message and return the response text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
