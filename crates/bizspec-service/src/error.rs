use bizspec_llm::LlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    /// The translator could not be built from the supplied configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The completion call failed; no partial result is available.
    #[error("completion API call failed: {0}")]
    Upstream(#[source] LlmError),
}

impl From<LlmError> for TranslateError {
    fn from(e: LlmError) -> Self {
        if e.is_configuration() {
            TranslateError::Configuration(e.to_string())
        } else {
            TranslateError::Upstream(e)
        }
    }
}
