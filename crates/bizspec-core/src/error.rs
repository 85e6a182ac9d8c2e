use thiserror::Error;

#[derive(Debug, Error)]
pub enum BizspecError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
