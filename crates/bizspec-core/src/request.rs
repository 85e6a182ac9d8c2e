use serde::{Deserialize, Serialize};

use crate::error::BizspecError;

pub const MIN_REQUIREMENT_CHARS: usize = 10;
pub const MAX_REQUIREMENT_CHARS: usize = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub business_requirement: String,
}

impl TranslateRequest {
    /// Check the requirement length, counted in characters.
    pub fn validate(&self) -> Result<(), BizspecError> {
        let len = self.business_requirement.chars().count();
        if len < MIN_REQUIREMENT_CHARS {
            return Err(BizspecError::InvalidInput(format!(
                "business_requirement must be at least {MIN_REQUIREMENT_CHARS} characters (got {len})"
            )));
        }
        if len > MAX_REQUIREMENT_CHARS {
            return Err(BizspecError::InvalidInput(format!(
                "business_requirement must be at most {MAX_REQUIREMENT_CHARS} characters (got {len})"
            )));
        }
        Ok(())
    }
}
