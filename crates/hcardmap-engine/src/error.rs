use thiserror::Error;

/// Normalization and mapping errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Malformed record at '{property}': {reason}")]
    MalformedRecord { property: String, reason: String },

    #[error("No hCard found")]
    NotFound,

    #[error("Invalid selection: candidate {index} of {available}")]
    InvalidSelection { index: usize, available: usize },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    CoreError(#[from] hcardmap_core::error::CoreError),
}

impl EngineError {
    #[must_use]
    pub fn malformed(property: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            property: property.into(),
            reason: reason.into(),
        }
    }
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
