use salvo::http::StatusCode;
use thiserror::Error;

use hcardmap_engine::error::EngineError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    EngineError(#[from] EngineError),

    #[error(transparent)]
    CoreError(#[from] hcardmap_core::error::CoreError),

    #[error("Upstream request failed: {0}")]
    UpstreamError(#[from] reqwest::Error),

    #[error("Upstream parser answered with status {0}")]
    UpstreamStatus(u16),

    #[error("Invalid lookup target '{0}'")]
    InvalidTarget(String),
}

impl AppError {
    /// ## Summary
    /// The HTTP status a lookup failing with this error answers with.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidTarget(_) => StatusCode::BAD_REQUEST,
            Self::EngineError(EngineError::NotFound) => StatusCode::NOT_FOUND,
            Self::EngineError(_) | Self::UpstreamError(_) | Self::UpstreamStatus(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
