use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Upstream,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code:?}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Failure turning a scoring-service payload into ranked results.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("scoring service reported an error: {}", .0.message)]
    Upstream(ApiError),
    #[error("suggestion key '{key}' is not a rank number")]
    InvalidRankKey { key: String },
    #[error("malformed suggestions payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<PayloadError> for ApiError {
    fn from(value: PayloadError) -> Self {
        match value {
            PayloadError::Upstream(err) => err,
            other => ApiError::new(ErrorCode::Validation, other.to_string()),
        }
    }
}
