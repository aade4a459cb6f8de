use reqwest::StatusCode;
use thiserror::Error;

/// Why a weather fetch produced no record.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("City name must not be empty")]
    EmptyCity,

    #[error("Failed to reach weather service")]
    Network(#[source] reqwest::Error),

    #[error("Weather service responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse weather response")]
    Decode(#[from] serde_json::Error),

    #[error("Weather response contained no conditions")]
    NoConditions,
}

/// Coarse failure classes, for callers that only need to branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput,
    Network,
    Status,
    Malformed,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::EmptyCity => FailureKind::InvalidInput,
            FetchError::Network(_) => FailureKind::Network,
            FetchError::Status { .. } => FailureKind::Status,
            FetchError::Decode(_) | FetchError::NoConditions => FailureKind::Malformed,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
