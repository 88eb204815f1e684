//! Error types for the review client

use review_types::ParseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReviewError>;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// Remote API answered with a non-2xx status
    #[error("API Error: {status} {reason}")]
    Api { status: u16, reason: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ReviewError {
    pub fn api(status: reqwest::StatusCode) -> Self {
        ReviewError::Api {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Status code of a rejected API call, if that is what this is
    pub fn status(&self) -> Option<u16> {
        match self {
            ReviewError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status_and_reason() {
        let err = ReviewError::api(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "API Error: 404 Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn non_api_errors_have_no_status() {
        assert_eq!(ReviewError::NotAuthenticated.status(), None);
    }
}
