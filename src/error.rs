//! Error Types
//!
//! Failures surfaced by the API client and the activity form.

use thiserror::Error;

/// Backend call failure
///
/// Pages treat every variant the same way (a generic message plus retry);
/// the variants exist for logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, aborted fetch
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Backend answered with a non-2xx status
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("Request build error: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status for `Status` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a `Status` error from a response body, preferring FastAPI's
    /// `{"detail": "..."}` shape when present
    pub fn from_status(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct Detail {
            detail: serde_json::Value,
        }

        let message = match serde_json::from_str::<Detail>(body) {
            Ok(Detail { detail: serde_json::Value::String(s) }) => s,
            Ok(Detail { detail }) => detail.to_string(),
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        };

        ApiError::Status { status, message }
    }
}

/// Convenience alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Activity form input outside the accepted ranges
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duration must be between 1 and 480 minutes (got {0})")]
    Duration(u32),

    #[error("Productivity score must be between 1 and 10 (got {0})")]
    ProductivityScore(u8),
}
