//! Internal error types for recipe API operations.
//!
//! These errors are internal to `unikitchen-api` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for recipe API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to recipe API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("API request failed with status {}: {}{}", .status, .url, detail_suffix(.message.as_deref()))]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Message from the service's error body, if it sent one
        message: Option<String>,
    },

    /// The configured base URL cannot have endpoint paths appended.
    #[error("Base URL cannot be used for API endpoints: {url}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
    },

    /// A request could not be assembled from the given values.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

fn detail_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(" ({m})")).unwrap_or_default()
}

impl ApiError {
    /// HTTP status of a failed request.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
