//! Error types for recipe API port operations.

use thiserror::Error;

/// Errors from recipe API port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeApiError {
    /// The token is missing, expired, or lacks permission (401/403).
    #[error("Not authorized ({status}): {message}")]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Server-provided or generic description
        message: String,
    },

    /// The requested resource does not exist (404).
    #[error("Not found: {resource}")]
    NotFound {
        /// The URL or resource that was not found
        resource: String,
    },

    /// The service refused the request (other 4xx).
    #[error("Request rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Server-provided or generic description
        message: String,
    },

    /// The service failed while handling the request (5xx).
    #[error("Server error {status}: {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Server-provided or generic description
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The call exceeded its time limit.
    #[error("Request timed out")]
    TimedOut,

    /// The call was cancelled by the caller.
    #[error("Request cancelled")]
    Cancelled,

    /// The response body could not be decoded.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// A value was rejected before any request was sent.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was invalid
        message: String,
    },

    /// Configuration error (bad base URL, client construction failure).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl RecipeApiError {
    /// HTTP status behind this error, if the service answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::Rejected { status, .. }
            | Self::Server { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Whether the caller should ask the user to log in again.
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Result type alias for recipe API port operations.
pub type RecipeApiResult<T> = Result<T, RecipeApiError>;
