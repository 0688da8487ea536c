//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `RecipeApiError` to exit codes and user-facing messages.

use thiserror::Error;
use unikitchen_core::RecipeApiError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The recipe service call failed.
    #[error("{0}")]
    Api(#[from] RecipeApiError),

    /// Argument error that clap could not catch.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The command needs a token and none was given.
    #[error("This command requires a token; run `unikitchen auth login` and set UNIKITCHEN_TOKEN")]
    MissingToken,

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    /// - 130: Interrupted by Ctrl-C
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(err) => api_exit_code(err),
            Self::Arguments(_) | Self::MissingToken => 2, // EX_USAGE
            Self::Io(_) => 74,                            // EX_IOERR
            Self::Config(_) => 78,                        // EX_CONFIG
        }
    }
}

const fn api_exit_code(err: &RecipeApiError) -> i32 {
    match err {
        RecipeApiError::Unauthorized { .. } => 77,        // EX_NOPERM
        RecipeApiError::NotFound { .. } => 66,            // EX_NOINPUT
        RecipeApiError::Rejected { .. } | RecipeApiError::InvalidInput { .. } => 65, // EX_DATAERR
        RecipeApiError::Server { .. } | RecipeApiError::Network { .. } => 69, // EX_UNAVAILABLE
        RecipeApiError::TimedOut => 75,                   // EX_TEMPFAIL
        RecipeApiError::Cancelled => 130,
        RecipeApiError::InvalidResponse { .. } => 76,     // EX_PROTOCOL
        RecipeApiError::Configuration { .. } => 78,       // EX_CONFIG
    }
}

/// Exit code for an error bubbling out of a handler.
///
/// Handlers return `anyhow::Error`; typed causes anywhere in the chain pick
/// the code, everything else is a general failure.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| {
            cause
                .downcast_ref::<CliError>()
                .map(CliError::exit_code)
                .or_else(|| cause.downcast_ref::<RecipeApiError>().map(api_exit_code))
        })
        .unwrap_or(1)
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<unikitchen_api::ApiError> for CliError {
    fn from(err: unikitchen_api::ApiError) -> Self {
        Self::Config(err.to_string())
    }
}
