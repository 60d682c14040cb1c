//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `PipelineError` to exit codes and user-facing messages.

use pokepipe_core::{ConfigError, PipelineError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Remote API unreachable or failing after retries.
    #[error("Network error: {0}")]
    Network(String),

    /// Remote API returned data that could not be normalized.
    #[error("Malformed payload: {0}")]
    Payload(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::Payload(_) => 65,   // EX_DATAERR
            Self::Network(_) => 69,   // EX_UNAVAILABLE
            Self::Database(_) => 73,  // EX_CANTCREAT (closest fit)
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
        }
    }
}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Network(e) => Self::Network(e.to_string()),
            PipelineError::MalformedPayload(e) => Self::Payload(e.to_string()),
            PipelineError::Persistence(e) => Self::Database(e.to_string()),
            PipelineError::Validation(msg) => Self::Arguments(msg),
            PipelineError::Configuration(msg) => Self::Config(msg),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error returned from `main`'s dispatch.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
