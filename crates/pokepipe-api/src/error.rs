//! Internal error types for PokeAPI operations.
//!
//! These errors are internal to `pokepipe-api` and are mapped to the core
//! `SourceError` at the port boundary.

use thiserror::Error;

/// Result type alias for PokeAPI operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to PokeAPI requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request completed with a non-success HTTP status.
    #[error("PokeAPI request failed with status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from PokeAPI: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error (includes timeouts).
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The concurrency limiter was closed while requests were waiting.
    #[error("Request limiter closed")]
    LimiterClosed(#[from] tokio::sync::AcquireError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = ApiError::Status {
            status: 404,
            url: "https://pokeapi.co/api/v2/pokemon/missingno".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("missingno"));
    }

    #[test]
    fn test_json_error_message() {
        let error: ApiError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(error.to_string().starts_with("JSON parsing error"));
    }
}
