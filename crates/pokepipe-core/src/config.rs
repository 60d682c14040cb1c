//! Environment-sourced pipeline configuration.
//!
//! Every setting is optional; unset variables fall back to the defaults below.
//! Values that are set but unparsable are reported, never silently replaced.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default SQLite database file.
pub const DEFAULT_DB_PATH: &str = "pokemon.db";

/// Default PokeAPI base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default per-request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: f64 = 10.0;

/// Default cap on concurrent detail fetches.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Upper bound on concurrent detail fetches.
pub const MAX_CONCURRENCY_LIMIT: usize = 1024;

/// Default total attempts per request.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay between attempts in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

pub const ENV_DB_PATH: &str = "DB_PATH";
pub const ENV_API_BASE: &str = "POKEAPI_BASE";
pub const ENV_HTTP_TIMEOUT: &str = "HTTP_TIMEOUT_SECONDS";
pub const ENV_MAX_CONCURRENCY: &str = "MAX_CONCURRENCY";
pub const ENV_MAX_RETRIES: &str = "MAX_RETRIES";
pub const ENV_RETRY_DELAY_MS: &str = "RETRY_DELAY_MS";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },

    #[error("{key} out of range: {message}")]
    OutOfRange { key: String, message: String },
}

/// Resolved pipeline settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    pub db_path: PathBuf,
    pub api_base_url: String,
    pub http_timeout: Duration,
    pub max_concurrency: usize,
    /// Total attempts per request, including the first.
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: Duration::from_secs_f64(DEFAULT_HTTP_TIMEOUT_SECONDS),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl PipelineSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = Self::default();

        if let Some(path) = get(ENV_DB_PATH) {
            settings.db_path = PathBuf::from(path);
        }
        if let Some(base) = get(ENV_API_BASE) {
            settings.api_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(raw) = get(ENV_HTTP_TIMEOUT) {
            settings.http_timeout = raw
                .parse::<f64>()
                .ok()
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .ok_or_else(|| invalid(ENV_HTTP_TIMEOUT, &raw))?;
        }
        if let Some(raw) = get(ENV_MAX_CONCURRENCY) {
            settings.max_concurrency = raw
                .parse()
                .map_err(|_| invalid(ENV_MAX_CONCURRENCY, &raw))?;
        }
        if let Some(raw) = get(ENV_MAX_RETRIES) {
            settings.max_retries = raw.parse().map_err(|_| invalid(ENV_MAX_RETRIES, &raw))?;
        }
        if let Some(raw) = get(ENV_RETRY_DELAY_MS) {
            let millis: u64 = raw.parse().map_err(|_| invalid(ENV_RETRY_DELAY_MS, &raw))?;
            settings.retry_delay = Duration::from_millis(millis);
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http_timeout.is_zero() {
            return Err(out_of_range(ENV_HTTP_TIMEOUT, "must be greater than zero"));
        }
        if self.max_concurrency == 0 {
            return Err(out_of_range(ENV_MAX_CONCURRENCY, "must be at least 1"));
        }
        if self.max_concurrency > MAX_CONCURRENCY_LIMIT {
            return Err(out_of_range(
                ENV_MAX_CONCURRENCY,
                &format!("must be at most {MAX_CONCURRENCY_LIMIT}"),
            ));
        }
        if self.max_retries == 0 {
            return Err(out_of_range(ENV_MAX_RETRIES, "must be at least 1"));
        }
        if self.api_base_url.is_empty() {
            return Err(out_of_range(ENV_API_BASE, "must not be empty"));
        }
        Ok(())
    }

    /// Replace the database path (e.g. from a command-line override).
    #[must_use]
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn out_of_range(key: &str, message: &str) -> ConfigError {
    ConfigError::OutOfRange {
        key: key.to_string(),
        message: message.to_string(),
    }
}
