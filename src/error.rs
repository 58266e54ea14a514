//! Unified error types for the dashboard.

use thiserror::Error;

/// Failure while fetching a single indicator from an upstream API.
///
/// These never cross the fetcher boundary: every variant is logged and
/// normalized to an absent value before callers see the result.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network or transport failure, including timeouts.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("unexpected http status: {0}")]
    Status(reqwest::StatusCode),

    /// Response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Shape(String),

    /// A field was present but could not be coerced to the expected type.
    #[error("invalid value: {0}")]
    Coercion(String),
}

/// Top-level setup and runtime errors.
#[derive(Error, Debug)]
pub enum DashError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Terminal or log-file IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, DashError>;
