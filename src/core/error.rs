//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - REST calls against the course backend
//! - [`EmbedError`] - Provider URLs that cannot be turned into an embed
//! - [`StorageError`] - localStorage operations for the session
//! - [`ConfigError`] - Embedded configuration parsing

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Network request failed (CORS, offline, refused)
    #[error("Network error: {0}")]
    Network(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Response body did not match the expected envelope
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// Credentials missing or rejected after a refresh attempt
    #[error("Session expired, please sign in again")]
    Unauthorized,
}

/// Reasons a provider link cannot be rewritten into an embeddable URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// Google Drive link without a `/file/d/{id}` segment or `id=` parameter
    #[error("No Google Drive file id in link")]
    MissingDriveId,
    /// Video link without a recognizable video id
    #[error("No {0} video id in link")]
    MissingVideoId(&'static str),
}

/// Session storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to serialize the session.
    #[error("failed to serialize session")]
    SerializationFailed,
    /// Failed to write to localStorage.
    #[error("failed to write to localStorage")]
    WriteFailed,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid URL in configuration: {0}")]
    Url(#[from] url::ParseError),
}
