//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while building an `ApiSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("API token cannot be empty")]
    EmptyToken,
}

/// Errors emitted by `MockTestService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MockTestServiceError {
    #[error("backend rejected the request: {message}")]
    Backend { message: String },
    #[error("backend response was missing the expected data")]
    MissingData,
    #[error("mock test request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
