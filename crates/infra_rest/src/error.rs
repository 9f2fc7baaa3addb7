//! REST error types and translation
//!
//! Port operations only ever fail with `NetworkError`; this module maps
//! `reqwest` failures onto its variants. Configuration problems are
//! reported separately before any request is made.

use thiserror::Error;

use core_kernel::NetworkError;

/// Errors raised while building the REST client
#[derive(Debug, Error)]
pub enum RestConfigError {
    /// The configured resource URL is unusable
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        url: String,
        reason: String,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

impl RestConfigError {
    /// Creates an invalid base URL error
    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        RestConfigError::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Translates a `reqwest` failure into a port error
///
/// - status errors keep their HTTP status
/// - body decoding errors become `NetworkError::Decode`
/// - everything else (connect, timeout, redirect) is a transport failure
pub(crate) fn from_reqwest(err: reqwest::Error) -> NetworkError {
    if let Some(status) = err.status() {
        return NetworkError::status(status.as_u16());
    }
    if err.is_decode() {
        return NetworkError::decode(err.to_string());
    }
    let message = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "connection failed".to_string()
    } else {
        err.to_string()
    };
    NetworkError::Transport {
        message,
        source: Some(Box::new(err)),
    }
}
