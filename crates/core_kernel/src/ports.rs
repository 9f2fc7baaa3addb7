//! Ports and Adapters Infrastructure
//!
//! Domain crates define port traits that extend the marker traits here;
//! adapters (the REST client, the in-memory mock) implement them.
//!
//! ```text
//!        Policy Manager (domain_policy)
//!                    │
//!                    ▼
//!          PolicyPort (domain_policy)
//!            ▲                  ▲
//!   RestPolicyAdapter     MockPolicyPort
//!     (infra_rest)         (tests)
//! ```
//!
//! Every port operation fails with exactly one error kind, `NetworkError`.
//! Its variants only record *why* the call failed; callers treat them
//! uniformly.

use thiserror::Error;
use serde::Serialize;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The backend answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
    },

    /// The request never completed (connection refused, timeout, ...)
    #[error("Transport failure: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A success response carried a body that could not be decoded
    #[error("Malformed response: {message}")]
    Decode {
        message: String,
    },
}

impl NetworkError {
    /// Creates a Status error
    pub fn status(status: u16) -> Self {
        NetworkError::Status { status }
    }

    /// Creates a Transport error without an underlying cause
    pub fn transport(message: impl Into<String>) -> Self {
        NetworkError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        NetworkError::Decode {
            message: message.into(),
        }
    }

    /// Returns the HTTP status when the backend answered
    pub fn http_status(&self) -> Option<u16> {
        match self {
            NetworkError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Marker for port traits; implementors can be shared behind an `Arc`
/// across tasks.
pub trait DomainPort: Send + Sync + 'static {}

/// Whether the backend behind an adapter answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Unhealthy,
}

/// Outcome of one reachability probe
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResult {
    pub adapter_id: String,
    pub status: AdapterHealth,
    /// Round trip of the probe request
    pub latency_ms: u64,
    /// The failure, when unhealthy
    pub message: Option<String>,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Adapters that can probe their backend
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = NetworkError::status(503);
        assert_eq!(error.to_string(), "HTTP error! status: 503");
        assert_eq!(error.http_status(), Some(503));
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let error = NetworkError::transport("connection refused");
        assert!(error.http_status().is_none());
        assert!(error.to_string().contains("connection refused"));
    }
}
