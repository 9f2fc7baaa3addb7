//! CLI error type
//!
//! Validation problems (bad flags, bad configuration, invalid drafts) exit
//! with status 2; operational failures (backend errors) exit with 3.

use thiserror::Error;

use domain_policy::PolicyError;
use infra_rest::RestConfigError;

/// Errors surfaced to the user by the `policy-portal` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// The request was rejected before any network call
    #[error("{0}")]
    Validation(String),

    /// Configuration could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No record carries the requested id
    #[error("No policy with id '{0}'")]
    NotFound(String),

    /// The operation reached the backend and failed
    #[error("{0:#}")]
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::Validation(message.into())
    }

    /// Creates a failure from any error or message
    pub fn failure(error: impl Into<anyhow::Error>) -> Self {
        CliError::Failure(error.into())
    }

    /// Process exit status for this error
    pub const fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) | CliError::Config(_) | CliError::NotFound(_) => 2,
            CliError::Failure(_) => 3,
        }
    }
}

impl From<PolicyError> for CliError {
    fn from(err: PolicyError) -> Self {
        CliError::Validation(err.to_string())
    }
}

impl From<RestConfigError> for CliError {
    fn from(err: RestConfigError) -> Self {
        match err {
            RestConfigError::InvalidBaseUrl { .. } => CliError::Validation(err.to_string()),
            RestConfigError::ClientBuild(_) => CliError::Failure(err.into()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Failure(err.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Failure(anyhow::Error::new(err).context("failed to format JSON"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), 2);
        assert_eq!(CliError::NotFound("POL-9".into()).exit_code(), 2);
        assert_eq!(CliError::failure(anyhow::anyhow!("down")).exit_code(), 3);
    }

    #[test]
    fn test_draft_errors_are_validation() {
        let err: CliError = PolicyError::missing("carBrand").into();
        assert_eq!(err.to_string(), "Missing required field: carBrand");
        assert_eq!(err.exit_code(), 2);
    }
}
