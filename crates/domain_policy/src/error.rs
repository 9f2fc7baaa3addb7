//! Policy domain errors
//!
//! These errors come from checking a draft before it is submitted. Network
//! failures are not represented here; they travel as
//! `core_kernel::NetworkError`.

use thiserror::Error;

use core_kernel::TemporalError;

/// Errors that can occur in the policy domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Required field is missing or blank
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// A numeric field is not a non-negative number
    #[error("Invalid amount for {field}: '{value}'")]
    InvalidAmount {
        field: String,
        value: String,
    },

    /// Premium calculation error
    #[error("Premium calculation error: {0}")]
    PremiumCalculation(String),

    /// Date handling error
    #[error("Date error: {0}")]
    Temporal(#[from] TemporalError),
}

impl PolicyError {
    /// Creates a missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        PolicyError::MissingRequiredField(field.into())
    }

    /// Creates an invalid amount error
    pub fn invalid_amount(field: impl Into<String>, value: impl Into<String>) -> Self {
        PolicyError::InvalidAmount {
            field: field.into(),
            value: value.into(),
        }
    }
}
