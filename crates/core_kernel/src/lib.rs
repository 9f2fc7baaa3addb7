//! Core Kernel - Foundational types for the policy portal
//!
//! This crate provides the building blocks shared by every other crate:
//! - Money and currency formatting with precise decimal arithmetic
//! - Coverage dates that tolerate both date and date-time wire formats
//! - The opaque backend-assigned policy identifier
//! - Port contracts (`NetworkError`, `DomainPort`, health checks)

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, MoneyError, Rate};
pub use temporal::{lenient_date, PolicyDate, CoveragePeriod, TemporalError};
pub use identifiers::PolicyId;
pub use ports::{
    NetworkError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
