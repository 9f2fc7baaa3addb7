//! REST Infrastructure Layer
//!
//! This crate connects the policy domain to the backend's REST resource:
//! - `RestPolicyAdapter` implements `PolicyPort` over `reqwest`
//! - `RestClientConfig` holds the resource URL and request timeout
//! - HTTP failures are translated into `core_kernel::NetworkError`
//!
//! ```text
//! GET    {base}        list
//! POST   {base}        create
//! PUT    {base}/{id}   update
//! DELETE {base}/{id}   delete
//! ```

pub mod adapter;
pub mod config;
pub mod error;

pub use adapter::RestPolicyAdapter;
pub use config::{RestClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::RestConfigError;
