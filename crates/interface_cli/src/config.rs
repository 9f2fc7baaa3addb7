//! Portal configuration
//!
//! Settings come from `PORTAL_*` environment variables (a `.env` file is
//! loaded first by the binary). Anything unset falls back to the defaults
//! below; command-line flags override both.

use serde::Deserialize;
use std::time::Duration;

use core_kernel::Currency;
use infra_rest::{RestClientConfig, DEFAULT_BASE_URL};

use crate::error::CliError;

/// Portal configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// URL of the backend's policy resource
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Currency code for the list view
    pub currency: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            log_level: "warn".to_string(),
            currency: "IDR".to_string(),
        }
    }
}

impl PortalConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PORTAL"))
            .build()?
            .try_deserialize()
    }

    /// Applies command-line overrides
    pub fn with_overrides(mut self, api_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }

    /// The list view currency
    pub fn list_currency(&self) -> Result<Currency, CliError> {
        self.currency
            .parse()
            .map_err(|e| CliError::validation(format!("PORTAL_CURRENCY: {e}")))
    }

    /// Settings for the REST adapter
    pub fn rest_config(&self) -> Result<RestClientConfig, CliError> {
        Ok(RestClientConfig::new(&self.api_url)?.timeout(Duration::from_secs(self.timeout_secs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.api_url, "http://localhost:5126/api/Policy");
        assert_eq!(config.list_currency().unwrap(), Currency::IDR);
        assert_eq!(config.rest_config().unwrap().timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides_win() {
        let config = PortalConfig::default()
            .with_overrides(Some("http://backend:8080/api/Policy".to_string()), Some(3));
        assert_eq!(config.rest_config().unwrap().base_url.host_str(), Some("backend"));
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let config = PortalConfig {
            currency: "XYZ".to_string(),
            ..PortalConfig::default()
        };
        assert_eq!(config.list_currency().unwrap_err().exit_code(), 2);
    }
}
