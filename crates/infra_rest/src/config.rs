//! REST client configuration

use std::time::Duration;
use url::Url;

use crate::error::RestConfigError;

/// Where the backend listens when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5126/api/Policy";

/// Upper bound for every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the policy REST client
///
/// # Example
///
/// ```rust
/// use infra_rest::RestClientConfig;
/// use std::time::Duration;
///
/// let config = RestClientConfig::new("http://localhost:5126/api/Policy")
///     .unwrap()
///     .timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url.path(), "/api/Policy");
/// ```
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    /// URL of the policy collection resource
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
}

impl RestClientConfig {
    /// Creates a configuration for the given resource URL
    ///
    /// # Errors
    ///
    /// Returns `RestConfigError::InvalidBaseUrl` if `base_url` does not
    /// parse or is not an http(s) URL
    pub fn new(base_url: &str) -> Result<Self, RestConfigError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| RestConfigError::invalid_base_url(base_url, e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(RestConfigError::invalid_base_url(
                base_url,
                "expected an http or https URL",
            ));
        }
        Ok(Self {
            base_url: parsed,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Sets the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = RestClientConfig::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(RestClientConfig::new("ftp://example.com/policies").is_err());
        assert!(RestClientConfig::new("not a url").is_err());
        assert!(RestClientConfig::new("mailto:someone@example.com").is_err());
    }
}
