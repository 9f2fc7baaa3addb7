//! HTTP Policy Adapter
//!
//! `RestPolicyAdapter` implements `PolicyPort` against the backend's policy
//! resource. Any non-2xx answer is a failure; 4xx and 5xx are not told
//! apart. Write responses are not inspected beyond their status.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_rest::{RestClientConfig, RestPolicyAdapter};
//! use domain_policy::{PolicyManager, PolicyPort};
//! use std::sync::Arc;
//!
//! let config = RestClientConfig::new("http://localhost:5126/api/Policy")?;
//! let port: Arc<dyn PolicyPort> = Arc::new(RestPolicyAdapter::new(config)?);
//! let manager = PolicyManager::new(port);
//! ```

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response};
use tracing::{debug, instrument};
use url::Url;

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, NetworkError, PolicyId,
};
use domain_policy::{Policy, PolicyPort};

use crate::config::RestClientConfig;
use crate::error::{from_reqwest, RestConfigError};

const ADAPTER_ID: &str = "rest-policy-adapter";

/// `reqwest`-backed implementation of the PolicyPort trait
#[derive(Debug, Clone)]
pub struct RestPolicyAdapter {
    client: Client,
    base_url: Url,
}

impl RestPolicyAdapter {
    /// Creates an adapter with its own HTTP client
    ///
    /// # Errors
    ///
    /// Returns `RestConfigError::ClientBuild` if the TLS backend cannot be
    /// initialised
    pub fn new(config: RestClientConfig) -> Result<Self, RestConfigError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config.base_url))
    }

    /// Creates an adapter around an existing client
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// The collection resource URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{id}`, with the id percent-encoded as one path segment
    fn record_url(&self, id: &PolicyId) -> Result<Url, NetworkError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NetworkError::transport(format!("{} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, NetworkError> {
        let response = request.send().await.map_err(from_reqwest)?;
        let status = response.status();
        debug!(status = status.as_u16(), "Backend responded");
        if !status.is_success() {
            return Err(NetworkError::status(status.as_u16()));
        }
        Ok(response)
    }
}

/// Milliseconds in `elapsed`, saturating at `u64::MAX`
fn whole_millis(elapsed: std::time::Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

// Mark as a domain port
impl DomainPort for RestPolicyAdapter {}

#[async_trait]
impl HealthCheckable for RestPolicyAdapter {
    /// Issues the list request and reports how it went
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();
        let result = self.send(self.client.get(self.base_url.clone())).await;
        let latency_ms = whole_millis(start.elapsed());

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(e.to_string())),
        };
        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl PolicyPort for RestPolicyAdapter {
    #[instrument(skip(self), fields(url = %self.base_url))]
    async fn list(&self) -> Result<Vec<Policy>, NetworkError> {
        debug!("Fetching policies");
        let response = self.send(self.client.get(self.base_url.clone())).await?;
        let records: Vec<Policy> = response.json().await.map_err(from_reqwest)?;
        debug!(count = records.len(), "Decoded policies");
        Ok(records)
    }

    #[instrument(skip(self, policy))]
    async fn create(&self, policy: &Policy) -> Result<(), NetworkError> {
        debug!("Creating policy");
        let body = Policy {
            id: None,
            ..policy.clone()
        };
        self.send(self.client.post(self.base_url.clone()).json(&body))
            .await
            .map(|_| ())
    }

    #[instrument(skip(self, policy), fields(policy_id = %id))]
    async fn update(&self, id: &PolicyId, policy: &Policy) -> Result<(), NetworkError> {
        debug!("Updating policy");
        let url = self.record_url(id)?;
        self.send(self.client.put(url).json(policy)).await.map(|_| ())
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    async fn delete(&self, id: &PolicyId) -> Result<(), NetworkError> {
        debug!("Deleting policy");
        let url = self.record_url(id)?;
        self.send(self.client.delete(url)).await.map(|_| ())
    }
}
