//! Policy Port - the backend contract of the policy domain
//!
//! The manager talks to the policy store only through [`PolicyPort`]. The
//! production adapter is `infra_rest::RestPolicyAdapter`; tests use the
//! in-memory [`mock::MockPolicyPort`].
//!
//! # Example
//!
//! ```ignore
//! use domain_policy::ports::PolicyPort;
//!
//! async fn count(port: &dyn PolicyPort) -> usize {
//!     port.list().await.map(|records| records.len()).unwrap_or(0)
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, NetworkError, PolicyId};

use crate::record::Policy;

/// Operations the policy domain requires from its backing store
///
/// Writes report success only; callers re-read the collection afterwards
/// to observe backend-assigned fields.
#[async_trait]
pub trait PolicyPort: DomainPort + HealthCheckable {
    /// Fetches every policy record
    ///
    /// # Errors
    ///
    /// `NetworkError` on a non-success status, a transport failure or a
    /// body that is not a list of policies
    async fn list(&self) -> Result<Vec<Policy>, NetworkError>;

    /// Submits a new record; any `id` on `policy` is ignored
    async fn create(&self, policy: &Policy) -> Result<(), NetworkError>;

    /// Replaces the record identified by `id`
    async fn update(&self, id: &PolicyId, policy: &Policy) -> Result<(), NetworkError>;

    /// Removes the record identified by `id`
    async fn delete(&self, id: &PolicyId) -> Result<(), NetworkError>;
}

/// Mock implementation of PolicyPort for testing
///
/// Records live in memory. Failures can be injected per direction and list
/// calls can be held back to simulate a slow backend.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::{watch, RwLock};

    /// A call observed by the mock
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PortCall {
        List,
        Create(Policy),
        Update(PolicyId, Policy),
        Delete(PolicyId),
    }

    /// In-memory mock implementation of PolicyPort
    #[derive(Debug)]
    pub struct MockPolicyPort {
        records: Arc<RwLock<Vec<Policy>>>,
        calls: Arc<RwLock<Vec<PortCall>>>,
        list_failure: RwLock<Option<u16>>,
        write_failure: RwLock<Option<u16>>,
        next_id: AtomicUsize,
        gate: watch::Sender<bool>,
    }

    impl Default for MockPolicyPort {
        fn default() -> Self {
            let (gate, _) = watch::channel(false);
            Self {
                records: Arc::default(),
                calls: Arc::default(),
                list_failure: RwLock::new(None),
                write_failure: RwLock::new(None),
                next_id: AtomicUsize::new(1),
                gate,
            }
        }
    }

    impl MockPolicyPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the store
        pub async fn with_records(records: Vec<Policy>) -> Self {
            let port = Self::new();
            port.next_id.store(records.len() + 1, Ordering::SeqCst);
            *port.records.write().await = records;
            port
        }

        /// Makes every list call fail with `status`
        pub async fn fail_list_with(&self, status: u16) {
            *self.list_failure.write().await = Some(status);
        }

        /// Makes every create, update and delete fail with `status`
        pub async fn fail_writes_with(&self, status: u16) {
            *self.write_failure.write().await = Some(status);
        }

        /// Clears injected failures
        pub async fn heal(&self) {
            *self.list_failure.write().await = None;
            *self.write_failure.write().await = None;
        }

        /// Blocks list calls until `release_lists` is called
        pub fn hold_lists(&self) {
            self.gate.send_replace(true);
        }

        /// Lets held list calls complete
        pub fn release_lists(&self) {
            self.gate.send_replace(false);
        }

        /// Current stored records
        pub async fn records(&self) -> Vec<Policy> {
            self.records.read().await.clone()
        }

        /// Every call received so far, in order
        pub async fn calls(&self) -> Vec<PortCall> {
            self.calls.read().await.clone()
        }

        /// Number of write calls received so far
        pub async fn write_count(&self) -> usize {
            self.calls
                .read()
                .await
                .iter()
                .filter(|call| !matches!(call, PortCall::List))
                .count()
        }

        async fn record(&self, call: PortCall) {
            self.calls.write().await.push(call);
        }

        async fn check_writes(&self) -> Result<(), NetworkError> {
            match *self.write_failure.read().await {
                Some(status) => Err(NetworkError::status(status)),
                None => Ok(()),
            }
        }
    }

    impl DomainPort for MockPolicyPort {}

    #[async_trait]
    impl HealthCheckable for MockPolicyPort {
        async fn health_check(&self) -> HealthCheckResult {
            let status = match *self.list_failure.read().await {
                Some(_) => AdapterHealth::Unhealthy,
                None => AdapterHealth::Healthy,
            };
            HealthCheckResult {
                adapter_id: "mock-policy-port".to_string(),
                status,
                latency_ms: 0,
                message: None,
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl PolicyPort for MockPolicyPort {
        async fn list(&self) -> Result<Vec<Policy>, NetworkError> {
            self.record(PortCall::List).await;

            let mut gate = self.gate.subscribe();
            gate.wait_for(|held| !held)
                .await
                .map_err(|_| NetworkError::transport("mock port dropped"))?;

            if let Some(status) = *self.list_failure.read().await {
                return Err(NetworkError::status(status));
            }
            Ok(self.records.read().await.clone())
        }

        async fn create(&self, policy: &Policy) -> Result<(), NetworkError> {
            self.record(PortCall::Create(policy.clone())).await;
            self.check_writes().await?;

            let n = self.next_id.fetch_add(1, Ordering::SeqCst);
            let mut stored = policy.clone();
            stored.id = Some(PolicyId::new(format!("POL-{n:03}")));
            stored.policy_number = Some(format!("PN-{n:04}"));
            self.records.write().await.push(stored);
            Ok(())
        }

        async fn update(&self, id: &PolicyId, policy: &Policy) -> Result<(), NetworkError> {
            self.record(PortCall::Update(id.clone(), policy.clone())).await;
            self.check_writes().await?;

            let mut records = self.records.write().await;
            let slot = records
                .iter_mut()
                .find(|record| record.id.as_ref() == Some(id))
                .ok_or_else(|| NetworkError::status(404))?;
            let policy_number = slot.policy_number.take();
            *slot = Policy {
                id: Some(id.clone()),
                policy_number: policy.policy_number.clone().or(policy_number),
                ..policy.clone()
            };
            Ok(())
        }

        async fn delete(&self, id: &PolicyId) -> Result<(), NetworkError> {
            self.record(PortCall::Delete(id.clone())).await;
            self.check_writes().await?;

            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|record| record.id.as_ref() != Some(id));
            if records.len() == before {
                return Err(NetworkError::status(404));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{MockPolicyPort, PortCall};
    use super::*;
    use crate::demo::demonstration_dataset;

    #[tokio::test]
    async fn test_mock_port_create_assigns_id() {
        let port = MockPolicyPort::with_records(demonstration_dataset()).await;
        let mut draft = demonstration_dataset().remove(0);
        draft.id = None;

        port.create(&draft).await.unwrap();

        let records = port.list().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].id, Some(PolicyId::new("POL-003")));
    }

    #[tokio::test]
    async fn test_mock_port_unknown_id_is_not_found() {
        let port = MockPolicyPort::new();
        let err = port.delete(&PolicyId::new("missing")).await.unwrap_err();
        assert_eq!(err.http_status(), Some(404));
        assert_eq!(port.calls().await, vec![PortCall::Delete(PolicyId::new("missing"))]);
    }

    #[tokio::test]
    async fn test_mock_port_injected_failure() {
        let port = MockPolicyPort::new();
        port.fail_list_with(500).await;
        assert_eq!(port.list().await.unwrap_err().http_status(), Some(500));

        port.heal().await;
        assert!(port.list().await.unwrap().is_empty());
    }
}
