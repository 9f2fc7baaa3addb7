//! Policy Manager
//!
//! The manager owns the portal state (the authoritative record collection,
//! the loading flag and the last error message) and is the only component
//! that talks to a [`PolicyPort`]. Every network failure is caught here and
//! turned into state; nothing propagates to the caller.
//!
//! State lives in a `tokio::sync::watch` channel. Views call
//! [`PolicyManager::subscribe`] and re-render when it changes.
//!
//! ```text
//!   start() ──► Loading ──list ok──► Loaded
//!                  │
//!                  └──list err──► Error (demonstration records)
//!
//!   save()/remove() ──► Loading ──ok──► refresh()
//!                          └──err──► Error (records unchanged)
//! ```
//!
//! Overlapping operations are neither queued nor cancelled; each applies
//! its result when it completes. After [`PolicyManager::shutdown`] late
//! results are dropped.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use core_kernel::PolicyId;

use crate::demo::demonstration_dataset;
use crate::form::{FormMode, PolicyDraft};
use crate::ports::PolicyPort;
use crate::record::Policy;
use crate::search;

/// Shown when the collection cannot be fetched
pub const FETCH_FAILED: &str =
    "Failed to fetch policies. Make sure the backend server is running and accessible.";
/// Shown when a create is rejected
pub const CREATE_FAILED: &str = "Failed to create policy.";
/// Shown when an update is rejected
pub const UPDATE_FAILED: &str = "Failed to update policy.";
/// Shown when a delete is rejected
pub const DELETE_FAILED: &str = "Failed to delete policy.";
/// Question asked before deleting
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this policy?";

/// Coarse status derived from the portal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Where the current records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordSource {
    /// Fetched from the backend
    #[default]
    Live,
    /// The built-in sample records shown after a failed fetch
    Demonstration,
}

/// Snapshot of what the views render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalState {
    loading: bool,
    error: Option<String>,
    records: Vec<Policy>,
    source: RecordSource,
    loaded: bool,
}

impl Default for PortalState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            records: Vec::new(),
            source: RecordSource::Live,
            loaded: false,
        }
    }
}

impl PortalState {
    /// True while any request is outstanding
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The message of the last failure, if not yet cleared
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The authoritative record collection
    pub fn records(&self) -> &[Policy] {
        &self.records
    }

    pub fn source(&self) -> RecordSource {
        self.source
    }

    pub fn status(&self) -> LoadStatus {
        if self.loading {
            LoadStatus::Loading
        } else if self.error.is_some() {
            LoadStatus::Error
        } else if self.loaded {
            LoadStatus::Loaded
        } else {
            LoadStatus::Idle
        }
    }
}

/// What the editing view should do after a save attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSignal {
    /// The write was accepted; close the form
    Close,
    /// The write failed or was invalid; keep the form and its draft
    KeepOpen,
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The user declined; no call was made
    Cancelled,
    Deleted,
    Failed,
}

/// Asks the user to confirm a destructive action
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Returns true if the user agreed to `prompt`
    async fn confirm(&self, prompt: &str) -> bool;
}

/// A gate that always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl ConfirmationGate for FixedAnswer {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Orchestrates the policy port and the portal state
#[derive(Clone)]
pub struct PolicyManager {
    port: Arc<dyn PolicyPort>,
    state: Arc<watch::Sender<PortalState>>,
    closed: Arc<AtomicBool>,
    pending: Arc<AtomicUsize>,
}

impl PolicyManager {
    /// Creates a manager in the initial `Loading` state
    pub fn new(port: Arc<dyn PolicyPort>) -> Self {
        let (state, _) = watch::channel(PortalState::default());
        Self {
            port,
            state: Arc::new(state),
            closed: Arc::new(AtomicBool::new(false)),
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Performs the initial fetch
    pub async fn start(&self) {
        info!("Starting policy manager");
        self.refresh().await;
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<PortalState> {
        self.state.subscribe()
    }

    /// The current state
    pub fn snapshot(&self) -> PortalState {
        self.state.borrow().clone()
    }

    /// Current records narrowed by a search term
    pub fn visible(&self, term: &str) -> Vec<Policy> {
        search::filter(self.state.borrow().records.iter(), term)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Re-fetches the collection
    ///
    /// On failure the demonstration dataset replaces the records.
    pub async fn refresh(&self) {
        if !self.begin(|state| state.error = None) {
            return;
        }

        match self.port.list().await {
            Ok(records) => {
                info!(count = records.len(), "Fetched policy records");
                self.finish(move |state| {
                    state.records = records;
                    state.source = RecordSource::Live;
                    state.error = None;
                    state.loaded = true;
                });
            }
            Err(e) => {
                warn!(error = %e, "Fetching policies failed, showing demonstration records");
                self.finish(|state| {
                    state.records = demonstration_dataset();
                    state.source = RecordSource::Demonstration;
                    state.error = Some(FETCH_FAILED.to_string());
                    state.loaded = true;
                });
            }
        }
    }

    /// Submits a draft, creating or updating depending on its mode
    pub async fn save(&self, draft: &PolicyDraft) -> EditorSignal {
        let policy = match draft.to_policy() {
            Ok(policy) => policy,
            Err(e) => {
                debug!(error = %e, "Draft rejected before submission");
                if !self.is_shut_down() {
                    self.state.send_modify(|state| state.error = Some(e.to_string()));
                }
                return EditorSignal::KeepOpen;
            }
        };

        if !self.begin(|_| {}) {
            return EditorSignal::KeepOpen;
        }

        let (result, failure) = match (draft.mode(), draft.id()) {
            (FormMode::Edit, Some(id)) => {
                debug!(policy_id = %id, "Updating policy");
                (self.port.update(id, &policy).await, UPDATE_FAILED)
            }
            _ => {
                debug!("Creating policy");
                (self.port.create(&policy).await, CREATE_FAILED)
            }
        };

        match result {
            Ok(()) => {
                self.refresh().await;
                self.finish(|_| {});
                EditorSignal::Close
            }
            Err(e) => {
                warn!(error = %e, "Saving policy failed");
                self.finish(|state| state.error = Some(failure.to_string()));
                EditorSignal::KeepOpen
            }
        }
    }

    /// Deletes a record once the gate confirms
    pub async fn remove(&self, id: &PolicyId, gate: &dyn ConfirmationGate) -> RemoveOutcome {
        if !gate.confirm(DELETE_PROMPT).await {
            debug!(policy_id = %id, "Delete cancelled");
            return RemoveOutcome::Cancelled;
        }

        if !self.begin(|_| {}) {
            return RemoveOutcome::Failed;
        }

        match self.port.delete(id).await {
            Ok(()) => {
                info!(policy_id = %id, "Deleted policy");
                self.refresh().await;
                self.finish(|_| {});
                RemoveOutcome::Deleted
            }
            Err(e) => {
                warn!(policy_id = %id, error = %e, "Deleting policy failed");
                self.finish(|state| state.error = Some(DELETE_FAILED.to_string()));
                RemoveOutcome::Failed
            }
        }
    }

    /// Tears the manager down; results arriving later are discarded
    pub fn shutdown(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            info!("Policy manager shut down");
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn begin(&self, prepare: impl FnOnce(&mut PortalState)) -> bool {
        if self.is_shut_down() {
            return false;
        }
        self.pending.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|state| {
            prepare(state);
            state.loading = true;
        });
        true
    }

    fn finish(&self, apply: impl FnOnce(&mut PortalState)) {
        let remaining = self.pending.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
        if self.is_shut_down() {
            debug!("Discarding result received after shutdown");
            return;
        }
        self.state.send_modify(|state| {
            apply(state);
            state.loading = remaining > 0;
        });
    }
}
