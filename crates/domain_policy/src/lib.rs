//! Policy Record Domain
//!
//! This crate holds everything the portal knows about auto-insurance
//! policy records, independent of how they are stored or displayed:
//! - **Record**: the `Policy` type and its camelCase wire shape
//! - **Premium**: the derived premium, `tsi * rate / 100`
//! - **Search**: case-insensitive free-text filtering
//! - **Form**: the draft a create/edit view works on
//! - **Ports**: the `PolicyPort` backend contract (plus an in-memory mock)
//! - **Manager**: the orchestrator that owns the portal state
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_policy::{PolicyManager, PolicyDraft, EditorSignal};
//!
//! let manager = PolicyManager::new(Arc::new(adapter));
//! manager.start().await;
//!
//! let mut draft = PolicyDraft::for_create()?;
//! draft.beneficiary_name = "John Doe".into();
//! draft.car_brand = "Toyota".into();
//! draft.car_type = "Camry".into();
//! draft.set_tsi("25000");
//! draft.set_premium_rate("5");
//!
//! assert_eq!(manager.save(&draft).await, EditorSignal::Close);
//! ```

pub mod demo;
pub mod error;
pub mod form;
pub mod manager;
pub mod ports;
pub mod premium;
pub mod record;
pub mod search;

pub use demo::demonstration_dataset;
pub use error::PolicyError;
pub use form::{FormMode, PolicyDraft};
pub use manager::{
    ConfirmationGate, EditorSignal, FixedAnswer, LoadStatus, PolicyManager, PortalState,
    RecordSource, RemoveOutcome,
};
pub use ports::PolicyPort;
pub use premium::{premium_amount, premium_from_inputs, PremiumQuote};
pub use record::Policy;
pub use search::filter;
