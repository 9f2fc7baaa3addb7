//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{PolicyDate, PolicyId};
use domain_policy::{Policy, PolicyDraft};
use rust_decimal::Decimal;

use crate::fixtures::{DateFixtures, PolicyFixtures};

/// Builder for constructing test policy records
pub struct TestPolicyBuilder {
    policy: Policy,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Starts from the POL-001 fixture
    pub fn new() -> Self {
        Self {
            policy: PolicyFixtures::john_doe(),
        }
    }

    /// Starts from a record the backend has not seen yet
    pub fn unsaved() -> Self {
        Self::new().without_id()
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.policy.id = Some(PolicyId::new(id.into()));
        self
    }

    /// Clears the identifier and policy number
    pub fn without_id(mut self) -> Self {
        self.policy.id = None;
        self.policy.policy_number = None;
        self
    }

    /// Sets the beneficiary name
    pub fn with_beneficiary(mut self, name: impl Into<String>) -> Self {
        self.policy.beneficiary_name = name.into();
        self
    }

    /// Sets the car brand and type
    pub fn with_car(mut self, brand: impl Into<String>, car_type: impl Into<String>) -> Self {
        self.policy.car_brand = brand.into();
        self.policy.car_type = car_type.into();
        self
    }

    /// Sets the sum insured
    pub fn with_tsi(mut self, tsi: Decimal) -> Self {
        self.policy.tsi = tsi;
        self
    }

    /// Sets the premium rate
    pub fn with_premium_rate(mut self, rate: Decimal) -> Self {
        self.policy.premium_rate = rate;
        self
    }

    /// Sets the coverage window
    pub fn with_coverage(mut self, start: PolicyDate, end: PolicyDate) -> Self {
        self.policy.start_date = Some(start);
        self.policy.end_date = Some(end);
        self
    }

    /// Removes both coverage dates
    pub fn without_coverage(mut self) -> Self {
        self.policy.start_date = None;
        self.policy.end_date = None;
        self
    }

    /// Builds the record
    pub fn build(self) -> Policy {
        self.policy
    }
}

/// Builder for filled-in drafts
pub struct TestDraftBuilder {
    draft: PolicyDraft,
}

impl Default for TestDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDraftBuilder {
    /// A create draft for "X" / "Y" / "Z" at 25000 and 5%
    pub fn new() -> Self {
        let mut draft = PolicyDraft::for_create_on(DateFixtures::policy_start()).unwrap();
        draft.beneficiary_name = "X".to_string();
        draft.car_brand = "Y".to_string();
        draft.car_type = "Z".to_string();
        draft.set_tsi("25000");
        draft.set_premium_rate("5");
        Self { draft }
    }

    /// An edit draft of an existing record
    pub fn editing(policy: &Policy) -> Self {
        Self {
            draft: PolicyDraft::for_edit_on(policy, DateFixtures::policy_start()).unwrap(),
        }
    }

    /// Sets the beneficiary name
    pub fn with_beneficiary(mut self, name: impl Into<String>) -> Self {
        self.draft.beneficiary_name = name.into();
        self
    }

    /// Sets the raw sum insured text
    pub fn with_tsi(mut self, input: &str) -> Self {
        self.draft.set_tsi(input);
        self
    }

    /// Sets the raw premium rate text
    pub fn with_premium_rate(mut self, input: &str) -> Self {
        self.draft.set_premium_rate(input);
        self
    }

    /// Builds the draft
    pub fn build(self) -> PolicyDraft {
        self.draft
    }
}
