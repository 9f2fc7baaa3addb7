//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for policy records. The two-record
//! scenario mirrors the records most tests reason about.

use std::sync::Arc;

use core_kernel::{Currency, Money, PolicyDate, PolicyId};
use domain_policy::ports::mock::MockPolicyPort;
use domain_policy::{Policy, PolicyManager};
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A sum insured in the list currency
    pub fn idr_sum_insured() -> Money {
        Money::new(dec!(25000), Currency::IDR)
    }

    /// The premium shown in the form currency
    pub fn usd_premium() -> Money {
        Money::new(dec!(1250), Currency::USD)
    }
}

/// Fixture for coverage dates
pub struct DateFixtures;

impl DateFixtures {
    /// Jan 1, 2024
    pub fn policy_start() -> PolicyDate {
        PolicyDate::from_ymd(2024, 1, 1).unwrap()
    }

    /// Dec 31, 2024
    pub fn policy_end() -> PolicyDate {
        PolicyDate::from_ymd(2024, 12, 31).unwrap()
    }

    /// A leap day, for one-year rollover tests
    pub fn leap_day() -> PolicyDate {
        PolicyDate::from_ymd(2024, 2, 29).unwrap()
    }
}

/// Fixture for policy records
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// POL-001, John Doe's Toyota Camry
    pub fn john_doe() -> Policy {
        Policy {
            id: Some(PolicyId::new("POL-001")),
            policy_number: Some("PN-2024-0001".to_string()),
            beneficiary_name: "John Doe".to_string(),
            car_brand: "Toyota".to_string(),
            car_type: "Camry".to_string(),
            tsi: dec!(25000),
            premium_rate: dec!(5),
            start_date: Some(DateFixtures::policy_start()),
            end_date: Some(DateFixtures::policy_end()),
        }
    }

    /// POL-002, Jane Smith's Honda Civic
    pub fn jane_smith() -> Policy {
        Policy {
            id: Some(PolicyId::new("POL-002")),
            policy_number: Some("PN-2024-0002".to_string()),
            beneficiary_name: "Jane Smith".to_string(),
            car_brand: "Honda".to_string(),
            car_type: "Civic".to_string(),
            tsi: dec!(22000),
            premium_rate: dec!(4.5),
            start_date: PolicyDate::from_ymd(2024, 2, 15).ok(),
            end_date: PolicyDate::from_ymd(2025, 2, 14).ok(),
        }
    }

    /// Both records, in backend order
    pub fn two_records() -> Vec<Policy> {
        vec![Self::john_doe(), Self::jane_smith()]
    }

    /// An unsaved record with a random beneficiary
    pub fn random_unsaved() -> Policy {
        let mut policy = Self::john_doe();
        policy.id = None;
        policy.policy_number = None;
        policy.beneficiary_name = Name().fake();
        policy
    }
}

/// Fixture for wire payloads as the backend sends them
pub struct WireFixtures;

impl WireFixtures {
    /// The two-record list body, with date-time coverage values
    pub fn two_record_body() -> serde_json::Value {
        serde_json::json!([
            {
                "id": "POL-001",
                "policyNumber": "PN-2024-0001",
                "beneficiaryName": "John Doe",
                "carBrand": "Toyota",
                "carType": "Camry",
                "tsi": 25000,
                "premiumRate": 5,
                "premiumAmount": 1250,
                "startDate": "2024-01-01T00:00:00",
                "endDate": "2024-12-31T00:00:00"
            },
            {
                "id": "POL-002",
                "policyNumber": "PN-2024-0002",
                "beneficiaryName": "Jane Smith",
                "carBrand": "Honda",
                "carType": "Civic",
                "tsi": 22000,
                "premiumRate": 4.5,
                "premiumAmount": 990,
                "startDate": "2024-02-15",
                "endDate": "2025-02-14"
            }
        ])
    }
}

/// A manager over an in-memory port seeded with `records`
pub async fn manager_with_records(records: Vec<Policy>) -> (PolicyManager, Arc<MockPolicyPort>) {
    let port = Arc::new(MockPolicyPort::with_records(records).await);
    (PolicyManager::new(port.clone()), port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_records_match_wire_body() {
        let decoded: Vec<Policy> =
            serde_json::from_value(WireFixtures::two_record_body()).unwrap();
        assert_eq!(decoded, PolicyFixtures::two_records());
    }

    #[test]
    fn test_random_unsaved_has_no_id() {
        let policy = PolicyFixtures::random_unsaved();
        assert!(!policy.is_persisted());
        assert!(!policy.beneficiary_name.is_empty());
    }
}
