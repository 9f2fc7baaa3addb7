//! Built-in demonstration records
//!
//! Shown when the backend cannot be reached so the list view stays
//! populated. They are never sent to the backend and the manager marks
//! them with `RecordSource::Demonstration`.

use rust_decimal_macros::dec;

use core_kernel::{PolicyDate, PolicyId};

use crate::record::Policy;

/// The fixed two-record demonstration dataset
pub fn demonstration_dataset() -> Vec<Policy> {
    vec![
        Policy {
            id: Some(PolicyId::from("POL-001")),
            policy_number: None,
            beneficiary_name: "John Doe".to_string(),
            car_brand: "Toyota".to_string(),
            car_type: "Camry".to_string(),
            tsi: dec!(25000),
            premium_rate: dec!(5),
            start_date: PolicyDate::from_ymd(2024, 1, 1).ok(),
            end_date: PolicyDate::from_ymd(2024, 12, 31).ok(),
        },
        Policy {
            id: Some(PolicyId::from("POL-002")),
            policy_number: None,
            beneficiary_name: "Jane Smith".to_string(),
            car_brand: "Honda".to_string(),
            car_type: "Civic".to_string(),
            tsi: dec!(22000),
            premium_rate: dec!(4.5),
            start_date: PolicyDate::from_ymd(2024, 2, 15).ok(),
            end_date: PolicyDate::from_ymd(2025, 2, 14).ok(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let records = demonstration_dataset();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(Policy::is_persisted));
        assert!(records.iter().all(|p| p.coverage().is_some()));
    }
}
