//! Policy Record Tests
//!
//! Wire-format behaviour of `Policy`: camelCase fields, the derived
//! premium, date aliases and lenient numbers.

use core_kernel::{PolicyDate, PolicyId};
use domain_policy::Policy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use test_utils::{assert_premium_consistent, PolicyFixtures, TestPolicyBuilder, WireFixtures};

mod decode_tests {
    use super::*;

    #[test]
    fn test_backend_list_decodes() {
        let records: Vec<Policy> = serde_json::from_value(WireFixtures::two_record_body()).unwrap();
        assert_eq!(records, PolicyFixtures::two_records());
    }

    #[test]
    fn test_date_time_keeps_date_portion() {
        let policy: Policy = serde_json::from_value(json!({
            "beneficiaryName": "A",
            "startDate": "2024-03-01T10:30:00Z",
            "endDate": "2025-02-28 00:00:00"
        }))
        .unwrap();

        assert_eq!(policy.start_date, PolicyDate::from_ymd(2024, 3, 1).ok());
        assert_eq!(policy.end_date, PolicyDate::from_ymd(2025, 2, 28).ok());
    }

    #[test]
    fn test_alias_date_fields_are_accepted() {
        let policy: Policy = serde_json::from_value(json!({
            "policyStartDate": "2024-01-01",
            "policyEndDate": "2024-12-31"
        }))
        .unwrap();

        assert!(policy.coverage().is_some());
    }

    #[test]
    fn test_canonical_date_wins_over_alternate_name() {
        let policy: Policy = serde_json::from_value(json!({
            "startDate": "2024-01-01",
            "policyStartDate": "2023-06-01",
            "policyEndDate": "2024-12-31"
        }))
        .unwrap();

        assert_eq!(policy.start_date, PolicyDate::from_ymd(2024, 1, 1).ok());
        assert_eq!(policy.end_date, PolicyDate::from_ymd(2024, 12, 31).ok());
    }

    #[test]
    fn test_blank_or_malformed_dates_become_absent() {
        let policy: Policy = serde_json::from_value(json!({
            "startDate": "",
            "endDate": "someday",
            "policyEndDate": 20241231
        }))
        .unwrap();

        assert_eq!(policy.start_date, None);
        assert_eq!(policy.end_date, None);
        assert!(policy.coverage().is_none());
    }

    #[test]
    fn test_blank_date_does_not_reject_the_list() {
        let body = json!([
            { "id": "LIVE-1", "beneficiaryName": "A", "startDate": "2024-01-01", "endDate": "2024-12-31" },
            { "id": "LIVE-2", "beneficiaryName": "B", "startDate": "", "endDate": null }
        ]);

        let records: Vec<Policy> = serde_json::from_value(body).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records[0].coverage().is_some());
        assert_eq!(records[1].start_date, None);
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let policy: Policy = serde_json::from_value(json!({ "id": 42 })).unwrap();
        assert_eq!(policy.id, Some(PolicyId::new("42")));
    }

    #[test]
    fn test_missing_and_invalid_numbers_become_zero() {
        let policy: Policy = serde_json::from_value(json!({
            "beneficiaryName": null,
            "tsi": "n/a",
            "premiumRate": null
        }))
        .unwrap();

        assert_eq!(policy.tsi, Decimal::ZERO);
        assert_eq!(policy.premium_rate, Decimal::ZERO);
        assert_eq!(policy.beneficiary_name, "");
        assert_eq!(policy.premium_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_incoming_premium_is_ignored() {
        let policy: Policy = serde_json::from_value(json!({
            "tsi": 1000,
            "premiumRate": 10,
            "premiumAmount": 999999
        }))
        .unwrap();

        assert_eq!(policy.premium_amount(), dec!(100));
    }
}

mod encode_tests {
    use super::*;

    #[test]
    fn test_payload_carries_derived_premium() {
        let value = serde_json::to_value(PolicyFixtures::jane_smith()).unwrap();

        assert_eq!(value["premiumAmount"], json!(990.0));
        assert_eq!(value["premiumRate"], json!(4.5));
        assert_eq!(value["startDate"], json!("2024-02-15"));
        assert_eq!(value["carBrand"], json!("Honda"));
    }

    #[test]
    fn test_unsaved_record_has_no_id() {
        let value = serde_json::to_value(TestPolicyBuilder::unsaved().build()).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("policyNumber"));
        assert!(!object.contains_key("policyStartDate"));
    }

    #[test]
    fn test_premium_follows_inputs_after_edit() {
        let mut policy = PolicyFixtures::john_doe();
        policy.premium_rate = dec!(6);

        assert_premium_consistent(&policy);
        let value = serde_json::to_value(&policy).unwrap();
        assert_eq!(value["premiumAmount"], json!(1500.0));
    }
}

mod display_tests {
    use super::*;

    #[test]
    fn test_car_label_and_coverage() {
        let policy = PolicyFixtures::john_doe();
        assert_eq!(policy.car_label(), "Toyota Camry");
        assert_eq!(
            policy.coverage().map(|c| c.to_string()),
            Some("2024-01-01 to 2024-12-31".to_string())
        );
    }

    #[test]
    fn test_coverage_absent_without_both_dates() {
        let policy = TestPolicyBuilder::new().without_coverage().build();
        assert!(policy.coverage().is_none());
    }
}
