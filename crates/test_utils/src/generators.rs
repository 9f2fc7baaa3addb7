//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random policy records and
//! search terms.

use core_kernel::{PolicyDate, PolicyId};
use domain_policy::Policy;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Non-negative amounts with up to two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64, 0u32..3u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Premium rates from 0% to 100% in hundredths
pub fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..10_001u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Text that never parses as a number
pub fn non_numeric_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("abc".to_string()),
        Just("12abc".to_string()),
        Just("1.2.3".to_string()),
        "[a-zA-Z]{1,8}",
    ]
}

/// Car brands seen in the portal
pub fn car_brand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Toyota".to_string()),
        Just("Honda".to_string()),
        Just("Suzuki".to_string()),
        Just("Mitsubishi".to_string()),
        Just("Daihatsu".to_string()),
    ]
}

/// Names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8} [A-Z][a-z]{2,10}"
}

/// Coverage dates within 2024
pub fn date_strategy() -> impl Strategy<Value = PolicyDate> {
    (1u32..13u32, 1u32..29u32).prop_map(|(month, day)| PolicyDate::from_ymd(2024, month, day).unwrap())
}

/// Persisted or unsaved policy records
pub fn policy_strategy() -> impl Strategy<Value = Policy> {
    (
        proptest::option::of(1u32..1000u32),
        name_strategy(),
        car_brand_strategy(),
        "[A-Z][a-z]{2,8}",
        amount_strategy(),
        rate_strategy(),
        proptest::option::of(date_strategy()),
    )
        .prop_map(|(id, name, brand, car_type, tsi, rate, start)| Policy {
            id: id.map(|n| PolicyId::new(format!("POL-{n:03}"))),
            policy_number: None,
            beneficiary_name: name,
            car_brand: brand,
            car_type,
            tsi,
            premium_rate: rate,
            start_date: start,
            end_date: start.and_then(|s| s.plus_one_year().ok()),
        })
}

/// Collections of up to 20 records
pub fn policies_strategy() -> impl Strategy<Value = Vec<Policy>> {
    proptest::collection::vec(policy_strategy(), 0..20)
}

/// Search terms, including ones that match nothing
pub fn search_term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("toyota".to_string()),
        Just("HONDA".to_string()),
        Just("pol-0".to_string()),
        "[a-zA-Z]{1,4}",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn amounts_are_non_negative(amount in amount_strategy()) {
            prop_assert!(amount >= Decimal::ZERO);
        }

        #[test]
        fn rates_are_percentages(rate in rate_strategy()) {
            prop_assert!(rate >= Decimal::ZERO);
            prop_assert!(rate <= Decimal::ONE_HUNDRED);
        }

        #[test]
        fn generated_coverage_is_ordered(policy in policy_strategy()) {
            if let Some(coverage) = policy.coverage() {
                prop_assert!(coverage.is_well_ordered());
            }
        }
    }
}
