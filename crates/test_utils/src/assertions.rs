//! Custom Test Assertions
//!
//! Assertions over records and manager state that name what went wrong.

use core_kernel::PolicyId;
use domain_policy::{LoadStatus, Policy, PortalState, RecordSource};
use rust_decimal::Decimal;

/// Asserts the records carry exactly these ids, in order
pub fn assert_ids(records: &[Policy], expected: &[&str]) {
    let actual: Vec<Option<&str>> = records
        .iter()
        .map(|p| p.id.as_ref().map(PolicyId::as_str))
        .collect();
    let expected: Vec<Option<&str>> = expected.iter().map(|id| Some(*id)).collect();
    assert_eq!(actual, expected, "Record ids differ");
}

/// Asserts a premium matches `tsi * rate / 100`
pub fn assert_premium_consistent(policy: &Policy) {
    let expected = policy.tsi * policy.premium_rate / Decimal::ONE_HUNDRED;
    assert_eq!(
        policy.premium_amount(),
        expected,
        "Premium {} does not follow tsi={} rate={}",
        policy.premium_amount(),
        policy.tsi,
        policy.premium_rate
    );
}

/// Asserts the manager settled with live records and no error
pub fn assert_loaded_live(state: &PortalState) {
    assert_eq!(state.status(), LoadStatus::Loaded, "Unexpected status: {:?}", state);
    assert_eq!(state.source(), RecordSource::Live);
    assert!(state.error().is_none(), "Unexpected error: {:?}", state.error());
}

/// Asserts the manager settled on an error with this message
pub fn assert_failed_with(state: &PortalState, message: &str) {
    assert_eq!(state.status(), LoadStatus::Error, "Unexpected status: {:?}", state);
    assert_eq!(state.error(), Some(message));
}

/// Asserts a result failed with an error matching the pattern
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::PolicyFixtures;

    #[test]
    fn test_assert_ids_in_order() {
        assert_ids(&PolicyFixtures::two_records(), &["POL-001", "POL-002"]);
    }

    #[test]
    #[should_panic(expected = "Record ids differ")]
    fn test_assert_ids_detects_reordering() {
        assert_ids(&PolicyFixtures::two_records(), &["POL-002", "POL-001"]);
    }

    #[test]
    fn test_assert_premium_consistent() {
        assert_premium_consistent(&PolicyFixtures::jane_smith());
    }
}
