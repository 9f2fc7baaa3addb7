//! Draft form state
//!
//! A `PolicyDraft` is the transient copy a create/edit view works on. The
//! sum insured and premium rate are kept as the raw text the user typed;
//! the premium is always derived from that text and never stored, so it
//! cannot drift from its inputs. The authoritative record is untouched
//! until the manager confirms a save.

use rust_decimal::Decimal;

use core_kernel::{CoveragePeriod, PolicyDate, PolicyId};

use crate::error::PolicyError;
use crate::premium::{checked_premium_amount, parse_or_zero, parse_strict, premium_amount};
use crate::record::Policy;

/// Whether the draft creates a new record or edits a persisted one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    /// Heading shown above the form
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Create New Policy",
            FormMode::Edit => "Edit Policy",
        }
    }
}

/// An in-progress, unsaved edit of a policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDraft {
    id: Option<PolicyId>,
    policy_number: Option<String>,
    /// Beneficiary name as typed
    pub beneficiary_name: String,
    /// Car brand as typed
    pub car_brand: String,
    /// Car type as typed
    pub car_type: String,
    tsi_input: String,
    rate_input: String,
    /// First covered day
    pub start_date: PolicyDate,
    /// Last covered day
    pub end_date: PolicyDate,
}

impl PolicyDraft {
    /// An empty draft for a new policy covering one year from today
    pub fn for_create() -> Result<Self, PolicyError> {
        Self::for_create_on(PolicyDate::today())
    }

    /// An empty draft for a new policy covering one year from `today`
    pub fn for_create_on(today: PolicyDate) -> Result<Self, PolicyError> {
        let window = CoveragePeriod::one_year_from(today)?;
        Ok(Self {
            id: None,
            policy_number: None,
            beneficiary_name: String::new(),
            car_brand: String::new(),
            car_type: String::new(),
            tsi_input: "0".to_string(),
            rate_input: "0".to_string(),
            start_date: window.start,
            end_date: window.end,
        })
    }

    /// A draft copying every field of a persisted record
    ///
    /// Missing coverage dates fall back to the create defaults.
    pub fn for_edit(policy: &Policy) -> Result<Self, PolicyError> {
        Self::for_edit_on(policy, PolicyDate::today())
    }

    /// Like `for_edit`, with an explicit date for missing coverage ends
    pub fn for_edit_on(policy: &Policy, today: PolicyDate) -> Result<Self, PolicyError> {
        let defaults = CoveragePeriod::one_year_from(today)?;
        Ok(Self {
            id: policy.id.clone(),
            policy_number: policy.policy_number.clone(),
            beneficiary_name: policy.beneficiary_name.clone(),
            car_brand: policy.car_brand.clone(),
            car_type: policy.car_type.clone(),
            tsi_input: policy.tsi.normalize().to_string(),
            rate_input: policy.premium_rate.normalize().to_string(),
            start_date: policy.start_date.unwrap_or(defaults.start),
            end_date: policy.end_date.unwrap_or(defaults.end),
        })
    }

    /// Create or edit
    pub fn mode(&self) -> FormMode {
        if self.id.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// Identifier of the record being edited
    pub fn id(&self) -> Option<&PolicyId> {
        self.id.as_ref()
    }

    /// Sum insured text as typed
    pub fn tsi_input(&self) -> &str {
        &self.tsi_input
    }

    /// Premium rate text as typed
    pub fn rate_input(&self) -> &str {
        &self.rate_input
    }

    /// Replaces the sum insured text
    pub fn set_tsi(&mut self, input: impl Into<String>) {
        self.tsi_input = input.into();
    }

    /// Replaces the premium rate text
    pub fn set_premium_rate(&mut self, input: impl Into<String>) {
        self.rate_input = input.into();
    }

    /// Sum insured as a number, zero when not numeric
    pub fn tsi(&self) -> Decimal {
        parse_or_zero(&self.tsi_input)
    }

    /// Premium rate as a number, zero when not numeric
    pub fn premium_rate(&self) -> Decimal {
        parse_or_zero(&self.rate_input)
    }

    /// The premium the current inputs produce
    pub fn premium_amount(&self) -> Decimal {
        premium_amount(self.tsi(), self.premium_rate())
    }

    /// Checks the draft can be submitted
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` for a blank beneficiary, brand or type
    /// - `InvalidAmount` when the sum insured or rate is not a
    ///   non-negative number
    /// - `PremiumCalculation` when the premium overflows
    pub fn validate(&self) -> Result<(), PolicyError> {
        self.to_policy().map(|_| ())
    }

    /// Builds the record to submit, validating it first
    pub fn to_policy(&self) -> Result<Policy, PolicyError> {
        let beneficiary_name = required("beneficiaryName", &self.beneficiary_name)?;
        let car_brand = required("carBrand", &self.car_brand)?;
        let car_type = required("carType", &self.car_type)?;
        let tsi = non_negative("tsi", &self.tsi_input)?;
        let premium_rate = non_negative("premiumRate", &self.rate_input)?;
        checked_premium_amount(tsi, premium_rate)?;

        Ok(Policy {
            id: self.id.clone(),
            policy_number: self.policy_number.clone(),
            beneficiary_name,
            car_brand,
            car_type,
            tsi,
            premium_rate,
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, PolicyError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PolicyError::missing(field));
    }
    Ok(trimmed.to_string())
}

fn non_negative(field: &str, input: &str) -> Result<Decimal, PolicyError> {
    match parse_strict(input) {
        Some(value) if !value.is_sign_negative() || value.is_zero() => Ok(value),
        _ => Err(PolicyError::invalid_amount(field, input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> PolicyDate {
        PolicyDate::from_ymd(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_premium_follows_inputs() {
        let mut draft = PolicyDraft::for_create_on(today()).unwrap();
        assert_eq!(draft.premium_amount(), Decimal::ZERO);

        draft.set_tsi("25000");
        draft.set_premium_rate("5");
        assert_eq!(draft.premium_amount(), dec!(1250));

        draft.set_premium_rate("oops");
        assert_eq!(draft.premium_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let mut draft = PolicyDraft::for_create_on(today()).unwrap();
        draft.beneficiary_name = "X".to_string();
        draft.car_brand = "Y".to_string();
        draft.car_type = "Z".to_string();
        draft.set_premium_rate("-1");
        assert_eq!(
            draft.validate(),
            Err(PolicyError::invalid_amount("premiumRate", "-1"))
        );
    }
}
