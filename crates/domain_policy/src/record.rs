//! The policy record
//!
//! A `Policy` is either persisted (it carries a backend-assigned `id`) or a
//! draft that has not been accepted yet (`id` is `None`). The wire format
//! is camelCase JSON:
//!
//! ```json
//! {
//!   "id": "POL-001",
//!   "policyNumber": "PN-2024-0001",
//!   "beneficiaryName": "John Doe",
//!   "carBrand": "Toyota",
//!   "carType": "Camry",
//!   "tsi": 25000,
//!   "premiumRate": 5,
//!   "premiumAmount": 1250,
//!   "startDate": "2024-01-01",
//!   "endDate": "2024-12-31"
//! }
//! ```
//!
//! `premiumAmount` is written from `tsi` and `premiumRate` on every
//! serialization and ignored on input. `policyStartDate`/`policyEndDate`
//! are read as fallbacks for the canonical date fields. A blank or
//! malformed date decodes to `None` rather than failing the record.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use core_kernel::{lenient_date, CoveragePeriod, PolicyDate, PolicyId};

use crate::premium::{lenient_decimal, premium_amount};

/// An auto-insurance policy record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PolicyWire")]
pub struct Policy {
    /// Backend-assigned identifier, absent for drafts
    pub id: Option<PolicyId>,
    /// Display identifier assigned by the backend
    pub policy_number: Option<String>,
    pub beneficiary_name: String,
    pub car_brand: String,
    pub car_type: String,
    /// Total sum insured
    pub tsi: Decimal,
    /// Premium rate as a percentage of the sum insured
    pub premium_rate: Decimal,
    /// First covered day
    pub start_date: Option<PolicyDate>,
    /// Last covered day
    pub end_date: Option<PolicyDate>,
}

/// Inbound shape; both date spellings are read and merged in `From`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolicyWire {
    #[serde(default)]
    id: Option<PolicyId>,
    #[serde(default)]
    policy_number: Option<String>,
    #[serde(default, deserialize_with = "nullable_text")]
    beneficiary_name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    car_brand: String,
    #[serde(default, deserialize_with = "nullable_text")]
    car_type: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    tsi: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    premium_rate: Decimal,
    #[serde(default, deserialize_with = "lenient_date")]
    start_date: Option<PolicyDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    end_date: Option<PolicyDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    policy_start_date: Option<PolicyDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    policy_end_date: Option<PolicyDate>,
}

impl From<PolicyWire> for Policy {
    fn from(wire: PolicyWire) -> Self {
        Self {
            id: wire.id,
            policy_number: wire.policy_number,
            beneficiary_name: wire.beneficiary_name,
            car_brand: wire.car_brand,
            car_type: wire.car_type,
            tsi: wire.tsi,
            premium_rate: wire.premium_rate,
            // Canonical names win when both are present
            start_date: wire.start_date.or(wire.policy_start_date),
            end_date: wire.end_date.or(wire.policy_end_date),
        }
    }
}

impl Policy {
    /// The derived premium, `tsi * premium_rate / 100`
    pub fn premium_amount(&self) -> Decimal {
        premium_amount(self.tsi, self.premium_rate)
    }

    /// Returns true once the backend has accepted the record
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// The coverage window, when both ends are known
    pub fn coverage(&self) -> Option<CoveragePeriod> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(CoveragePeriod::new(start, end)),
            _ => None,
        }
    }

    /// Car description as shown in lists, e.g. "Toyota Camry"
    pub fn car_label(&self) -> String {
        format!("{} {}", self.car_brand, self.car_type).trim().to_string()
    }

    /// Returns true if any searchable field contains `needle`
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        let id = self.id.as_ref().map(PolicyId::as_str);
        [
            Some(self.beneficiary_name.as_str()),
            Some(self.car_brand.as_str()),
            Some(self.car_type.as_str()),
            id,
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PolicyPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a PolicyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_number: Option<&'a str>,
    beneficiary_name: &'a str,
    car_brand: &'a str,
    car_type: &'a str,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    tsi: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    premium_rate: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    premium_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<PolicyDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<PolicyDate>,
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        PolicyPayload {
            id: self.id.as_ref(),
            policy_number: self.policy_number.as_deref(),
            beneficiary_name: &self.beneficiary_name,
            car_brand: &self.car_brand,
            car_type: &self.car_type,
            tsi: self.tsi,
            premium_rate: self.premium_rate,
            premium_amount: self.premium_amount(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
        .serialize(serializer)
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
