//! Premium calculation
//!
//! The premium of a policy is a projection of two inputs, the total sum
//! insured (TSI) and the premium rate expressed as a percentage:
//!
//! ```text
//! premium = tsi * rate / 100
//! ```
//!
//! It is never stored ahead of its inputs. Inputs that are missing or not
//! numeric count as zero, both for raw form text and for backend payloads.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use core_kernel::{Currency, Money, Rate};

use crate::error::PolicyError;

/// Parses user or wire text as a decimal, falling back to zero
///
/// Accepts plain (`4.5`) and scientific (`2.5e4`) notation, ignoring
/// surrounding whitespace.
pub fn parse_or_zero(input: &str) -> Decimal {
    parse_strict(input).unwrap_or(Decimal::ZERO)
}

/// Parses text as a decimal, returning `None` for anything non-numeric
pub fn parse_strict(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Computes `tsi * rate / 100`
///
/// Results beyond the decimal range saturate at `Decimal::MAX` (or
/// `Decimal::MIN` for negative products); `checked_premium_amount` reports
/// them instead.
pub fn premium_amount(tsi: Decimal, rate: Decimal) -> Decimal {
    match checked_premium_amount(tsi, rate) {
        Ok(amount) => amount,
        Err(_) if tsi.is_sign_negative() != rate.is_sign_negative() => Decimal::MIN,
        Err(_) => Decimal::MAX,
    }
}

/// Computes `tsi * rate / 100`, failing on overflow
pub fn checked_premium_amount(tsi: Decimal, rate: Decimal) -> Result<Decimal, PolicyError> {
    tsi.checked_mul(rate)
        .map(|product| product / dec!(100))
        .ok_or_else(|| {
            PolicyError::PremiumCalculation(format!("{tsi} x {rate}% exceeds the supported range"))
        })
}

/// Computes the premium straight from raw form text
pub fn premium_from_inputs(tsi: &str, rate: &str) -> Decimal {
    premium_amount(parse_or_zero(tsi), parse_or_zero(rate))
}

/// A priced premium, ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PremiumQuote {
    /// Total sum insured
    pub sum_insured: Money,
    /// Premium rate
    pub rate: Rate,
    /// Premium amount
    pub premium: Money,
}

impl PremiumQuote {
    /// Prices a premium in the given currency
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::PremiumCalculation` if the product overflows
    pub fn new(tsi: Decimal, rate_percentage: Decimal, currency: Currency) -> Result<Self, PolicyError> {
        let premium = checked_premium_amount(tsi, rate_percentage)?;
        Ok(Self {
            sum_insured: Money::new(tsi, currency),
            rate: Rate::from_percentage(rate_percentage),
            premium: Money::new(premium, currency),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Deserializes a JSON number, numeric string or null into a `Decimal`
///
/// Null and non-numeric values become zero.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<WireNumber>::deserialize(deserializer)? {
        None => Decimal::ZERO,
        Some(WireNumber::Integer(n)) => Decimal::from(n),
        Some(WireNumber::Float(f)) => parse_or_zero(&f.to_string()),
        Some(WireNumber::Text(text)) => parse_or_zero(&text),
    })
}
