//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal, plus the locale-style rendering the portal views use
//! for sums insured and premiums.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    IDR,
    USD,
    EUR,
    GBP,
    JPY,
}

/// Rendering conventions for a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    /// Symbol placed before the amount
    pub symbol: &'static str,
    /// Whether a space separates the symbol from the digits
    pub spaced: bool,
    /// Thousands separator
    pub group_separator: char,
    /// Separator between integer and fraction digits
    pub decimal_separator: char,
    /// Fraction digits always shown
    pub min_fraction: u32,
    /// Fraction digits shown at most (amounts are rounded to this)
    pub max_fraction: u32,
}

impl Currency {
    /// Returns the display conventions for this currency
    ///
    /// Rupiah follows the Indonesian convention (dot grouping, comma
    /// decimals, whole amounts shown without fraction digits); the others
    /// follow the English convention.
    pub fn style(&self) -> CurrencyStyle {
        match self {
            Currency::IDR => CurrencyStyle {
                symbol: "Rp",
                spaced: true,
                group_separator: '.',
                decimal_separator: ',',
                min_fraction: 0,
                max_fraction: 2,
            },
            Currency::USD => CurrencyStyle {
                symbol: "$",
                spaced: false,
                group_separator: ',',
                decimal_separator: '.',
                min_fraction: 2,
                max_fraction: 2,
            },
            Currency::EUR => CurrencyStyle {
                symbol: "€",
                spaced: false,
                group_separator: ',',
                decimal_separator: '.',
                min_fraction: 2,
                max_fraction: 2,
            },
            Currency::GBP => CurrencyStyle {
                symbol: "£",
                spaced: false,
                group_separator: ',',
                decimal_separator: '.',
                min_fraction: 2,
                max_fraction: 2,
            },
            Currency::JPY => CurrencyStyle {
                symbol: "¥",
                spaced: false,
                group_separator: ',',
                decimal_separator: '.',
                min_fraction: 0,
                max_fraction: 0,
            },
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Variant names are the ISO codes
        write!(f, "{self:?}")
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IDR" => Ok(Currency::IDR),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            other => Err(MoneyError::UnknownCurrency(other.to_string())),
        }
    }
}

/// Errors raised while reading currency settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Unknown currency: {0} (expected one of IDR, USD, EUR, GBP, JPY)")]
    UnknownCurrency(String),
}

/// An amount tagged with the currency it is displayed in
///
/// Kept at 4 decimal places; rounding to the currency's fraction digits
/// happens in `format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true below zero
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Renders the amount with the currency's symbol, grouping and
    /// fraction conventions, e.g. `Rp 25.000` or `$1,250.00`
    pub fn format(&self) -> String {
        let style = self.currency.style();
        let rounded = self
            .amount
            .round_dp_with_strategy(style.max_fraction, RoundingStrategy::MidpointAwayFromZero);

        let negative = Money::new(rounded, self.currency).is_negative();
        let digits = rounded.abs().to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut fraction = fraction.trim_end_matches('0').to_string();
        while fraction.len() < style.min_fraction as usize {
            fraction.push('0');
        }

        let mut rendered = String::new();
        if negative {
            rendered.push('-');
        }
        rendered.push_str(style.symbol);
        if style.spaced {
            rendered.push(' ');
        }
        rendered.push_str(&group_digits(integer, style.group_separator));
        if !fraction.is_empty() {
            rendered.push(style.decimal_separator);
            rendered.push_str(&fraction);
        }
        rendered
    }
}

/// Inserts a separator between every group of three integer digits
fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// A premium rate, held as a fraction (0.05 is 5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(Decimal);

impl Rate {
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self(percentage / dec!(100))
    }

    pub fn as_fraction(&self) -> Decimal {
        self.0
    }

    /// The rate as entered, e.g. `4.5` for 4.5%
    pub fn as_percentage(&self) -> Decimal {
        (self.0 * dec!(100)).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_rupiah_rendering() {
        let m = Money::new(dec!(25000), Currency::IDR);
        assert_eq!(m.format(), "Rp 25.000");
    }

    #[test]
    fn test_dollar_rendering() {
        let m = Money::new(dec!(1250), Currency::USD);
        assert_eq!(m.to_string(), "$1,250.00");
    }

    #[test]
    fn test_rate_keeps_entered_percentage() {
        let rate = Rate::from_percentage(dec!(4.50));
        assert_eq!(rate.as_fraction(), dec!(0.045));
        assert_eq!(rate.as_percentage().to_string(), "4.5");
    }
}
