//! Coverage dates
//!
//! The backend sends coverage dates either as plain ISO-8601 dates
//! (`2024-01-01`) or as full timestamps (`2024-01-01T00:00:00`). Only the
//! date portion is meaningful to the portal, so both decode to a
//! `PolicyDate` and every outgoing payload uses the plain date form.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// A calendar date on a policy (coverage start or end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolicyDate(NaiveDate);

impl PolicyDate {
    /// Wraps a calendar date
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from its components
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TemporalError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| TemporalError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Returns the underlying calendar date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// The same calendar day one year later
    ///
    /// February 29 maps to February 28 of the following year.
    pub fn plus_one_year(&self) -> Result<Self, TemporalError> {
        self.0
            .checked_add_months(Months::new(12))
            .map(Self)
            .ok_or_else(|| TemporalError::OutOfRange(self.to_string()))
    }
}

impl fmt::Display for PolicyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for PolicyDate {
    type Err = TemporalError;

    /// Parses a date, discarding any time portion after `T` or a space
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let date_part = trimmed
            .split(['T', ' '])
            .next()
            .unwrap_or(trimmed);

        NaiveDate::parse_from_str(date_part, DATE_FORMAT)
            .map(Self)
            .map_err(|_| TemporalError::InvalidDate(trimmed.to_string()))
    }
}

impl From<NaiveDate> for PolicyDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for PolicyDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PolicyDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireDate {
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Deserializes an optional date, mapping blank, malformed or non-string
/// values to `None`
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<PolicyDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<WireDate>::deserialize(deserializer)? {
        Some(WireDate::Text(text)) => text.parse().ok(),
        Some(WireDate::Other(_)) | None => None,
    })
}

/// The coverage window of a policy
///
/// `start <= end` is expected but not enforced; the backend owns that
/// rule. `is_well_ordered` lets views flag suspicious windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePeriod {
    /// First covered day
    pub start: PolicyDate,
    /// Last covered day
    pub end: PolicyDate,
}

impl CoveragePeriod {
    /// Creates a coverage window
    pub fn new(start: PolicyDate, end: PolicyDate) -> Self {
        Self { start, end }
    }

    /// A one-year window starting on `start`
    pub fn one_year_from(start: PolicyDate) -> Result<Self, TemporalError> {
        Ok(Self {
            start,
            end: start.plus_one_year()?,
        })
    }

    /// Returns true when the window does not end before it starts
    pub fn is_well_ordered(&self) -> bool {
        self.start <= self.end
    }
}

impl fmt::Display for CoveragePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
