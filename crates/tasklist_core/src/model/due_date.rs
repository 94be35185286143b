//! Calendar due date value type.
//!
//! # Responsibility
//! - Parse and print the persisted `YYYY-MM-DD` form.
//! - Provide the fixed month/day and weekday fragments used by badges.
//!
//! # Invariants
//! - Text form is always zero-padded `YYYY-MM-DD`.
//! - Only real calendar dates are representable (no `2024-02-30`).
//! - Ordering of `DueDate` values equals lexicographic order of their text.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static DUE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid due date regex"));

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Optional deadline of a task, as a local calendar date.
///
/// Serialized as its `YYYY-MM-DD` string so the persisted shape stays
/// readable by older front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses the strict `YYYY-MM-DD` form.
    ///
    /// # Errors
    /// - `Malformed` when the text is not exactly four, two and two digits.
    /// - `InvalidDate` when the digits do not name a real calendar day.
    pub fn parse(value: &str) -> Result<Self, DueDateParseError> {
        let captures = DUE_DATE_RE
            .captures(value)
            .ok_or_else(|| DueDateParseError::Malformed(value.to_string()))?;

        // The regex guarantees ASCII digits of bounded width.
        let year: i32 = captures[1]
            .parse()
            .map_err(|_| DueDateParseError::Malformed(value.to_string()))?;
        let month: u32 = captures[2]
            .parse()
            .map_err(|_| DueDateParseError::Malformed(value.to_string()))?;
        let day: u32 = captures[3]
            .parse()
            .map_err(|_| DueDateParseError::Malformed(value.to_string()))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DueDateParseError::InvalidDate(value.to_string()))
    }

    /// Wraps an existing calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// `M/D` without zero padding, e.g. `1/5`.
    pub fn month_day(self) -> String {
        format!("{}/{}", self.0.month(), self.0.day())
    }

    /// Fixed English three-letter weekday, e.g. `Fri`.
    pub fn weekday_name(self) -> &'static str {
        WEEKDAY_NAMES[self.0.weekday().num_days_from_sunday() as usize]
    }
}

impl Display for DueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DueDate {
    type Err = DueDateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DueDate {
    type Error = DueDateParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.to_string()
    }
}

/// Due date parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueDateParseError {
    Malformed(String),
    InvalidDate(String),
}

impl Display for DueDateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => {
                write!(f, "due date must use YYYY-MM-DD, got `{value}`")
            }
            Self::InvalidDate(value) => write!(f, "due date is not a calendar day: `{value}`"),
        }
    }
}

impl Error for DueDateParseError {}
