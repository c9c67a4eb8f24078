//! Canonical month-day key.
//!
//! # Responsibility
//! - Build the lookup key shared by the store and the calendar grid.
//! - Parse keys from their canonical text form.
//!
//! # Invariants
//! - Text form is `<month>-<day>` with no leading zeros.
//! - Month is `1..=12` and day is `1..=31`; no per-month day check is done,
//!   so `2-30` is a well-formed key that the grid never produces.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Year-less identifier of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    month: u32,
    day: u32,
}

/// Rejection reasons for out-of-range or non-canonical keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    MonthOutOfRange(u32),
    DayOutOfRange(u32),
    Malformed(String),
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MonthOutOfRange(month) => write!(f, "month {month} is outside 1..=12"),
            Self::DayOutOfRange(day) => write!(f, "day {day} is outside 1..=31"),
            Self::Malformed(raw) => write!(f, "`{raw}` is not a canonical <month>-<day> key"),
        }
    }
}

impl Error for DateKeyError {}

impl DateKey {
    /// Creates a key from a 1-based month and day.
    ///
    /// # Errors
    /// - `MonthOutOfRange` when `month` is not in `1..=12`.
    /// - `DayOutOfRange` when `day` is not in `1..=31`.
    pub fn new(month: u32, day: u32) -> Result<Self, DateKeyError> {
        if !(1..=12).contains(&month) {
            return Err(DateKeyError::MonthOutOfRange(month));
        }
        if !(1..=31).contains(&day) {
            return Err(DateKeyError::DayOutOfRange(day));
        }
        Ok(Self { month, day })
    }

    /// Builds a key for a day the caller already derived from a real date.
    pub(crate) fn from_calendar(month: u32, day: u32) -> Self {
        debug_assert!((1..=12).contains(&month) && (1..=31).contains(&day));
        Self { month, day }
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || DateKeyError::Malformed(raw.to_string());
        let (month, day) = raw.split_once('-').ok_or_else(malformed)?;
        let month = parse_component(month).ok_or_else(malformed)?;
        let day = parse_component(day).ok_or_else(malformed)?;
        Self::new(month, day)
    }
}

// Digits only, no leading zero; anything else cannot be a canonical key.
fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || text.starts_with('0') || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
