//! `YearMonthDay` — a calendar date without a time of day.
//!
//! The fields are stored as given and are not validated on construction;
//! validity is only checked when the value is converted to a chrono date
//! (`to_date`, `to_datetime`, `adding_days`).  This lets callers carry
//! user-entered or persisted triples around and decide later what to do
//! with an impossible one such as `2024-04-31`.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, Gregorian};
use crate::month::Month;
use calends_core::clock::Clock;
use calends_core::errors::{Error, Result};

/// Output style for [`YearMonthDay::formatted`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DateStyle {
    /// `yyyy-MM-dd`
    #[default]
    Iso8601,
    /// `yyyyMMdd`
    Compact,
    /// `yyyy/MM/dd`
    Slash,
    /// `January 5, 2024`
    Long,
    /// A pattern in which `yyyy`, `MM` and `dd` are substituted.
    Custom(String),
}

/// A calendar date (year, month 1–12, day 1–31).
///
/// Ordered by (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonthDay {
    year: i32,
    month: u32,
    day: u32,
}

impl YearMonthDay {
    /// Create a value from explicit fields.  No validation is performed.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Extract the date part of `dt`.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        dt.date().into()
    }

    /// The current date according to `clock`.
    pub fn today(clock: &impl Clock) -> Self {
        Self::from_datetime(clock.now())
    }

    /// Parse exactly `yyyy-MM-dd`.
    ///
    /// Returns `None` for any other shape and for dates that do not exist.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if !s.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let digits = |range: std::ops::Range<usize>| {
            let part = &s[range];
            part.bytes()
                .all(|b| b.is_ascii_digit())
                .then(|| part.parse::<u32>().ok())
                .flatten()
        };
        let year = i32::try_from(digits(0..4)?).ok()?;
        let month = digits(5..7)?;
        let day = digits(8..10)?;
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month (1–12 for a valid date).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Return the day of the month (1–31 for a valid date).
    pub fn day(&self) -> u32 {
        self.day
    }

    // ── Conversions ───────────────────────────────────────────────────────────

    /// Convert to a chrono date.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the fields do not name a real date.
    pub fn to_date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| Error::Date(format!("{self} is not a valid date")))
    }

    /// Convert to midnight of this date.
    pub fn to_datetime(&self) -> Result<NaiveDateTime> {
        Ok(self.to_date()?.and_time(NaiveTime::MIN))
    }

    /// Move by `days` (negative moves back).
    ///
    /// # Errors
    /// Fails if this value is not a real date or the result is out of range.
    pub fn adding_days(&self, days: i64) -> Result<Self> {
        let moved = Gregorian::default().add_days(self.to_datetime()?, days)?;
        Ok(Self::from_datetime(moved))
    }

    /// Return `true` if this is the current date according to `clock`.
    pub fn is_today(&self, clock: &impl Clock) -> bool {
        *self == Self::today(clock)
    }

    /// Render with the given style.
    pub fn formatted(&self, style: &DateStyle) -> String {
        let (y, m, d) = (self.year, self.month, self.day);
        match style {
            DateStyle::Iso8601 => format!("{y:04}-{m:02}-{d:02}"),
            DateStyle::Compact => format!("{y:04}{m:02}{d:02}"),
            DateStyle::Slash => format!("{y:04}/{m:02}/{d:02}"),
            DateStyle::Long => match Month::from_number(m) {
                Some(month) => format!("{} {d}, {y}", month.long_name()),
                None => self.formatted(&DateStyle::Iso8601),
            },
            DateStyle::Custom(pattern) => pattern
                .replace("yyyy", &format!("{y:04}"))
                .replace("MM", &format!("{m:02}"))
                .replace("dd", &format!("{d:02}")),
        }
    }
}

impl From<NaiveDate> for YearMonthDay {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl From<NaiveDateTime> for YearMonthDay {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_datetime(dt)
    }
}

impl TryFrom<YearMonthDay> for NaiveDate {
    type Error = Error;

    fn try_from(ymd: YearMonthDay) -> Result<Self> {
        ymd.to_date()
    }
}

impl FromStr for YearMonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::InvalidArgument(format!("{s:?} is not a yyyy-MM-dd date")))
    }
}

impl std::fmt::Display for YearMonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted(&DateStyle::Iso8601))
    }
}
