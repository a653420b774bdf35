//! `TimeOffset` — a signed composite duration.
//!
//! An offset stores each calendar and clock unit separately instead of
//! collapsing them into seconds, because "1 month" has no fixed length.
//! The non-zero fields are expected to share a sign: all positive for "in
//! the future", all negative for "in the past".  Mixed signs are accepted
//! but the description cannot express them.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::time_unit::TimeUnit;

/// A signed composite duration with an "unbounded" sentinel.
///
/// # Ordering
///
/// [`TimeOffset::MAX`]-style values (`is_max == true`) sort after every
/// bounded value.  Otherwise offsets compare field by field in the priority
/// order year, month, week, day, hour, minute, second.  This is a priority
/// ordering, not a magnitude ordering: `week: 1` is greater than `day: 30`.
///
/// Equality and hashing cover the seven fields and the sentinel, so that
/// `Eq` agrees with `Ord`.  Use [`TimeOffset::same_fields`] to compare the
/// fields alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOffset {
    /// Calendar years.
    pub year: i32,
    /// Calendar months.
    pub month: i32,
    /// Weeks.
    pub week: i32,
    /// Days.
    pub day: i32,
    /// Hours.
    pub hour: i32,
    /// Minutes.
    pub minute: i32,
    /// Seconds.
    pub second: i32,
    /// `true` for the unbounded offset.
    pub is_max: bool,
}

impl TimeOffset {
    /// The zero offset.
    pub const ZERO: TimeOffset = TimeOffset {
        year: 0,
        month: 0,
        week: 0,
        day: 0,
        hour: 0,
        minute: 0,
        second: 0,
        is_max: false,
    };

    /// The unbounded offset; greater than every bounded one.
    pub const MAX: TimeOffset = TimeOffset {
        is_max: true,
        ..Self::ZERO
    };

    /// Create an offset from all seven fields.
    pub fn new(
        year: i32,
        month: i32,
        week: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> Self {
        Self {
            year,
            month,
            week,
            day,
            hour,
            minute,
            second,
            is_max: false,
        }
    }

    /// An offset of `n` years.
    pub fn years(n: i32) -> Self {
        Self { year: n, ..Self::ZERO }
    }

    /// An offset of `n` months.
    pub fn months(n: i32) -> Self {
        Self { month: n, ..Self::ZERO }
    }

    /// An offset of `n` weeks.
    pub fn weeks(n: i32) -> Self {
        Self { week: n, ..Self::ZERO }
    }

    /// An offset of `n` days.
    pub fn days(n: i32) -> Self {
        Self { day: n, ..Self::ZERO }
    }

    /// An offset of `n` hours.
    pub fn hours(n: i32) -> Self {
        Self { hour: n, ..Self::ZERO }
    }

    /// An offset of `n` minutes.
    pub fn minutes(n: i32) -> Self {
        Self { minute: n, ..Self::ZERO }
    }

    /// An offset of `n` seconds.
    pub fn seconds(n: i32) -> Self {
        Self { second: n, ..Self::ZERO }
    }

    /// Return the fields paired with their unit, largest unit first.
    pub fn components(&self) -> [(TimeUnit, i32); 7] {
        [
            (TimeUnit::Years, self.year),
            (TimeUnit::Months, self.month),
            (TimeUnit::Weeks, self.week),
            (TimeUnit::Days, self.day),
            (TimeUnit::Hours, self.hour),
            (TimeUnit::Minutes, self.minute),
            (TimeUnit::Seconds, self.second),
        ]
    }

    /// Return `true` if every field is zero (the sentinel is ignored).
    pub fn is_zero(&self) -> bool {
        self.components().iter().all(|(_, n)| *n == 0)
    }

    /// Field-wise equality that ignores the `is_max` sentinel.
    pub fn same_fields(&self, other: &Self) -> bool {
        self.components() == other.components()
    }

    /// Approximate length in seconds.
    ///
    /// Uses fixed conversions (year = 365 days, month = 30 days, week = 7
    /// days, day = 24 hours).  Good for rough magnitude comparisons only;
    /// use `Calendar::add_offset` for real date arithmetic.
    pub fn to_time_interval(&self) -> f64 {
        self.components()
            .iter()
            .map(|(unit, n)| i64::from(*n) * unit.approx_seconds())
            .sum::<i64>() as f64
    }

    fn sort_key(&self) -> (bool, [i32; 7]) {
        (
            self.is_max,
            [
                self.year,
                self.month,
                self.week,
                self.day,
                self.hour,
                self.minute,
                self.second,
            ],
        )
    }
}

impl Ord for TimeOffset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for TimeOffset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Non-zero fields as `"<abs> <unit>"`, space-joined; `"0 秒"` when empty.
/// The sign is dropped.
impl std::fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .components()
            .iter()
            .filter(|(_, n)| *n != 0)
            .map(|(unit, n)| format!("{} {}", n.unsigned_abs(), unit.label()))
            .collect();
        if parts.is_empty() {
            return write!(f, "0 {}", TimeUnit::Seconds.label());
        }
        write!(f, "{}", parts.join(" "))
    }
}
