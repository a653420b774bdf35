//! # calends-time
//!
//! Gregorian calendar adapter, weekday/month enums, and the two date value
//! types: [`YearMonthDay`] and [`TimeOffset`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the Gregorian implementation.
pub mod calendar;

/// `Month` and month-length helpers.
pub mod month;

/// `TimeOffset` — signed composite duration.
pub mod time_offset;

/// `TimeUnit` — years down to seconds.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

/// `YearMonthDay` — date-only value and its formatting styles.
pub mod year_month_day;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, Gregorian};
pub use month::Month;
pub use time_offset::TimeOffset;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
pub use year_month_day::{DateStyle, YearMonthDay};
