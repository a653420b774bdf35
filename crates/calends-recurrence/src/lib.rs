//! # calends-recurrence
//!
//! Recurrence rules and the "days until next occurrence" engine.
//!
//! ```
//! use calends_recurrence::{nearest_repeat_offset, Recurrence};
//! use calends_time::Gregorian;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let days = nearest_repeat_offset(start, today, &Recurrence::monthly(2), &Gregorian::default());
//! assert_eq!(days, Ok(47));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The next-occurrence engine.
pub mod engine;

/// `RepeatPeriod` and `RecurrenceType`.
pub mod repeat_period;

/// `Recurrence` rule.
pub mod rule;

/// `WeekdayMask` — weekday bit set for custom weekly rules.
pub mod weekday_mask;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use engine::{calculate_nearest_repeat_date, is_due, nearest_repeat_offset, next_occurrence};
pub use repeat_period::{RecurrenceType, RepeatPeriod};
pub use rule::Recurrence;
pub use weekday_mask::WeekdayMask;
