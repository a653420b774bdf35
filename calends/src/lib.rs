//! # calends
//!
//! Gregorian calendar helpers, date value types and a recurrence calculator
//! for "how many days until this repeats" questions.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than the individual `calends-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! calends = "0.1"
//! ```
//!
//! ```rust
//! use calends::recurrence::{nearest_repeat_offset, Recurrence, WeekdayMask};
//! use calends::time::{Calendar, Gregorian, Weekday, YearMonthDay};
//!
//! let cal = Gregorian::default();
//! let start = YearMonthDay::new(2024, 1, 1).to_datetime().unwrap();
//! let today = YearMonthDay::new(2024, 1, 2).to_datetime().unwrap();
//!
//! let mask = WeekdayMask::from_weekdays([Weekday::Monday, Weekday::Thursday]);
//! let days = nearest_repeat_offset(start, today, &Recurrence::custom_weekly(mask), &cal);
//! assert_eq!(days, Ok(2));
//! assert_eq!(cal.days_in_month(today), 31);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, `ensure!`/`fail!` macros and the clock abstraction.
pub use calends_core as core;

/// Calendar arithmetic, weekdays, months, offsets and date values.
pub use calends_time as time;

/// Recurrence rules and the next-occurrence engine.
pub use calends_recurrence as recurrence;

pub use calends_core::{Error, Result};
pub use calends_recurrence::{nearest_repeat_offset, Recurrence};
pub use calends_time::{Calendar, Gregorian};
