//! `Calendar` trait and the proleptic Gregorian implementation.
//!
//! A calendar knows which weekday starts a week and how to move a
//! `NaiveDateTime` by calendar units.  Every boundary and arithmetic helper
//! is a provided method on the trait, so an implementation only has to say
//! who it is and where its week starts.
//!
//! Calendars are plain values.  Pass the one you want into each call; there
//! is no process-wide "current calendar".

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::month::days_in_month;
use crate::time_offset::TimeOffset;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use calends_core::ensure;
use calends_core::errors::{Error, Result};

/// A Gregorian calendar configuration.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Gregorian (Monday first)"`).
    fn name(&self) -> &str;

    /// The weekday that opens a week in this calendar.
    fn first_weekday(&self) -> Weekday;

    // ── Day boundaries ────────────────────────────────────────────────────────

    /// Midnight of the day containing `dt`.
    fn start_of_day(&self, dt: NaiveDateTime) -> NaiveDateTime {
        dt.date().and_time(NaiveTime::MIN)
    }

    /// Last whole second (23:59:59) of the day containing `dt`.
    fn end_of_day(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        last_second(dt.date())
    }

    /// Weekday of `dt`.
    fn weekday_of(&self, dt: NaiveDateTime) -> Weekday {
        dt.weekday().into()
    }

    /// Millisecond-precision identifier, `yyyy-MM-dd HH:mm:ss.SSS`.
    fn timestamp_id(&self, dt: NaiveDateTime) -> String {
        dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
    }

    // ── Week / month / year boundaries ────────────────────────────────────────

    /// Midnight of the first day of the week containing `dt`.
    fn start_of_week(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        let back = self.weekday_of(dt).days_since(self.first_weekday());
        let date = dt
            .date()
            .checked_sub_days(Days::new(u64::from(back)))
            .ok_or_else(|| Error::Date(format!("start of week before {dt} is out of range")))?;
        Ok(date.and_time(NaiveTime::MIN))
    }

    /// 23:59:59 on the last day of the week containing `dt`.
    fn end_of_week(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        let start = self.start_of_week(dt)?;
        let date = start
            .date()
            .checked_add_days(Days::new(6))
            .ok_or_else(|| Error::Date(format!("end of week after {dt} is out of range")))?;
        last_second(date)
    }

    /// Midnight of the first day of the month containing `dt`.
    fn start_of_month(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        Ok(ymd(dt.year(), dt.month(), 1)?.and_time(NaiveTime::MIN))
    }

    /// 23:59:59 on the last day of the month containing `dt`.
    fn end_of_month(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        last_second(ymd(dt.year(), dt.month(), self.days_in_month(dt))?)
    }

    /// Midnight of January 1 of the year containing `dt`.
    fn start_of_year(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        Ok(ymd(dt.year(), 1, 1)?.and_time(NaiveTime::MIN))
    }

    /// 23:59:59 on December 31 of the year containing `dt`.
    fn end_of_year(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        last_second(ymd(dt.year(), 12, 31)?)
    }

    /// Number of days in the month containing `dt`.
    fn days_in_month(&self, dt: NaiveDateTime) -> u32 {
        days_in_month(dt.year(), dt.month()).unwrap_or(30)
    }

    /// How many days precede the 1st of the month in its first week row
    /// (0..=6), counted from this calendar's first weekday.
    fn leading_days_of_month(&self, dt: NaiveDateTime) -> Result<u8> {
        let first = self.start_of_month(dt)?;
        Ok(self.weekday_of(first).days_since(self.first_weekday()))
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move `dt` by `n` whole days.
    fn add_days(&self, dt: NaiveDateTime, n: i64) -> Result<NaiveDateTime> {
        let days = Days::new(n.unsigned_abs());
        let moved = if n >= 0 {
            dt.checked_add_days(days)
        } else {
            dt.checked_sub_days(days)
        };
        moved.ok_or_else(|| Error::Date(format!("{dt} {n:+} days is out of range")))
    }

    /// Move `dt` by `n` calendar months, clamping the day to the target
    /// month's length (Jan 31 + 1 month = Feb 28/29).
    fn add_months(&self, dt: NaiveDateTime, n: i32) -> Result<NaiveDateTime> {
        let months = Months::new(n.unsigned_abs());
        let moved = if n >= 0 {
            dt.checked_add_months(months)
        } else {
            dt.checked_sub_months(months)
        };
        moved.ok_or_else(|| Error::Date(format!("{dt} {n:+} months is out of range")))
    }

    /// Move `dt` by `n` calendar years (Feb 29 + 1 year = Feb 28).
    fn add_years(&self, dt: NaiveDateTime, n: i32) -> Result<NaiveDateTime> {
        let months = n
            .checked_mul(12)
            .ok_or_else(|| Error::Date(format!("{n} years overflows the month count")))?;
        self.add_months(dt, months)
    }

    /// Move `dt` by `n` units.
    fn advance(&self, dt: NaiveDateTime, n: i64, unit: TimeUnit) -> Result<NaiveDateTime> {
        let narrow = |n: i64| {
            i32::try_from(n).map_err(|_| Error::InvalidArgument(format!("{n} {unit} is too large")))
        };
        let delta = match unit {
            TimeUnit::Years => return self.add_years(dt, narrow(n)?),
            TimeUnit::Months => return self.add_months(dt, narrow(n)?),
            TimeUnit::Weeks => {
                let days = n
                    .checked_mul(7)
                    .ok_or_else(|| Error::InvalidArgument(format!("{n} weeks is too large")))?;
                return self.add_days(dt, days);
            }
            TimeUnit::Days => return self.add_days(dt, n),
            TimeUnit::Hours => TimeDelta::try_hours(n),
            TimeUnit::Minutes => TimeDelta::try_minutes(n),
            TimeUnit::Seconds => TimeDelta::try_seconds(n),
        }
        .ok_or_else(|| Error::InvalidArgument(format!("{n} {unit} is too large")))?;
        dt.checked_add_signed(delta)
            .ok_or_else(|| Error::Date(format!("{dt} + {n} {unit} is out of range")))
    }

    /// Apply every component of `offset` to `dt`, largest unit first.
    fn add_offset(&self, dt: NaiveDateTime, offset: &TimeOffset) -> Result<NaiveDateTime> {
        offset
            .components()
            .into_iter()
            .filter(|(_, n)| *n != 0)
            .try_fold(dt, |acc, (unit, n)| self.advance(acc, i64::from(n), unit))
    }

    /// Whole calendar days from `from` to `to`, ignoring the time of day.
    /// Negative when `to` is earlier.
    fn days_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> i64 {
        (to.date() - from.date()).num_days()
    }

    /// Calendar difference from `from` to `to` as whole months plus
    /// leftover days.
    ///
    /// The month count is the largest `m` with `add_months(from, m) <= to`,
    /// so Jan 31 → Feb 29 is exactly one month.  Only the date part of the
    /// inputs is used.
    ///
    /// # Errors
    /// Returns a precondition error if `to` is before `from`.
    fn months_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Result<(u32, i64)> {
        whole_units_between(self, from, to, 1)
    }

    /// Calendar difference from `from` to `to` as whole years plus leftover
    /// days, with the same anchoring rule as [`Calendar::months_between`].
    fn years_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Result<(u32, i64)> {
        whole_units_between(self, from, to, 12)
    }

    // ── Neighbours ────────────────────────────────────────────────────────────

    /// Same time on the previous day.
    fn prev_day(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        self.add_days(dt, -1)
    }

    /// Same time on the next day.
    fn next_day(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        self.add_days(dt, 1)
    }

    /// Same time one week earlier.
    fn prev_week(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        self.advance(dt, -1, TimeUnit::Weeks)
    }

    /// Same time one week later.
    fn next_week(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        self.advance(dt, 1, TimeUnit::Weeks)
    }

    /// Same day-of-month in the previous month, clamped.
    fn prev_month(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        self.add_months(dt, -1)
    }

    /// Same day-of-month in the next month, clamped.
    fn next_month(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        self.add_months(dt, 1)
    }

    /// Same date in the previous year, clamped.
    fn prev_year(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        self.add_years(dt, -1)
    }

    /// Same date in the next year, clamped.
    fn next_year(&self, dt: NaiveDateTime) -> Result<NaiveDateTime> {
        self.add_years(dt, 1)
    }
}

/// The proleptic Gregorian calendar with a configurable first weekday.
///
/// This is the calendar configuration value threaded through every
/// computation.  The default starts weeks on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Gregorian {
    /// The weekday that opens a week.
    pub first_weekday: Weekday,
}

impl Gregorian {
    /// A Gregorian calendar whose weeks start on `first_weekday`.
    pub fn new(first_weekday: Weekday) -> Self {
        Self { first_weekday }
    }

    /// Weeks start on Monday (ISO 8601).
    pub fn monday_first() -> Self {
        Self::new(Weekday::Monday)
    }

    /// Weeks start on Sunday.
    pub fn sunday_first() -> Self {
        Self::new(Weekday::Sunday)
    }
}

impl Default for Gregorian {
    fn default() -> Self {
        Self::monday_first()
    }
}

impl Calendar for Gregorian {
    fn name(&self) -> &str {
        match self.first_weekday {
            Weekday::Monday => "Gregorian (Monday first)",
            Weekday::Sunday => "Gregorian (Sunday first)",
            _ => "Gregorian",
        }
    }

    fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Date(format!("{year:04}-{month:02}-{day:02} is not a valid date")))
}

fn last_second(date: NaiveDate) -> Result<NaiveDateTime> {
    date.and_hms_opt(23, 59, 59)
        .ok_or_else(|| Error::Date(format!("no end of day for {date}")))
}

/// Shared body of `months_between` / `years_between`; `step` is the unit
/// length in months.
fn whole_units_between<C: Calendar + ?Sized>(
    cal: &C,
    from: NaiveDateTime,
    to: NaiveDateTime,
    step: i32,
) -> Result<(u32, i64)> {
    let from = cal.start_of_day(from);
    let to = cal.start_of_day(to);
    ensure!(from <= to, "calendar difference from {from} back to {to}");

    let month_gap = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut units = month_gap / step;
    let mut anchor = cal.add_months(from, units * step)?;
    // Clamped or later day-of-month can overshoot by at most one unit.
    while anchor > to {
        units -= 1;
        anchor = cal.add_months(from, units * step)?;
    }
    let rest = cal.days_between(anchor, to);
    tracing::trace!(%from, %to, step, units, rest, "whole-unit calendar difference");
    Ok((units as u32, rest))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 15, 30)
            .unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(NaiveTime::MIN)
    }

    #[test]
    fn start_and_end_of_day() {
        let cal = Gregorian::default();
        assert_eq!(cal.start_of_day(at(2024, 3, 15)), midnight(2024, 3, 15));
        assert_eq!(
            cal.end_of_day(at(2024, 3, 15)).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap()
        );
    }

    #[test]
    fn week_bounds_follow_first_weekday() {
        // 2024-03-13 is a Wednesday
        let wed = at(2024, 3, 13);
        let monday = Gregorian::monday_first();
        assert_eq!(monday.start_of_week(wed).unwrap(), midnight(2024, 3, 11));
        assert_eq!(monday.end_of_week(wed).unwrap().date(), midnight(2024, 3, 17).date());

        let sunday = Gregorian::sunday_first();
        assert_eq!(sunday.start_of_week(wed).unwrap(), midnight(2024, 3, 10));
        assert_eq!(sunday.end_of_week(wed).unwrap().date(), midnight(2024, 3, 16).date());
    }

    #[test]
    fn start_of_week_on_first_weekday_is_same_day() {
        let sun = at(2024, 3, 17);
        assert_eq!(
            Gregorian::sunday_first().start_of_week(sun).unwrap(),
            midnight(2024, 3, 17)
        );
        assert_eq!(
            Gregorian::monday_first().start_of_week(sun).unwrap(),
            midnight(2024, 3, 11)
        );
    }

    #[test]
    fn month_and_year_bounds() {
        let cal = Gregorian::default();
        let d = at(2024, 2, 10);
        assert_eq!(cal.start_of_month(d).unwrap(), midnight(2024, 2, 1));
        assert_eq!(cal.end_of_month(d).unwrap().date(), midnight(2024, 2, 29).date());
        assert_eq!(cal.start_of_year(d).unwrap(), midnight(2024, 1, 1));
        assert_eq!(cal.end_of_year(d).unwrap().date(), midnight(2024, 12, 31).date());
        assert_eq!(cal.days_in_month(d), 29);
    }

    #[test]
    fn leading_days_of_month() {
        // 2024-09-01 is a Sunday
        let d = at(2024, 9, 20);
        assert_eq!(Gregorian::monday_first().leading_days_of_month(d).unwrap(), 6);
        assert_eq!(Gregorian::sunday_first().leading_days_of_month(d).unwrap(), 0);
    }

    #[test]
    fn add_months_clamps() {
        let cal = Gregorian::default();
        assert_eq!(cal.add_months(at(2023, 1, 31), 1).unwrap(), at(2023, 2, 28));
        assert_eq!(cal.add_months(at(2024, 3, 31), -1).unwrap(), at(2024, 2, 29));
        assert_eq!(cal.add_years(at(2024, 2, 29), 1).unwrap(), at(2025, 2, 28));
    }

    #[test]
    fn neighbours() {
        let cal = Gregorian::default();
        let d = at(2024, 1, 1);
        assert_eq!(cal.prev_day(d).unwrap(), at(2023, 12, 31));
        assert_eq!(cal.next_day(d).unwrap(), at(2024, 1, 2));
        assert_eq!(cal.prev_week(d).unwrap(), at(2023, 12, 25));
        assert_eq!(cal.next_week(d).unwrap(), at(2024, 1, 8));
        assert_eq!(cal.prev_month(d).unwrap(), at(2023, 12, 1));
        assert_eq!(cal.next_month(d).unwrap(), at(2024, 2, 1));
        assert_eq!(cal.prev_year(d).unwrap(), at(2023, 1, 1));
        assert_eq!(cal.next_year(d).unwrap(), at(2025, 1, 1));
    }

    #[test]
    fn advance_clock_units() {
        let cal = Gregorian::default();
        let d = at(2024, 12, 31);
        let later = cal.advance(d, 14, TimeUnit::Hours).unwrap();
        assert_eq!(later, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 15, 30).unwrap());
        assert_eq!(cal.advance(d, -30, TimeUnit::Seconds).unwrap(), d - TimeDelta::seconds(30));
    }

    #[test]
    fn add_offset_applies_weeks() {
        let cal = Gregorian::default();
        let offset = TimeOffset {
            month: 1,
            week: 1,
            hour: 2,
            ..TimeOffset::default()
        };
        let moved = cal.add_offset(at(2024, 1, 31), &offset).unwrap();
        // Jan 31 + 1 month = Feb 29, + 1 week = Mar 7, + 2 hours
        assert_eq!(
            moved,
            NaiveDate::from_ymd_opt(2024, 3, 7).unwrap().and_hms_opt(12, 15, 30).unwrap()
        );
    }

    #[test]
    fn days_between_ignores_time() {
        let cal = Gregorian::default();
        let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(23, 0, 0).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(1, 0, 0).unwrap();
        assert_eq!(cal.days_between(a, b), 1);
        assert_eq!(cal.days_between(b, a), -1);
    }

    #[test]
    fn months_between_with_remainder() {
        let cal = Gregorian::default();
        assert_eq!(cal.months_between(at(2024, 1, 1), at(2024, 3, 15)).unwrap(), (2, 14));
        assert_eq!(cal.months_between(at(2024, 1, 31), at(2024, 2, 29)).unwrap(), (1, 0));
        assert_eq!(cal.months_between(at(2024, 1, 31), at(2024, 2, 28)).unwrap(), (0, 28));
        assert_eq!(cal.months_between(at(2024, 1, 31), at(2024, 3, 30)).unwrap(), (1, 30));
        assert_eq!(cal.months_between(at(2024, 5, 5), at(2024, 5, 5)).unwrap(), (0, 0));
    }

    #[test]
    fn years_between_with_remainder() {
        let cal = Gregorian::default();
        assert_eq!(cal.years_between(at(2020, 2, 29), at(2021, 2, 28)).unwrap(), (1, 0));
        assert_eq!(cal.years_between(at(2020, 6, 1), at(2023, 5, 31)).unwrap(), (2, 364));
        assert_eq!(cal.years_between(at(2020, 6, 1), at(2023, 6, 1)).unwrap(), (3, 0));
    }

    #[test]
    fn months_between_rejects_reversed_range() {
        let cal = Gregorian::default();
        assert!(matches!(
            cal.months_between(at(2024, 3, 1), at(2024, 1, 1)),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn calendars_are_independent_values() {
        fn assert_impl<T: Send + Sync + Copy>() {}
        assert_impl::<Gregorian>();
        assert_eq!(Gregorian::default().name(), "Gregorian (Monday first)");
        assert_eq!(Gregorian::sunday_first().name(), "Gregorian (Sunday first)");
    }
}
