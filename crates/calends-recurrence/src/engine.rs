//! Days-until-next-occurrence calculation.
//!
//! Given the date a recurrence started, the date being checked, and a
//! [`Recurrence`], the engine returns how many days remain until the next
//! occurrence; `0` means the event is due on the checked date.  Only the
//! calendar date of each input matters: both are moved to start-of-day
//! before any arithmetic.
//!
//! # Standard rules
//!
//! * Daily / weekly: the elapsed day count is reduced modulo the period
//!   length (`interval` or `7 * interval` days).
//! * Monthly / yearly: the elapsed time is split into whole units plus
//!   leftover days with [`Calendar::months_between`] /
//!   [`Calendar::years_between`].  With no leftover days and a whole number
//!   of cycles the event is due; otherwise the next cycle boundary is
//!   `start + interval * (cycles + 1)` units, with the day-of-month clamped
//!   to the target month.
//!
//! # Custom weekly rules
//!
//! A probe bit starts at today's weekday and moves one bit left per day.
//! After Sunday it passes through the unused bit 7 before wrapping to
//! Monday; that extra step is taken back once the week has been crossed.
//! The scan is bounded to one lap and a mask that selects no weekday
//! fails with [`Error::NoMatchingWeekday`].

use chrono::NaiveDateTime;
use tracing::{debug, trace, warn};

use crate::repeat_period::{RecurrenceType, RepeatPeriod};
use crate::rule::Recurrence;
use crate::weekday_mask::WeekdayMask;
use calends_core::{ensure, fail};
use calends_core::errors::{Error, Result};
use calends_time::{Calendar, Gregorian, Weekday};

/// Probe positions in one lap: seven weekdays plus the unused bit 7.
const PROBES_PER_LAP: u32 = 8;

/// Days from `current` until the next occurrence of `recurrence`.
///
/// `calendar` is used for the standard rules; custom weekly rules always
/// use a Monday-first Gregorian calendar.
///
/// # Errors
/// * [`Error::InvalidArgument`] if a standard rule has a zero interval.
/// * [`Error::Precondition`] if `start` is after `current`.
/// * [`Error::NoMatchingWeekday`] if a custom mask selects no weekday.
/// * [`Error::Date`] if the next cycle boundary is out of range.
pub fn nearest_repeat_offset<C: Calendar + ?Sized>(
    start: NaiveDateTime,
    current: NaiveDateTime,
    recurrence: &Recurrence,
    calendar: &C,
) -> Result<u32> {
    recurrence.validate().map_err(|e| {
        warn!(%recurrence, %e, "recurrence cannot produce an occurrence");
        e
    })?;
    match *recurrence {
        Recurrence::CustomWeekly { mask } => custom_weekly_offset(current, mask),
        Recurrence::Standard { period, interval } => {
            standard_offset(start, current, period, interval, calendar)
        }
    }
}

/// Flat-argument form of [`nearest_repeat_offset`] for callers that store
/// recurrences as separate fields.
///
/// For [`RecurrenceType::CustomWeekly`] the `start`, `period` and `interval`
/// arguments are ignored; otherwise `custom_week` is.
pub fn calculate_nearest_repeat_date<C: Calendar + ?Sized>(
    start: NaiveDateTime,
    current: NaiveDateTime,
    period: RepeatPeriod,
    interval: i32,
    recurrence_type: RecurrenceType,
    custom_week: u8,
    calendar: &C,
) -> Result<u32> {
    let recurrence = Recurrence::from_parts(period, interval, recurrence_type, custom_week)
        .map_err(|e| {
            warn!(%e, "rejected recurrence fields");
            e
        })?;
    nearest_repeat_offset(start, current, &recurrence, calendar)
}

/// Return `true` if `recurrence` has an occurrence on `current`.
pub fn is_due<C: Calendar + ?Sized>(
    start: NaiveDateTime,
    current: NaiveDateTime,
    recurrence: &Recurrence,
    calendar: &C,
) -> Result<bool> {
    Ok(nearest_repeat_offset(start, current, recurrence, calendar)? == 0)
}

/// Start of the day of the next occurrence on or after `current`.
pub fn next_occurrence<C: Calendar + ?Sized>(
    start: NaiveDateTime,
    current: NaiveDateTime,
    recurrence: &Recurrence,
    calendar: &C,
) -> Result<NaiveDateTime> {
    let offset = nearest_repeat_offset(start, current, recurrence, calendar)?;
    calendar.add_days(calendar.start_of_day(current), i64::from(offset))
}

// ── Custom weekly ─────────────────────────────────────────────────────────────

fn custom_weekly_offset(current: NaiveDateTime, mask: WeekdayMask) -> Result<u32> {
    let calendar = Gregorian::monday_first();
    let today = calendar.weekday_of(calendar.start_of_day(current));
    let wanted = mask.weekday_bits();

    let mut probe = today.mask_bit();
    let mut days = 0;
    let mut crossed = 0;
    for _ in 0..PROBES_PER_LAP {
        if probe & wanted != 0 {
            let offset = days - crossed;
            debug!(%today, mask = mask.bits(), offset, "custom weekly recurrence");
            return Ok(offset);
        }
        days += 1;
        probe <<= 1;
        if probe == 0 {
            crossed = 1;
            probe = Weekday::Monday.mask_bit();
        }
        trace!(days, probe, crossed, "custom weekly probe");
    }
    fail!("custom weekly scan of mask {:#010b} found no weekday", mask.bits())
}

// ── Standard ──────────────────────────────────────────────────────────────────

fn standard_offset<C: Calendar + ?Sized>(
    start: NaiveDateTime,
    current: NaiveDateTime,
    period: RepeatPeriod,
    interval: u32,
    calendar: &C,
) -> Result<u32> {
    let start = calendar.start_of_day(start);
    let current = calendar.start_of_day(current);
    ensure!(
        start <= current,
        "recurrence start {start} is after the checked date {current}"
    );

    let offset = match period {
        RepeatPeriod::Daily => {
            cycle_offset(calendar.days_between(start, current), i64::from(interval))
        }
        RepeatPeriod::Weekly => cycle_offset(
            calendar.days_between(start, current),
            i64::from(interval) * 7,
        ),
        RepeatPeriod::Monthly | RepeatPeriod::Yearly => {
            let elapsed = if period == RepeatPeriod::Monthly {
                calendar.months_between(start, current)?
            } else {
                calendar.years_between(start, current)?
            };
            calendar_cycle_offset(elapsed, interval, current, calendar, |n| {
                calendar.advance(start, i64::from(n), period.time_unit())
            })?
        }
    };
    debug!(%start, %current, %period, interval, offset, "standard recurrence");
    u32::try_from(offset)
        .map_err(|_| Error::InvalidArgument(format!("offset {offset} days does not fit in u32")))
}

/// Days left in a fixed-length cycle after `elapsed` days.
fn cycle_offset(elapsed: i64, period_days: i64) -> i64 {
    match elapsed % period_days {
        0 => 0,
        r => period_days - r,
    }
}

/// Days from `current` to the next boundary of a month- or year-based
/// cycle.  `elapsed` is the whole-unit-plus-days difference from the start;
/// `boundary(n)` returns the start moved by `n` units.
fn calendar_cycle_offset<C, F>(
    (units, rest): (u32, i64),
    interval: u32,
    current: NaiveDateTime,
    calendar: &C,
    boundary: F,
) -> Result<i64>
where
    C: Calendar + ?Sized,
    F: Fn(i32) -> Result<NaiveDateTime>,
{
    if rest == 0 && units % interval == 0 {
        return Ok(0);
    }
    let target = (units / interval + 1)
        .checked_mul(interval)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| Error::Date(format!("cycle {units} / {interval} overflows")))?;
    let next = boundary(target)?;
    Ok(calendar.days_between(current, next))
}
