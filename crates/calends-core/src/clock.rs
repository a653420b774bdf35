//! Current-time source.
//!
//! Nothing in calends reads the wall clock implicitly.  Operations that need
//! "now" (such as `YearMonthDay::is_today`) take a [`Clock`] so that callers
//! decide where the time comes from and tests can pin it.
//!
//! Thread safety: both implementations are immutable values and therefore
//! `Send + Sync`; concurrent callers can each carry their own clock.

use chrono::{Local, NaiveDateTime};

/// A source of the current local date and time.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Return the current local wall-clock date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the operating system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Create a clock pinned to `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
