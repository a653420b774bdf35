//! `Recurrence` — a validated recurrence rule.

use serde::{Deserialize, Serialize};

use crate::repeat_period::{RecurrenceType, RepeatPeriod};
use crate::weekday_mask::WeekdayMask;
use calends_core::errors::{Error, Result};

/// A recurrence rule.
///
/// Standard rules repeat once every `interval` periods counted from a start
/// date.  Custom weekly rules repeat on the weekdays selected by a mask and
/// do not depend on the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recurrence {
    /// Every `interval` periods.
    Standard {
        /// Granularity.
        period: RepeatPeriod,
        /// Period multiplier, at least 1.
        interval: u32,
    },
    /// On the weekdays in `mask`.
    CustomWeekly {
        /// Selected weekdays.
        mask: WeekdayMask,
    },
}

impl Recurrence {
    /// Every `interval` days.
    pub fn daily(interval: u32) -> Self {
        Self::standard(RepeatPeriod::Daily, interval)
    }

    /// Every `interval` weeks.
    pub fn weekly(interval: u32) -> Self {
        Self::standard(RepeatPeriod::Weekly, interval)
    }

    /// Every `interval` months.
    pub fn monthly(interval: u32) -> Self {
        Self::standard(RepeatPeriod::Monthly, interval)
    }

    /// Every `interval` years.
    pub fn yearly(interval: u32) -> Self {
        Self::standard(RepeatPeriod::Yearly, interval)
    }

    /// Every `interval` periods.  The interval is checked when the rule is
    /// evaluated.
    pub fn standard(period: RepeatPeriod, interval: u32) -> Self {
        Self::Standard { period, interval }
    }

    /// On the weekdays in `mask`.
    pub fn custom_weekly(mask: impl Into<WeekdayMask>) -> Self {
        Self::CustomWeekly { mask: mask.into() }
    }

    /// Build a rule from the flat field set a host application stores:
    /// a period, a signed interval, a type tag and a raw weekday byte.
    ///
    /// Fields that do not apply to the selected type are ignored.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for a standard rule whose
    /// interval is not positive.
    pub fn from_parts(
        period: RepeatPeriod,
        interval: i32,
        recurrence_type: RecurrenceType,
        custom_week: u8,
    ) -> Result<Self> {
        match recurrence_type {
            RecurrenceType::CustomWeekly => Ok(Self::custom_weekly(custom_week)),
            RecurrenceType::SingleCycle => {
                let interval = u32::try_from(interval)
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| {
                        Error::InvalidArgument(format!("interval must be >= 1, got {interval}"))
                    })?;
                Ok(Self::standard(period, interval))
            }
        }
    }

    /// The type tag of this rule.
    pub fn recurrence_type(&self) -> RecurrenceType {
        match self {
            Self::Standard { .. } => RecurrenceType::SingleCycle,
            Self::CustomWeekly { .. } => RecurrenceType::CustomWeekly,
        }
    }

    /// Check that the rule can produce an occurrence.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for a zero interval and
    /// [`Error::NoMatchingWeekday`] for a mask with no weekday selected.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Standard { interval: 0, period } => Err(Error::InvalidArgument(format!(
                "{period} recurrence needs an interval >= 1"
            ))),
            Self::CustomWeekly { mask } if mask.is_empty() => {
                Err(Error::NoMatchingWeekday { mask: mask.bits() })
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard { period, interval: 1 } => write!(f, "every {}", period.label()),
            Self::Standard { period, interval } => {
                write!(f, "every {interval} {}s", period.label())
            }
            Self::CustomWeekly { mask } => write!(f, "weekly on {mask}"),
        }
    }
}
