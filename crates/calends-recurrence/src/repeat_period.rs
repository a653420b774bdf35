//! `RepeatPeriod` and `RecurrenceType` — the recurrence granularity enums.
//!
//! Both carry stable integer codes so that rules persisted by a host
//! application keep their meaning across releases.

use serde::{Deserialize, Serialize};

use calends_core::errors::{Error, Result};
use calends_time::TimeUnit;

/// The unit a standard recurrence repeats in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatPeriod {
    /// Every `n` days.
    Daily = 0,
    /// Every `n` weeks.
    Weekly = 1,
    /// Every `n` calendar months.
    Monthly = 2,
    /// Every `n` calendar years.
    Yearly = 3,
}

impl RepeatPeriod {
    /// All periods in code order.
    pub const ALL: [RepeatPeriod; 4] = [
        RepeatPeriod::Daily,
        RepeatPeriod::Weekly,
        RepeatPeriod::Monthly,
        RepeatPeriod::Yearly,
    ];

    /// Stable integer code (Daily = 0 … Yearly = 3).
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Unit label for pickers (`"day"`, `"week"`, `"month"`, `"year"`).
    pub fn label(&self) -> &'static str {
        match self {
            RepeatPeriod::Daily => "day",
            RepeatPeriod::Weekly => "week",
            RepeatPeriod::Monthly => "month",
            RepeatPeriod::Yearly => "year",
        }
    }

    /// The calendar unit one period step advances by.
    pub fn time_unit(&self) -> TimeUnit {
        match self {
            RepeatPeriod::Daily => TimeUnit::Days,
            RepeatPeriod::Weekly => TimeUnit::Weeks,
            RepeatPeriod::Monthly => TimeUnit::Months,
            RepeatPeriod::Yearly => TimeUnit::Years,
        }
    }
}

impl TryFrom<i32> for RepeatPeriod {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown repeat period code {code}")))
    }
}

impl std::fmt::Display for RepeatPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RepeatPeriod::Daily => "Daily",
            RepeatPeriod::Weekly => "Weekly",
            RepeatPeriod::Monthly => "Monthly",
            RepeatPeriod::Yearly => "Yearly",
        };
        write!(f, "{s}")
    }
}

/// Which recurrence algorithm applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceType {
    /// Once per period of `interval` units.
    SingleCycle = 1,
    /// On selected weekdays, possibly several times a week.
    CustomWeekly = 2,
}

impl RecurrenceType {
    /// Stable integer code (SingleCycle = 1, CustomWeekly = 2).
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for RecurrenceType {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            1 => Ok(RecurrenceType::SingleCycle),
            2 => Ok(RecurrenceType::CustomWeekly),
            _ => Err(Error::InvalidArgument(format!(
                "unknown recurrence type code {code}"
            ))),
        }
    }
}
