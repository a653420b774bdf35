//! `TimeUnit` — the calendar and clock units calends can add to a date.

use serde::{Deserialize, Serialize};

/// A unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Calendar years (12 months).
    Years,
    /// Calendar months.
    Months,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar days.
    Days,
    /// Hours.
    Hours,
    /// Minutes.
    Minutes,
    /// Seconds.
    Seconds,
}

impl TimeUnit {
    /// Units in descending order of magnitude.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Years,
        TimeUnit::Months,
        TimeUnit::Weeks,
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    /// Approximate length in seconds (year = 365 days, month = 30 days).
    pub fn approx_seconds(&self) -> i64 {
        match self {
            TimeUnit::Years => 365 * 24 * 3600,
            TimeUnit::Months => 30 * 24 * 3600,
            TimeUnit::Weeks => 7 * 24 * 3600,
            TimeUnit::Days => 24 * 3600,
            TimeUnit::Hours => 3600,
            TimeUnit::Minutes => 60,
            TimeUnit::Seconds => 1,
        }
    }

    /// Short Chinese unit label used in offset descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Years => "年",
            TimeUnit::Months => "月",
            TimeUnit::Weeks => "周",
            TimeUnit::Days => "天",
            TimeUnit::Hours => "小时",
            TimeUnit::Minutes => "分钟",
            TimeUnit::Seconds => "秒",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Years => write!(f, "Year(s)"),
            TimeUnit::Months => write!(f, "Month(s)"),
            TimeUnit::Weeks => write!(f, "Week(s)"),
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Hours => write!(f, "Hour(s)"),
            TimeUnit::Minutes => write!(f, "Minute(s)"),
            TimeUnit::Seconds => write!(f, "Second(s)"),
        }
    }
}
