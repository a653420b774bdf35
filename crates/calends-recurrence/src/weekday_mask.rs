//! `WeekdayMask` — an 8-bit set of weekdays.
//!
//! Bit `i` stands for the weekday with Monday-first ordinal `i + 1`
//! (Monday = bit 0 … Sunday = bit 6).  Bit 7 has no weekday and is
//! ignored when matching.

use serde::{Deserialize, Serialize};

use calends_time::Weekday;

/// A set of weekdays packed into one byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdayMask(u8);

impl WeekdayMask {
    /// Bits 0–6.
    pub const WEEKDAY_BITS: u8 = 0b0111_1111;

    /// No weekday selected.
    pub const NONE: WeekdayMask = WeekdayMask(0);

    /// Every weekday selected.
    pub const EVERY_DAY: WeekdayMask = WeekdayMask(Self::WEEKDAY_BITS);

    /// Monday through Friday.
    pub const WORKDAYS: WeekdayMask = WeekdayMask(0b0001_1111);

    /// Saturday and Sunday.
    pub const WEEKEND: WeekdayMask = WeekdayMask(0b0110_0000);

    /// Wrap a raw byte as stored by a host application.
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Build a mask from a list of weekdays.
    pub fn from_weekdays(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self(days.into_iter().fold(0, |bits, w| bits | w.mask_bit()))
    }

    /// The raw byte, including bit 7.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Only the weekday bits (0–6).
    pub const fn weekday_bits(self) -> u8 {
        self.0 & Self::WEEKDAY_BITS
    }

    /// Return `true` if no weekday is selected.
    pub const fn is_empty(self) -> bool {
        self.weekday_bits() == 0
    }

    /// Return `true` if `day` is selected.
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & day.mask_bit() != 0
    }

    /// A copy with `day` added.
    #[must_use]
    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | day.mask_bit())
    }

    /// Selected weekdays, Monday first.
    pub fn weekdays(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |w| self.contains(*w))
    }
}

impl From<u8> for WeekdayMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<WeekdayMask> for u8 {
    fn from(mask: WeekdayMask) -> u8 {
        mask.0
    }
}

impl FromIterator<Weekday> for WeekdayMask {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::from_weekdays(iter)
    }
}

impl std::fmt::Display for WeekdayMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.weekdays().map(|w| w.to_string()).collect();
        if names.is_empty() {
            return write!(f, "(none)");
        }
        write!(f, "{}", names.join(", "))
    }
}
