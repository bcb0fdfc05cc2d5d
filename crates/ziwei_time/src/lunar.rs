//! Solar/lunar date types and the calendar conversion seam.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::julian::gregorian_to_jdn;

/// Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl SolarDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn julian_day(&self) -> i64 {
        gregorian_to_jdn(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Chinese lunisolar date. `year` is the lunar year that began at the
/// preceding lunar new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub is_leap: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u8, day: u8, is_leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap,
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap { "闰" } else { "" };
        write!(f, "{}年{}{}月{}日", self.year, leap, self.month, self.day)
    }
}

/// Solar↔lunar conversion supplied to the normalizer.
///
/// Implementations must be pure: the same input always maps to the same
/// output. Dates outside the implementation's span return
/// [`CalendarError::UnsupportedDateRange`].
pub trait LunarCalendar: Send + Sync {
    fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError>;

    fn lunar_to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError>;

    /// Lunar years the calendar can convert.
    fn supported_years(&self) -> RangeInclusive<i32>;
}
