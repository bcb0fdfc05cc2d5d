//! Birth record input and field validation.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::julian::is_valid_date;

/// Earliest accepted civil year.
pub const MIN_BIRTH_YEAR: i32 = 1900;
/// Latest accepted civil year.
pub const MAX_BIRTH_YEAR: i32 = 2100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    /// Accepts "male"/"female", "m"/"f" (any case) and "男"/"女".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Some(Self::Male),
            "female" | "f" | "女" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Birth moment as supplied by the caller.
///
/// `year`/`month`/`day` are Gregorian when `is_lunar` is false, otherwise a
/// lunar date whose month is flagged intercalary by `is_leap_month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthRecord {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    /// Civil clock hour, 0–23.
    pub hour: u8,
    pub is_lunar: bool,
    #[serde(default)]
    pub is_leap_month: bool,
    pub gender: Gender,
}

impl BirthRecord {
    /// Gregorian birth record.
    pub fn solar(year: i32, month: u8, day: u8, hour: u8, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            is_lunar: false,
            is_leap_month: false,
            gender,
        }
    }

    /// Lunar birth record.
    pub fn lunar(
        year: i32,
        month: u8,
        day: u8,
        is_leap_month: bool,
        hour: u8,
        gender: Gender,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            is_lunar: true,
            is_leap_month,
            gender,
        }
    }

    /// Check field ranges. Lunar day validity against actual month length is
    /// left to the calendar.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&self.year) {
            return Err(CalendarError::InvalidBirthData(format!(
                "year {} outside {MIN_BIRTH_YEAR}..={MAX_BIRTH_YEAR}",
                self.year
            )));
        }
        if !(1..=12).contains(&self.month) {
            return Err(CalendarError::InvalidBirthData(format!(
                "month {} outside 1..=12",
                self.month
            )));
        }
        if self.hour > 23 {
            return Err(CalendarError::InvalidBirthData(format!(
                "hour {} outside 0..=23",
                self.hour
            )));
        }
        if self.is_lunar {
            if !(1..=30).contains(&self.day) {
                return Err(CalendarError::InvalidBirthData(format!(
                    "lunar day {} outside 1..=30",
                    self.day
                )));
            }
        } else {
            if self.is_leap_month {
                return Err(CalendarError::InvalidBirthData(
                    "leap month flag requires a lunar date".into(),
                ));
            }
            if !is_valid_date(self.year, self.month, self.day) {
                return Err(CalendarError::InvalidBirthData(format!(
                    "{}-{:02}-{:02} is not a valid Gregorian date",
                    self.year, self.month, self.day
                )));
            }
        }
        Ok(())
    }
}
