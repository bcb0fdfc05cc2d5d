//! Error types for birth-record validation and calendar conversion.

use thiserror::Error;

/// Errors from birth validation, lunar table loading and date conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Field out of range or an impossible calendar date.
    #[error("invalid birth data: {0}")]
    InvalidBirthData(String),
    /// Date lies outside the span covered by the calendar.
    #[error("date {year}-{month:02}-{day:02} is outside the supported calendar span")]
    UnsupportedDateRange { year: i32, month: u8, day: u8 },
    /// Lunar year table is malformed.
    #[error("invalid lunar table: {0}")]
    InvalidTable(String),
    /// I/O error while reading a table file.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CalendarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for CalendarError {
    fn from(e: toml::de::Error) -> Self {
        Self::InvalidTable(e.to_string())
    }
}
