//! Error types for chart assembly.

use thiserror::Error;
use ziwei_time::CalendarError;

/// Errors from chart assembly and overlay selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth record rejected or outside the calendar span.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// A lookup table failed to cover a value from its own domain.
    #[error("internal table gap: {0}")]
    InternalTableGap(String),
    /// Major-period index or fleeting year cannot be selected for this chart.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

impl ChartError {
    /// True for errors caused by the caller's birth data.
    pub fn is_invalid_birth_data(&self) -> bool {
        matches!(self, Self::Calendar(CalendarError::InvalidBirthData(_)))
    }

    /// True when the date lies outside the calendar span.
    pub fn is_unsupported_range(&self) -> bool {
        matches!(
            self,
            Self::Calendar(CalendarError::UnsupportedDateRange { .. })
        )
    }
}
