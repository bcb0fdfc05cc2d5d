//! Service-level error type.

use thiserror::Error;
use ziwei_engine::ChartError;
use ziwei_time::CalendarError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ZiweiError {
    /// Configuration rejected by [`ServiceConfig::validate`](crate::ServiceConfig::validate).
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Configuration file could not be read or parsed.
    #[error("config file: {0}")]
    ConfigFile(String),
    #[error(transparent)]
    Chart(#[from] ChartError),
}

impl From<CalendarError> for ZiweiError {
    fn from(e: CalendarError) -> Self {
        Self::Chart(ChartError::Calendar(e))
    }
}
