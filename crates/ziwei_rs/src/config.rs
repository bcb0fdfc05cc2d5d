//! Service configuration, constructible in code or loaded from TOML.
//!
//! ```toml
//! cache_capacity = 512
//! calendar_table = "data/lunar_table.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ZiweiError;

/// Default number of cached chart views.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

/// Startup configuration for [`ChartService`](crate::ChartService).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Lunar table file. `None` uses the table compiled into `ziwei_time`.
    #[serde(default)]
    pub calendar_table: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            calendar_table: None,
        }
    }
}

impl ServiceConfig {
    pub fn with_capacity(cache_capacity: usize) -> Self {
        Self {
            cache_capacity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ZiweiError> {
        if self.cache_capacity == 0 {
            return Err(ZiweiError::InvalidConfig(
                "cache_capacity must be greater than zero",
            ));
        }
        if matches!(&self.calendar_table, Some(path) if path.as_os_str().is_empty()) {
            return Err(ZiweiError::InvalidConfig(
                "calendar_table must not be an empty path",
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ZiweiError> {
        let config: Self = toml::from_str(s)
            .map_err(|e| ZiweiError::ConfigFile(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ZiweiError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ZiweiError::ConfigFile(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }
}
