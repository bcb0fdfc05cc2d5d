//! Cached chart service for the ZiWei Dou Shu engine.
//!
//! This crate provides:
//! - [`ServiceConfig`]: cache capacity and lunar table location, loadable from TOML
//! - [`ResultCache`]: bounded LRU of `Arc`-shared chart views keyed by [`ChartKey`]
//! - [`ChartService`]: `Send + Sync` facade combining a calendar with the cache
//!
//! ```rust,ignore
//! use ziwei_rs::*;
//!
//! let service = ChartService::new(&ServiceConfig::default())?;
//! let record = BirthRecord::solar(1990, 5, 15, 7, Gender::Male);
//! let chart = service.chart(&record)?;
//! assert_eq!(chart.bureau, FiveElementsBureau::Fire6);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod service;

pub use cache::{CacheStats, ChartKey, ResultCache};
pub use config::{DEFAULT_CACHE_CAPACITY, ServiceConfig};
pub use error::ZiweiError;
pub use service::ChartService;

// Re-export the types callers need so `use ziwei_rs::*` is enough.
pub use ziwei_base::{
    Brightness, EarthlyBranch, FiveElementsBureau, GanZhi, HeavenlyStem, PalaceName, Star,
    Transformation,
};
pub use ziwei_engine::{
    Chart, ChartError, ChartView, Direction, FleetingYear, MajorPeriod, Palace, PeriodView,
    Selection, SihuaLayer, StarInfo,
};
pub use ziwei_time::{BirthRecord, CalendarError, Gender, LunarCalendar, LunarDate, TableCalendar};
