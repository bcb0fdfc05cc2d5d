//! Birth-record validation and calendar normalization for ZiWei charts.
//!
//! This crate provides:
//! - [`BirthRecord`] input validation (Gregorian or lunar, 1900–2100)
//! - Integer Julian Day arithmetic for the Gregorian calendar
//! - The [`LunarCalendar`] conversion trait and a table-driven implementation
//! - [`normalize`]: lunar date plus year/month/day/hour GanZhi pillars
//!
//! The astronomical derivation of the lunar calendar is out of scope; the
//! table is data supplied by the caller (the 1900–2100 table ships in `data/`).

pub mod birth;
pub mod error;
pub mod hour;
pub mod julian;
pub mod lunar;
pub mod normalize;
pub mod table;

pub use birth::{BirthRecord, Gender, MAX_BIRTH_YEAR, MIN_BIRTH_YEAR};
pub use error::CalendarError;
pub use hour::{hour_branch, hour_pillar};
pub use julian::{gregorian_to_jdn, is_valid_date, jdn_to_gregorian};
pub use lunar::{LunarCalendar, LunarDate, SolarDate};
pub use normalize::{NormalizedBirth, month_pillar, normalize};
pub use table::{BUNDLED_TABLE, LunarYearEntry, TableCalendar};
