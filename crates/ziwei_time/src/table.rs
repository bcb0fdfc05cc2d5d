//! Table-driven lunar calendar.
//!
//! Each lunar year is described by the Gregorian date of its new year and
//! the lengths of its months in calendar order. Conversion is plain day
//! counting from the new-year Julian Day Number. The table is validated on
//! load: consecutive years must abut exactly, and a year has 13 months
//! exactly when it names a leap month.

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CalendarError;
use crate::julian::{gregorian_to_jdn, is_valid_date, jdn_to_gregorian};
use crate::lunar::{LunarCalendar, LunarDate, SolarDate};

/// Table shipped with the workspace (lunar years 1899–2100).
pub const BUNDLED_TABLE: &str = include_str!("../../../data/lunar_table.toml");

/// One lunar year as stored in the table file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarYearEntry {
    pub year: i32,
    /// Gregorian `[year, month, day]` of the first day of month 1.
    pub new_year: [i32; 3],
    /// Month lengths (29 or 30) in calendar order, leap month included.
    pub months: Vec<u8>,
    /// Month number the intercalary month follows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leap_month: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct TableFile {
    years: Vec<LunarYearEntry>,
}

#[derive(Debug, Clone)]
struct YearSpan {
    entry: LunarYearEntry,
    start_jdn: i64,
    days: i64,
}

impl YearSpan {
    fn end_jdn(&self) -> i64 {
        self.start_jdn + self.days
    }

    /// (month number, leap flag) of a month slot.
    fn month_at(&self, slot: usize) -> (u8, bool) {
        match self.entry.leap_month {
            Some(l) if slot == l as usize => (l, true),
            Some(l) if slot > l as usize => (slot as u8, false),
            _ => (slot as u8 + 1, false),
        }
    }

    fn slot_of(&self, month: u8, is_leap: bool) -> Option<usize> {
        match (self.entry.leap_month, is_leap) {
            (Some(l), true) if l == month => Some(month as usize),
            (_, true) => None,
            (Some(l), false) if month > l => Some(month as usize),
            _ => Some(month as usize - 1),
        }
    }
}

/// [`LunarCalendar`] backed by a validated year table.
#[derive(Debug, Clone)]
pub struct TableCalendar {
    years: Vec<YearSpan>,
}

impl TableCalendar {
    /// Build from entries in any order.
    pub fn from_entries(mut entries: Vec<LunarYearEntry>) -> Result<Self, CalendarError> {
        if entries.is_empty() {
            return Err(CalendarError::InvalidTable("table has no years".into()));
        }
        entries.sort_by_key(|e| e.year);
        let mut years: Vec<YearSpan> = Vec::with_capacity(entries.len());
        for entry in entries {
            let span = validate_entry(entry)?;
            if let Some(prev) = years.last() {
                let prev_year = prev.entry.year;
                let this_year = span.entry.year;
                if this_year == prev_year {
                    return Err(CalendarError::InvalidTable(format!(
                        "duplicate year {this_year}"
                    )));
                }
                if this_year == prev_year + 1 && span.start_jdn != prev.end_jdn() {
                    return Err(CalendarError::InvalidTable(format!(
                        "year {this_year} does not start where {prev_year} ends"
                    )));
                }
                if span.start_jdn < prev.end_jdn() {
                    return Err(CalendarError::InvalidTable(format!(
                        "year {this_year} overlaps {prev_year}"
                    )));
                }
            }
            years.push(span);
        }
        debug!(years = years.len(), "lunar table loaded");
        Ok(Self { years })
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CalendarError> {
        let file: TableFile = toml::from_str(s)?;
        Self::from_entries(file.years)
    }

    /// Load a TOML table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CalendarError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "rejected lunar table");
        })
    }

    /// The table shipped with the workspace.
    pub fn bundled() -> Result<Self, CalendarError> {
        Self::from_toml_str(BUNDLED_TABLE)
    }

    /// Number of lunar years in the table.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Whether the table has an entry for this lunar year.
    pub fn covers_year(&self, year: i32) -> bool {
        self.span_for_year(year).is_some()
    }

    /// Entry for a lunar year.
    pub fn year_entry(&self, year: i32) -> Option<&LunarYearEntry> {
        self.span_for_year(year).map(|s| &s.entry)
    }

    fn span_for_year(&self, year: i32) -> Option<&YearSpan> {
        self.years
            .binary_search_by_key(&year, |s| s.entry.year)
            .ok()
            .map(|i| &self.years[i])
    }

    fn span_for_jdn(&self, jdn: i64) -> Option<&YearSpan> {
        let i = self.years.partition_point(|s| s.start_jdn <= jdn);
        let span = self.years.get(i.checked_sub(1)?)?;
        (jdn < span.end_jdn()).then_some(span)
    }
}

fn validate_entry(entry: LunarYearEntry) -> Result<YearSpan, CalendarError> {
    let year = entry.year;
    let bad = |msg: String| CalendarError::InvalidTable(format!("year {year}: {msg}"));

    let [ny, nm, nd] = entry.new_year;
    let (Ok(nm), Ok(nd)) = (u8::try_from(nm), u8::try_from(nd)) else {
        return Err(bad("new_year out of range".into()));
    };
    if !is_valid_date(ny, nm, nd) {
        return Err(bad(format!("new_year {ny}-{nm}-{nd} is not a valid date")));
    }
    match (entry.months.len(), entry.leap_month) {
        (12, None) => {}
        (13, Some(l)) if (1..=12).contains(&l) => {}
        (13, Some(l)) => return Err(bad(format!("leap_month {l} outside 1..=12"))),
        (n, leap) => {
            return Err(bad(format!(
                "{n} months inconsistent with leap_month {leap:?}"
            )));
        }
    }
    if let Some(len) = entry.months.iter().find(|&&m| m != 29 && m != 30) {
        return Err(bad(format!("month length {len} is not 29 or 30")));
    }
    let days = entry.months.iter().map(|&m| m as i64).sum();
    Ok(YearSpan {
        start_jdn: gregorian_to_jdn(ny, nm, nd),
        days,
        entry,
    })
}

impl LunarCalendar for TableCalendar {
    fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError> {
        if !is_valid_date(date.year, date.month, date.day) {
            return Err(CalendarError::InvalidBirthData(format!(
                "{date} is not a valid Gregorian date"
            )));
        }
        let jdn = date.julian_day();
        let span = self
            .span_for_jdn(jdn)
            .ok_or(CalendarError::UnsupportedDateRange {
                year: date.year,
                month: date.month,
                day: date.day,
            })?;
        let mut offset = jdn - span.start_jdn;
        for (slot, &len) in span.entry.months.iter().enumerate() {
            let len = len as i64;
            if offset < len {
                let (month, is_leap) = span.month_at(slot);
                return Ok(LunarDate::new(
                    span.entry.year,
                    month,
                    offset as u8 + 1,
                    is_leap,
                ));
            }
            offset -= len;
        }
        // span_for_jdn guarantees jdn < end_jdn, so the loop always returns.
        Err(CalendarError::InvalidTable(format!(
            "year {} month lengths do not cover {date}",
            span.entry.year
        )))
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError> {
        let span = self
            .span_for_year(date.year)
            .ok_or(CalendarError::UnsupportedDateRange {
                year: date.year,
                month: date.month,
                day: date.day,
            })?;
        if !(1..=12).contains(&date.month) {
            return Err(CalendarError::InvalidBirthData(format!(
                "lunar month {} outside 1..=12",
                date.month
            )));
        }
        let slot = span.slot_of(date.month, date.is_leap).ok_or_else(|| {
            CalendarError::InvalidBirthData(format!(
                "lunar year {} has no leap month {}",
                date.year, date.month
            ))
        })?;
        let len = span.entry.months[slot];
        if date.day == 0 || date.day > len {
            return Err(CalendarError::InvalidBirthData(format!(
                "{date} exceeds month length {len}"
            )));
        }
        let before: i64 = span.entry.months[..slot].iter().map(|&m| m as i64).sum();
        let (year, month, day) = jdn_to_gregorian(span.start_jdn + before + date.day as i64 - 1);
        Ok(SolarDate::new(year, month, day))
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        let first = self.years.first().map_or(0, |s| s.entry.year);
        let last = self.years.last().map_or(-1, |s| s.entry.year);
        first..=last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> TableCalendar {
        TableCalendar::bundled().unwrap()
    }

    #[test]
    fn bundled_table_loads() {
        let cal = bundled();
        assert_eq!(cal.len(), 202);
        assert_eq!(cal.supported_years(), 1899..=2100);
        for year in 1900..=2100 {
            assert!(cal.covers_year(year), "{year}");
        }
        assert!(!cal.covers_year(2101));
        // Every civil date of 1900..=2100 resolves.
        let first = cal.solar_to_lunar(SolarDate::new(1900, 1, 1)).unwrap();
        assert_eq!((first.year, first.month), (1899, 12));
        let last = cal.solar_to_lunar(SolarDate::new(2100, 12, 31)).unwrap();
        assert_eq!((last.year, last.month), (2100, 12));
        let mid = cal.solar_to_lunar(SolarDate::new(2010, 6, 1)).unwrap();
        assert_eq!(mid, LunarDate::new(2010, 4, 19, false));
    }

    #[test]
    fn golden_solar_to_lunar() {
        let cal = bundled();
        let l = cal.solar_to_lunar(SolarDate::new(1990, 5, 15)).unwrap();
        assert_eq!(l, LunarDate::new(1990, 4, 21, false));
    }

    #[test]
    fn new_year_day() {
        let cal = bundled();
        let l = cal.solar_to_lunar(SolarDate::new(2024, 2, 10)).unwrap();
        assert_eq!(l, LunarDate::new(2024, 1, 1, false));
        let eve = cal.solar_to_lunar(SolarDate::new(2024, 2, 9)).unwrap();
        assert_eq!(eve.year, 2023);
        assert_eq!(eve.month, 12);
    }

    #[test]
    fn leap_month_1990() {
        // 1990 has a leap fifth month.
        let cal = bundled();
        let regular = cal.lunar_to_solar(LunarDate::new(1990, 5, 1, false)).unwrap();
        let leap = cal.lunar_to_solar(LunarDate::new(1990, 5, 1, true)).unwrap();
        assert!(leap.julian_day() > regular.julian_day());
        let back = cal.solar_to_lunar(leap).unwrap();
        assert!(back.is_leap);
        assert_eq!(back.month, 5);
    }

    #[test]
    fn missing_leap_month_rejected() {
        let cal = bundled();
        let err = cal.lunar_to_solar(LunarDate::new(1990, 4, 1, true)).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidBirthData(_)));
    }

    #[test]
    fn outside_span_is_unsupported() {
        let cal = bundled();
        let err = cal.solar_to_lunar(SolarDate::new(1850, 6, 1)).unwrap_err();
        assert!(matches!(err, CalendarError::UnsupportedDateRange { .. }));
        let err = cal.lunar_to_solar(LunarDate::new(2101, 1, 1, false)).unwrap_err();
        assert!(matches!(err, CalendarError::UnsupportedDateRange { .. }));
    }

    #[test]
    fn gap_is_unsupported() {
        let full = bundled();
        let entries = [1990, 1992].map(|y| full.year_entry(y).unwrap().clone());
        let cal = TableCalendar::from_entries(entries.to_vec()).unwrap();
        assert!(cal.solar_to_lunar(SolarDate::new(1990, 5, 15)).is_ok());
        let err = cal.solar_to_lunar(SolarDate::new(1991, 6, 1)).unwrap_err();
        assert!(matches!(err, CalendarError::UnsupportedDateRange { .. }));
        let err = cal.lunar_to_solar(LunarDate::new(1991, 1, 1, false)).unwrap_err();
        assert!(matches!(err, CalendarError::UnsupportedDateRange { .. }));
    }

    #[test]
    fn rejects_wrong_month_count() {
        let entry = LunarYearEntry {
            year: 2000,
            new_year: [2000, 2, 5],
            months: vec![30; 13],
            leap_month: None,
        };
        assert!(matches!(
            TableCalendar::from_entries(vec![entry]),
            Err(CalendarError::InvalidTable(_))
        ));
    }

    #[test]
    fn rejects_non_contiguous_years() {
        let a = LunarYearEntry {
            year: 2000,
            new_year: [2000, 2, 5],
            months: vec![30; 12],
            leap_month: None,
        };
        let b = LunarYearEntry {
            year: 2001,
            new_year: [2001, 1, 1],
            months: vec![29; 12],
            leap_month: None,
        };
        assert!(matches!(
            TableCalendar::from_entries(vec![a, b]),
            Err(CalendarError::InvalidTable(_))
        ));
    }

    #[test]
    fn rejects_bad_toml() {
        assert!(matches!(
            TableCalendar::from_toml_str("years = 3"),
            Err(CalendarError::InvalidTable(_))
        ));
    }
}
