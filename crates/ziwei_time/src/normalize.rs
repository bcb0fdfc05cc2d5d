//! Birth normalization: calendar conversion plus the four pillars.
//!
//! The month pillar follows the lunar month (正月 = 寅) rather than solar
//! terms; an intercalary month takes the pillar of the month it follows.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ziwei_base::{EarthlyBranch, GanZhi, HeavenlyStem};

use crate::birth::BirthRecord;
use crate::error::CalendarError;
use crate::hour::{hour_branch, hour_pillar};
use crate::lunar::{LunarCalendar, LunarDate, SolarDate};

/// Birth moment resolved to both calendars and the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedBirth {
    pub record: BirthRecord,
    pub solar: SolarDate,
    pub lunar: LunarDate,
    pub year_pillar: GanZhi,
    pub month_pillar: GanZhi,
    pub day_pillar: GanZhi,
    pub hour_pillar: GanZhi,
    pub hour_branch: EarthlyBranch,
}

impl NormalizedBirth {
    pub fn year_stem(&self) -> HeavenlyStem {
        self.year_pillar.stem
    }

    pub fn year_branch(&self) -> EarthlyBranch {
        self.year_pillar.branch
    }

    /// The four pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [GanZhi; 4] {
        [
            self.year_pillar,
            self.month_pillar,
            self.day_pillar,
            self.hour_pillar,
        ]
    }
}

/// Month pillar for a lunar month (1–12) in a year with `year_stem`.
pub fn month_pillar(year_stem: HeavenlyStem, lunar_month: u8) -> Option<GanZhi> {
    let branch = EarthlyBranch::from_lunar_month(lunar_month)?;
    let stem = year_stem.tiger_stem().offset(lunar_month as i32 - 1);
    Some(GanZhi { stem, branch })
}

/// Validate a birth record and resolve it through `calendar`.
pub fn normalize<C: LunarCalendar + ?Sized>(
    record: &BirthRecord,
    calendar: &C,
) -> Result<NormalizedBirth, CalendarError> {
    record.validate()?;

    let (solar, lunar) = if record.is_lunar {
        let lunar = LunarDate::new(record.year, record.month, record.day, record.is_leap_month);
        (calendar.lunar_to_solar(lunar)?, lunar)
    } else {
        let solar = SolarDate::new(record.year, record.month, record.day);
        (solar, calendar.solar_to_lunar(solar)?)
    };

    let year_pillar = GanZhi::from_year(lunar.year);
    let month_pillar = month_pillar(year_pillar.stem, lunar.month).ok_or_else(|| {
        CalendarError::InvalidBirthData(format!("lunar month {} outside 1..=12", lunar.month))
    })?;
    let day_pillar = GanZhi::from_julian_day(solar.julian_day());
    let hour_branch = hour_branch(record.hour)?;
    let hour_pillar = hour_pillar(day_pillar.stem, hour_branch);

    debug!(%solar, %lunar, year = %year_pillar, day = %day_pillar, "normalized birth");

    Ok(NormalizedBirth {
        record: *record,
        solar,
        lunar,
        year_pillar,
        month_pillar,
        day_pillar,
        hour_pillar,
        hour_branch,
    })
}
