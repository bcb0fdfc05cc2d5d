//! Major periods (大限).
//!
//! Twelve ten-year periods walk the palaces starting at the Life Palace. The
//! first begins at the bureau number as nominal age. The walk runs forward
//! for Yang-stem males and Yin-stem females, backward otherwise. Each
//! period's GanZhi is the palace stem plus branch of the palace it occupies,
//! and its stem drives a separate Sihua layer.

use serde::Serialize;
use ziwei_base::{EarthlyBranch, FiveElementsBureau, GanZhi, HeavenlyStem};
use ziwei_time::Gender;

use crate::error::ChartError;
use crate::frame::PalaceFrame;
use crate::placement::StarPlacement;
use crate::sihua::{SihuaLayer, resolve_sihua};

/// Number of major periods in a chart.
pub const MAJOR_PERIOD_COUNT: usize = 12;

/// Years per major period.
pub const YEARS_PER_PERIOD: u16 = 10;

/// Rotation direction of the major periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed branch step.
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Backward => "逆行",
        }
    }
}

/// Forward for (Yang stem, male) and (Yin stem, female).
pub const fn period_direction(year_stem: HeavenlyStem, gender: Gender) -> Direction {
    match (year_stem.is_yang(), gender) {
        (true, Gender::Male) | (false, Gender::Female) => Direction::Forward,
        (true, Gender::Female) | (false, Gender::Male) => Direction::Backward,
    }
}

/// One ten-year period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MajorPeriod {
    /// 0-based order, 0 = the period on the Life Palace.
    pub index: u8,
    /// First nominal age (inclusive).
    pub start_age: u16,
    /// Last nominal age (inclusive).
    pub end_age: u16,
    pub branch: EarthlyBranch,
    pub ganzhi: GanZhi,
    pub sihua: SihuaLayer,
}

impl MajorPeriod {
    pub fn contains_age(&self, age: u16) -> bool {
        (self.start_age..=self.end_age).contains(&age)
    }
}

/// All twelve major periods in order.
pub fn major_periods(
    frame: &PalaceFrame,
    bureau: FiveElementsBureau,
    direction: Direction,
    placement: &StarPlacement,
) -> Result<Vec<MajorPeriod>, ChartError> {
    let mut out = Vec::with_capacity(MAJOR_PERIOD_COUNT);
    for k in 0..MAJOR_PERIOD_COUNT as u8 {
        let branch = frame.life.offset(direction.step() * k as i32);
        let stem = frame.stem_of(branch);
        let ganzhi = GanZhi::new(stem, branch).ok_or_else(|| {
            ChartError::InternalTableGap(format!("palace stem {stem} cannot pair with {branch}"))
        })?;
        let start_age = bureau.number() as u16 + YEARS_PER_PERIOD * k as u16;
        out.push(MajorPeriod {
            index: k,
            start_age,
            end_age: start_age + YEARS_PER_PERIOD - 1,
            branch,
            ganzhi,
            sihua: resolve_sihua(stem, placement, frame)?,
        });
    }
    Ok(out)
}
