//! Two-hour periods (时辰) and the hour pillar.
//!
//! 23:00–23:59 belongs to the 子 hour of the same civil day: the day pillar
//! does not advance and the hour stem is taken from that day's stem. This
//! "late Zi" convention is fixed.

use ziwei_base::{EarthlyBranch, GanZhi, HeavenlyStem};

use crate::error::CalendarError;

/// Hour branch for a civil clock hour.
pub fn hour_branch(hour: u8) -> Result<EarthlyBranch, CalendarError> {
    EarthlyBranch::from_hour(hour)
        .ok_or_else(|| CalendarError::InvalidBirthData(format!("hour {hour} outside 0..=23")))
}

/// Hour pillar from the day stem (five-rat escapement).
pub fn hour_pillar(day_stem: HeavenlyStem, hour: EarthlyBranch) -> GanZhi {
    let stem = day_stem.rat_stem().offset(hour.index() as i32);
    GanZhi { stem, branch: hour }
}
