//! Stem-Branch pairs (干支) and the sexagenary cycle.
//!
//! Stems and branches advance together, so only pairs of equal parity occur
//! and the combined cycle has length 60. The reference year is CE 1984 = 甲子
//! (cycle index 0); day pillars use JDN 2451545 (2000-01-01) = 戊午.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::FiveElement;
use crate::stem::HeavenlyStem;

/// Year whose pillar is 甲子.
pub const GANZHI_EPOCH_YEAR: i32 = 1984;

/// Offset added to a Julian Day Number before reducing mod 60.
pub const GANZHI_JDN_OFFSET: i64 = 49;

const NAYIN: [FiveElement; 30] = {
    use FiveElement::*;
    [
        Metal, Fire, Wood, Earth, Metal, Fire, Water, Earth, Metal, Wood,
        Water, Earth, Fire, Wood, Water, Metal, Fire, Wood, Earth, Metal,
        Fire, Water, Earth, Metal, Wood, Water, Earth, Fire, Wood, Water,
    ]
};

/// One position of the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanZhi {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl GanZhi {
    /// Pair a stem with a branch. `None` when the parities differ.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Option<Self> {
        if stem.index() % 2 != branch.index() % 2 {
            return None;
        }
        Some(Self { stem, branch })
    }

    /// Pair at a 0-based cycle index (0 = 甲子), wrapped into 0..60.
    pub fn from_cycle_index(i: i64) -> Self {
        let i = i.rem_euclid(60);
        Self {
            stem: HeavenlyStem::wrapping(i),
            branch: EarthlyBranch::wrapping(i),
        }
    }

    /// 0-based cycle index (甲子=0 .. 癸亥=59).
    pub fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Year pillar of a (lunar) year.
    pub fn from_year(year: i32) -> Self {
        Self::from_cycle_index(year as i64 - GANZHI_EPOCH_YEAR as i64)
    }

    /// Day pillar of a Julian Day Number.
    pub fn from_julian_day(jdn: i64) -> Self {
        Self::from_cycle_index(jdn + GANZHI_JDN_OFFSET)
    }

    /// Pair `steps` positions along the cycle.
    pub fn offset(self, steps: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + steps)
    }

    /// Na Yin (纳音) element. Consecutive cycle positions share one entry.
    pub fn nayin(self) -> FiveElement {
        NAYIN[(self.cycle_index() / 2) as usize]
    }

    /// Chinese two-character name, e.g. "庚午".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }

    /// Parse a two-character name such as "甲子".
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        let stem = HeavenlyStem::parse(&chars.next()?.to_string())?;
        let branch = EarthlyBranch::parse(&chars.next()?.to_string())?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(stem, branch)
    }
}

impl std::fmt::Display for GanZhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}
