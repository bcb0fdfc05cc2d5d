//! The twelve palaces (十二宫) and their fixed rotation.
//!
//! Palace names run backward through the branches starting at the Life
//! Palace: the branch one step before Life is Siblings, two steps before is
//! Spouse, and so on. Overlay frames (major period, fleeting year) reuse the
//! same rotation anchored at a different branch.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Canonical palace names in rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PalaceName {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All 12 palace names in rotation order (0 = Life).
pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Fortune,
    PalaceName::Parents,
];

impl PalaceName {
    /// Chinese name, e.g. "命宫".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    /// Single-character abbreviation used in overlay labels ("大命", "流财").
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Life => "命",
            Self::Siblings => "兄",
            Self::Spouse => "夫",
            Self::Children => "子",
            Self::Wealth => "财",
            Self::Health => "疾",
            Self::Travel => "迁",
            Self::Friends => "友",
            Self::Career => "官",
            Self::Property => "田",
            Self::Fortune => "福",
            Self::Parents => "父",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Siblings => "Siblings",
            Self::Spouse => "Spouse",
            Self::Children => "Children",
            Self::Wealth => "Wealth",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Friends => "Friends",
            Self::Career => "Career",
            Self::Property => "Property",
            Self::Fortune => "Fortune",
            Self::Parents => "Parents",
        }
    }

    /// 0-based rotation index (Life=0 .. Parents=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Life => 0,
            Self::Siblings => 1,
            Self::Spouse => 2,
            Self::Children => 3,
            Self::Wealth => 4,
            Self::Health => 5,
            Self::Travel => 6,
            Self::Friends => 7,
            Self::Career => 8,
            Self::Property => 9,
            Self::Fortune => 10,
            Self::Parents => 11,
        }
    }

    pub fn from_index(i: u8) -> Option<Self> {
        ALL_PALACE_NAMES.get(i as usize).copied()
    }

    /// Name of `branch` in a frame whose Life Palace sits at `anchor`.
    pub fn at(anchor: EarthlyBranch, branch: EarthlyBranch) -> Self {
        ALL_PALACE_NAMES[branch.steps_to(anchor) as usize]
    }

    /// Branch carrying this name in a frame whose Life Palace sits at `anchor`.
    pub fn branch_in(self, anchor: EarthlyBranch) -> EarthlyBranch {
        anchor.offset(-(self.index() as i32))
    }
}

impl std::fmt::Display for PalaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stem of the palace at `branch` for a given year stem (宫干).
///
/// Five-tiger escapement starting at 寅 and moving forward; 子 and 丑 close
/// the cycle and so repeat the stems of 寅 and 卯.
pub fn palace_stem(year_stem: HeavenlyStem, branch: EarthlyBranch) -> HeavenlyStem {
    year_stem
        .tiger_stem()
        .offset(EarthlyBranch::Yin.steps_to(branch) as i32)
}
