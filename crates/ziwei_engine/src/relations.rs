//! Structural relations between palaces (三方四正).
//!
//! Only facts are reported here: which palace faces which, which form a
//! triangle, whether a palace holds a main star. Reading meaning into an
//! empty palace is left to interpretation layers.

use serde::Serialize;
use ziwei_base::{EarthlyBranch, Star};

use crate::frame::PalaceFrame;
use crate::placement::StarPlacement;

/// Relations of one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PalaceRelations {
    pub branch: EarthlyBranch,
    /// Palace directly across (对宫).
    pub opposite: EarthlyBranch,
    /// Triangle allies four steps either way (三合).
    pub trines: [EarthlyBranch; 2],
    pub has_main_star: bool,
}

impl PalaceRelations {
    /// The palace plus its opposite and trines (三方四正).
    pub fn four_directions(&self) -> [EarthlyBranch; 4] {
        [self.branch, self.opposite, self.trines[0], self.trines[1]]
    }
}

/// Facts about a Life Palace with no main star (命无正曜).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmptyLifePalace {
    pub opposite: EarthlyBranch,
    /// Main stars in the opposite palace.
    pub opposite_main_stars: Vec<Star>,
}

pub fn palace_relations(branch: EarthlyBranch, placement: &StarPlacement) -> PalaceRelations {
    PalaceRelations {
        branch,
        opposite: branch.opposite(),
        trines: branch.trines(),
        has_main_star: placement.main_stars_in(branch).next().is_some(),
    }
}

/// `Some` when the Life Palace holds no main star.
pub fn empty_life_palace(frame: &PalaceFrame, placement: &StarPlacement) -> Option<EmptyLifePalace> {
    if placement.main_stars_in(frame.life).next().is_some() {
        return None;
    }
    let opposite = frame.life.opposite();
    Some(EmptyLifePalace {
        opposite,
        opposite_main_stars: placement.main_stars_in(opposite).collect(),
    })
}
