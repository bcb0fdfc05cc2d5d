//! Star → branch placement map.

use ziwei_base::{ALL_STARS, EarthlyBranch, Star};

/// Branch of every placed star. Each star occupies at most one branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StarPlacement {
    slots: [Option<EarthlyBranch>; ALL_STARS.len()],
}

impl Default for StarPlacement {
    fn default() -> Self {
        Self {
            slots: [None; ALL_STARS.len()],
        }
    }
}

impl StarPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `star`, replacing any earlier branch.
    pub fn place(&mut self, star: Star, branch: EarthlyBranch) {
        self.slots[star.index() as usize] = Some(branch);
    }

    pub fn extend(&mut self, placed: impl IntoIterator<Item = (Star, EarthlyBranch)>) {
        for (star, branch) in placed {
            self.place(star, branch);
        }
    }

    pub fn branch_of(&self, star: Star) -> Option<EarthlyBranch> {
        self.slots[star.index() as usize]
    }

    /// Stars in `branch`, in catalogue order.
    pub fn stars_in(&self, branch: EarthlyBranch) -> impl Iterator<Item = Star> + '_ {
        self.iter().filter(move |&(_, b)| b == branch).map(|(s, _)| s)
    }

    /// Main stars in `branch`.
    pub fn main_stars_in(&self, branch: EarthlyBranch) -> impl Iterator<Item = Star> + '_ {
        self.stars_in(branch).filter(|s| s.is_main())
    }

    /// All placed stars with their branches, in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (Star, EarthlyBranch)> + '_ {
        ALL_STARS
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(&s, b)| b.map(|b| (s, b)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|b| b.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
