//! Palace frame: Life/Body palaces, palace names and palace stems.
//!
//! The month palace starts at 寅 for the first lunar month and moves forward.
//! From there the Life Palace is found by counting the hour backward, the
//! Body Palace by counting it forward.

use serde::Serialize;
use ziwei_base::{ALL_BRANCHES, EarthlyBranch, HeavenlyStem, PalaceName, palace_stem};
use ziwei_time::CalendarError;

use crate::error::ChartError;

/// Natal palace frame derived from lunar month, hour and year stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PalaceFrame {
    pub life: EarthlyBranch,
    pub body: EarthlyBranch,
    pub year_stem: HeavenlyStem,
    /// Palace whose stem repeats the year stem (来因宫).
    pub laiyin: EarthlyBranch,
    /// Body Palace shares the Life Palace (命身同宫).
    pub body_in_life: bool,
}

impl PalaceFrame {
    pub fn build(
        lunar_month: u8,
        hour: EarthlyBranch,
        year_stem: HeavenlyStem,
    ) -> Result<Self, ChartError> {
        let month_palace = EarthlyBranch::from_lunar_month(lunar_month).ok_or_else(|| {
            CalendarError::InvalidBirthData(format!("lunar month {lunar_month} outside 1..=12"))
        })?;
        let h = hour.index() as i32;
        let life = month_palace.offset(-h);
        let body = month_palace.offset(h);
        let laiyin = laiyin_palace(year_stem).ok_or_else(|| {
            ChartError::InternalTableGap(format!("no palace stem matches year stem {year_stem}"))
        })?;
        Ok(Self {
            life,
            body,
            year_stem,
            laiyin,
            body_in_life: life == body,
        })
    }

    /// Canonical name of the palace at `branch`.
    pub fn name_of(&self, branch: EarthlyBranch) -> PalaceName {
        PalaceName::at(self.life, branch)
    }

    /// Branch carrying `name`.
    pub fn branch_of(&self, name: PalaceName) -> EarthlyBranch {
        name.branch_in(self.life)
    }

    /// Palace stem at `branch`.
    pub fn stem_of(&self, branch: EarthlyBranch) -> HeavenlyStem {
        palace_stem(self.year_stem, branch)
    }

    pub fn body_in_life_palace(&self) -> bool {
        self.body_in_life
    }

    /// Name of the palace hosting the Body Palace.
    pub fn body_palace_name(&self) -> PalaceName {
        self.name_of(self.body)
    }
}

/// Palace, other than 子 and 丑, whose stem equals the year stem.
fn laiyin_palace(year_stem: HeavenlyStem) -> Option<EarthlyBranch> {
    ALL_BRANCHES
        .iter()
        .copied()
        .filter(|b| !matches!(b, EarthlyBranch::Zi | EarthlyBranch::Chou))
        .find(|&b| palace_stem(year_stem, b) == year_stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::ALL_STEMS;

    #[test]
    fn golden_frame() {
        let f = PalaceFrame::build(4, EarthlyBranch::Chen, HeavenlyStem::Geng).unwrap();
        assert_eq!(f.life, EarthlyBranch::Chou);
        assert_eq!(f.body, EarthlyBranch::You);
        assert_eq!(f.laiyin, EarthlyBranch::Chen);
        assert_eq!(f.body_palace_name(), PalaceName::Wealth);
        assert_eq!(f.name_of(EarthlyBranch::Yin), PalaceName::Parents);
        assert_eq!(f.stem_of(EarthlyBranch::Chou), HeavenlyStem::Ji);
    }

    #[test]
    fn zi_hour_puts_body_in_life() {
        for month in 1..=12 {
            let f = PalaceFrame::build(month, EarthlyBranch::Zi, HeavenlyStem::Jia).unwrap();
            assert!(f.body_in_life_palace());
        }
        let f = PalaceFrame::build(1, EarthlyBranch::Wu, HeavenlyStem::Jia).unwrap();
        assert!(f.body_in_life_palace());
        assert_eq!(f.life, EarthlyBranch::Shen);
    }

    #[test]
    fn body_in_life_is_serialized() {
        let f = PalaceFrame::build(3, EarthlyBranch::Zi, HeavenlyStem::Bing).unwrap();
        let json = serde_json::to_value(f).unwrap();
        assert_eq!(json["body_in_life"], serde_json::Value::Bool(true));
        let f = PalaceFrame::build(4, EarthlyBranch::Chen, HeavenlyStem::Geng).unwrap();
        let json = serde_json::to_value(f).unwrap();
        assert_eq!(json["body_in_life"], serde_json::Value::Bool(false));
    }

    #[test]
    fn laiyin_exists_for_every_stem() {
        for s in ALL_STEMS {
            let b = laiyin_palace(s).unwrap();
            assert_ne!(b, EarthlyBranch::Zi);
            assert_ne!(b, EarthlyBranch::Chou);
            assert_eq!(palace_stem(s, b), s);
        }
    }

    #[test]
    fn rejects_month_zero() {
        let err = PalaceFrame::build(0, EarthlyBranch::Zi, HeavenlyStem::Jia).unwrap_err();
        assert!(err.is_invalid_birth_data());
    }
}
