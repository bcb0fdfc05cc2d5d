//! Chart assembly.
//!
//! Composes normalization, the palace frame, the bureau, star placement,
//! the natal Sihua layer, major periods and palace relations into one
//! immutable [`Chart`]. Assembly is a pure function of the birth record and
//! the calendar data.

use serde::Serialize;
use tracing::debug;
use ziwei_base::{
    ALL_BRANCHES, Brightness, EarthlyBranch, FiveElementsBureau, HeavenlyStem, PalaceName, Star,
    StarCategory, Transformation, brightness, bureau_for, ming_zhu, shen_zhu,
};
use ziwei_time::{BirthRecord, LunarCalendar, NormalizedBirth, normalize};

use crate::auxiliary::{AuxiliaryInputs, place_auxiliary_stars};
use crate::error::ChartError;
use crate::frame::PalaceFrame;
use crate::main_stars::place_main_stars;
use crate::periods::{Direction, MajorPeriod, major_periods, period_direction};
use crate::placement::StarPlacement;
use crate::relations::{EmptyLifePalace, PalaceRelations, empty_life_palace, palace_relations};
use crate::sihua::{SelfTransformation, SihuaLayer, palace_self_transformations, resolve_sihua};

/// A star as it appears inside a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StarInfo {
    pub star: Star,
    pub category: StarCategory,
    pub brightness: Option<Brightness>,
    /// Natal (year-stem) transformation, if any.
    pub transformation: Option<Transformation>,
}

/// One of the twelve populated palaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Palace {
    pub branch: EarthlyBranch,
    pub name: PalaceName,
    pub stem: HeavenlyStem,
    /// Stars in catalogue order (main stars first).
    pub stars: Vec<StarInfo>,
    pub is_body_palace: bool,
    pub is_laiyin_palace: bool,
    /// Index of the major period occupying this palace.
    pub major_period: u8,
    pub relations: PalaceRelations,
    pub self_transformations: Vec<SelfTransformation>,
}

impl Palace {
    pub fn main_stars(&self) -> impl Iterator<Item = Star> + '_ {
        self.stars
            .iter()
            .filter(|s| s.category == StarCategory::Main)
            .map(|s| s.star)
    }

    pub fn contains(&self, star: Star) -> bool {
        self.stars.iter().any(|s| s.star == star)
    }
}

/// Complete natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub birth: NormalizedBirth,
    pub bureau: FiveElementsBureau,
    pub frame: PalaceFrame,
    pub direction: Direction,
    /// Life master (命主).
    pub ming_zhu: Star,
    /// Body master (身主).
    pub shen_zhu: Star,
    /// Twelve palaces in branch order (子 first).
    pub palaces: Vec<Palace>,
    pub natal_sihua: SihuaLayer,
    pub major_periods: Vec<MajorPeriod>,
    pub empty_life_palace: Option<EmptyLifePalace>,
    #[serde(skip)]
    placement: StarPlacement,
}

impl Chart {
    pub fn life_branch(&self) -> EarthlyBranch {
        self.frame.life
    }

    pub fn body_branch(&self) -> EarthlyBranch {
        self.frame.body
    }

    pub fn placement(&self) -> &StarPlacement {
        &self.placement
    }

    /// Palace at `branch`.
    pub fn palace(&self, branch: EarthlyBranch) -> &Palace {
        &self.palaces[branch.index() as usize]
    }

    /// Palace carrying `name`.
    pub fn palace_named(&self, name: PalaceName) -> &Palace {
        self.palace(self.frame.branch_of(name))
    }

    pub fn star_branch(&self, star: Star) -> Option<EarthlyBranch> {
        self.placement.branch_of(star)
    }

    pub fn major_period(&self, index: u8) -> Option<&MajorPeriod> {
        self.major_periods.get(index as usize)
    }

    /// Major period covering a nominal age, `None` before the first period.
    pub fn period_for_age(&self, age: u16) -> Option<&MajorPeriod> {
        self.major_periods.iter().find(|p| p.contains_age(age))
    }
}

/// Normalize `record` through `calendar` and assemble its chart.
pub fn assemble<C: LunarCalendar + ?Sized>(
    record: &BirthRecord,
    calendar: &C,
) -> Result<Chart, ChartError> {
    let birth = normalize(record, calendar)?;
    assemble_normalized(birth)
}

/// Assemble a chart from an already normalized birth.
pub fn assemble_normalized(birth: NormalizedBirth) -> Result<Chart, ChartError> {
    let year_stem = birth.year_stem();
    let frame = PalaceFrame::build(birth.lunar.month, birth.hour_branch, year_stem)?;
    let bureau = bureau_for(year_stem, frame.life);

    let mut placement = StarPlacement::new();
    placement.extend(place_main_stars(bureau, birth.lunar.day)?);
    placement.extend(place_auxiliary_stars(&AuxiliaryInputs {
        year_stem,
        year_branch: birth.year_branch(),
        lunar_month: birth.lunar.month,
        lunar_day: birth.lunar.day,
        hour: birth.hour_branch,
    }));

    let natal_sihua = resolve_sihua(year_stem, &placement, &frame)?;
    let direction = period_direction(year_stem, birth.record.gender);
    let major_periods = major_periods(&frame, bureau, direction, &placement)?;
    let self_transformations = palace_self_transformations(&frame, &placement);

    let mut palaces = Vec::with_capacity(ALL_BRANCHES.len());
    for branch in ALL_BRANCHES {
        let stars = placement
            .stars_in(branch)
            .map(|star| StarInfo {
                star,
                category: star.category(),
                brightness: brightness(star, branch),
                transformation: natal_sihua.transformation_of(star),
            })
            .collect();
        let major_period = major_periods
            .iter()
            .find(|p| p.branch == branch)
            .map(|p| p.index)
            .ok_or_else(|| {
                ChartError::InternalTableGap(format!("no major period occupies {branch}"))
            })?;
        palaces.push(Palace {
            branch,
            name: frame.name_of(branch),
            stem: frame.stem_of(branch),
            stars,
            is_body_palace: branch == frame.body,
            is_laiyin_palace: branch == frame.laiyin,
            major_period,
            relations: palace_relations(branch, &placement),
            self_transformations: self_transformations
                .iter()
                .filter(|s| s.palace == branch)
                .copied()
                .collect(),
        });
    }

    debug!(
        life = %frame.life,
        body = %frame.body,
        bureau = bureau.number(),
        ziwei = ?placement.branch_of(Star::ZiWei),
        "chart assembled"
    );

    Ok(Chart {
        empty_life_palace: empty_life_palace(&frame, &placement),
        ming_zhu: ming_zhu(frame.life),
        shen_zhu: shen_zhu(birth.year_branch()),
        birth,
        bureau,
        frame,
        direction,
        palaces,
        natal_sihua,
        major_periods,
        placement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_time::{Gender, TableCalendar};

    fn golden() -> Chart {
        let cal = TableCalendar::bundled().unwrap();
        assemble(&BirthRecord::solar(1990, 5, 15, 7, Gender::Male), &cal).unwrap()
    }

    #[test]
    fn golden_core() {
        let c = golden();
        assert_eq!(c.life_branch(), EarthlyBranch::Chou);
        assert_eq!(c.body_branch(), EarthlyBranch::You);
        assert_eq!(c.bureau, FiveElementsBureau::Fire6);
        assert_eq!(c.star_branch(Star::ZiWei), Some(EarthlyBranch::Yin));
        assert_eq!(c.direction, Direction::Forward);
        assert_eq!(c.ming_zhu, Star::JuMen);
        assert_eq!(c.shen_zhu, Star::LingXing);
    }

    #[test]
    fn palaces_in_branch_order() {
        let c = golden();
        assert_eq!(c.palaces.len(), 12);
        for (i, p) in c.palaces.iter().enumerate() {
            assert_eq!(p.branch.index() as usize, i);
        }
        assert_eq!(c.palace_named(PalaceName::Life).branch, EarthlyBranch::Chou);
        assert!(c.palace(EarthlyBranch::You).is_body_palace);
        assert!(c.palace(EarthlyBranch::Chen).is_laiyin_palace);
    }

    #[test]
    fn star_info_carries_brightness_and_sihua() {
        let c = golden();
        let chou = c.palace(EarthlyBranch::Chou);
        let tianji = chou.stars.iter().find(|s| s.star == Star::TianJi).unwrap();
        assert_eq!(tianji.brightness, Some(Brightness::Miao));
        let hai = c.palace(EarthlyBranch::Hai);
        let taiyang = hai.stars.iter().find(|s| s.star == Star::TaiYang).unwrap();
        assert_eq!(taiyang.transformation, Some(Transformation::Lu));
    }

    #[test]
    fn every_palace_has_one_period() {
        let c = golden();
        let mut seen = [false; 12];
        for p in &c.palaces {
            assert!(!seen[p.major_period as usize]);
            seen[p.major_period as usize] = true;
        }
        assert_eq!(c.palace(EarthlyBranch::Chou).major_period, 0);
        assert_eq!(c.period_for_age(30).map(|p| p.index), Some(2));
        assert!(c.period_for_age(5).is_none());
    }
}
