//! Time overlays on a natal chart: a selected major period and a fleeting
//! year (流年).
//!
//! Overlays never touch the natal chart. Each selection re-derives a frame
//! anchored at the period or year branch, names the palaces in the natal
//! rotation ("大命", "流财", ...) and resolves that stem's Sihua against the
//! natal placement.

use std::sync::Arc;

use serde::Serialize;
use ziwei_base::{ALL_BRANCHES, EarthlyBranch, GanZhi, PalaceName};

use crate::chart::Chart;
use crate::error::ChartError;
use crate::periods::{MAJOR_PERIOD_COUNT, MajorPeriod};
use crate::sihua::{SihuaLayer, resolve_sihua};

/// Prefix of major-period overlay labels.
pub const PERIOD_PREFIX: &str = "大";
/// Prefix of fleeting-year overlay labels.
pub const YEAR_PREFIX: &str = "流";

/// A palace name in an overlay frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OverlayPalace {
    pub branch: EarthlyBranch,
    pub name: PalaceName,
    /// Prefixed short name, e.g. "大命".
    pub label: String,
}

/// Overlay names for all twelve branches, in branch order.
pub fn overlay_palaces(anchor: EarthlyBranch, prefix: &str) -> Vec<OverlayPalace> {
    ALL_BRANCHES
        .iter()
        .map(|&branch| {
            let name = PalaceName::at(anchor, branch);
            OverlayPalace {
                branch,
                name,
                label: format!("{prefix}{}", name.short_name()),
            }
        })
        .collect()
}

/// A selected major period with its overlay names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PeriodView {
    pub period: MajorPeriod,
    pub palaces: Vec<OverlayPalace>,
}

/// A fleeting year anchored at the calendar year's branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FleetingYear {
    pub year: i32,
    pub ganzhi: GanZhi,
    pub branch: EarthlyBranch,
    /// Nominal age (虚岁): 1 in the lunar birth year.
    pub nominal_age: u16,
    pub sihua: SihuaLayer,
    pub palaces: Vec<OverlayPalace>,
    /// Major period covering `nominal_age`, if it has started.
    pub major_period: Option<u8>,
}

/// Which overlays to derive. The default selects nothing (natal only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Selection {
    pub period: Option<u8>,
    pub year: Option<i32>,
}

impl Selection {
    pub fn natal() -> Self {
        Self::default()
    }

    pub fn with_period(mut self, index: u8) -> Self {
        self.period = Some(index);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn is_natal(&self) -> bool {
        self.period.is_none() && self.year.is_none()
    }
}

/// Natal chart plus the selected overlays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartView {
    pub chart: Arc<Chart>,
    pub selection: Selection,
    pub period: Option<PeriodView>,
    pub fleeting_year: Option<FleetingYear>,
}

impl Chart {
    /// Overlay for major period `index` (0–11).
    pub fn select_period(&self, index: u8) -> Result<PeriodView, ChartError> {
        let period = *self.major_period(index).ok_or_else(|| {
            ChartError::InvalidSelection(format!(
                "major period {index} outside 0..{MAJOR_PERIOD_COUNT}"
            ))
        })?;
        Ok(PeriodView {
            palaces: overlay_palaces(period.branch, PERIOD_PREFIX),
            period,
        })
    }

    /// Overlay for a calendar year at or after the lunar birth year.
    pub fn fleeting_year(&self, year: i32) -> Result<FleetingYear, ChartError> {
        let birth_year = self.birth.lunar.year;
        let age = year as i64 - birth_year as i64 + 1;
        if age < 1 {
            return Err(ChartError::InvalidSelection(format!(
                "year {year} precedes lunar birth year {birth_year}"
            )));
        }
        let nominal_age = u16::try_from(age).map_err(|_| {
            ChartError::InvalidSelection(format!(
                "year {year} is too far after lunar birth year {birth_year}"
            ))
        })?;
        let ganzhi = GanZhi::from_year(year);
        let sihua = resolve_sihua(ganzhi.stem, self.placement(), &self.frame)?;
        Ok(FleetingYear {
            year,
            ganzhi,
            branch: ganzhi.branch,
            nominal_age,
            sihua,
            palaces: overlay_palaces(ganzhi.branch, YEAR_PREFIX),
            major_period: self.period_for_age(nominal_age).map(|p| p.index),
        })
    }
}

/// Derive the overlays named by `selection`. An empty selection returns the
/// natal chart unchanged.
pub fn view(chart: Arc<Chart>, selection: Selection) -> Result<ChartView, ChartError> {
    let period = selection
        .period
        .map(|i| chart.select_period(i))
        .transpose()?;
    let fleeting_year = selection
        .year
        .map(|y| chart.fleeting_year(y))
        .transpose()?;
    Ok(ChartView {
        chart,
        selection,
        period,
        fleeting_year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::assemble;
    use ziwei_base::{HeavenlyStem, Star, Transformation};
    use ziwei_time::{BirthRecord, Gender, TableCalendar};

    fn golden() -> Arc<Chart> {
        let cal = TableCalendar::bundled().unwrap();
        Arc::new(assemble(&BirthRecord::solar(1990, 5, 15, 7, Gender::Male), &cal).unwrap())
    }

    #[test]
    fn overlay_labels() {
        let names = overlay_palaces(EarthlyBranch::Chen, YEAR_PREFIX);
        assert_eq!(names.len(), 12);
        assert_eq!(names[EarthlyBranch::Chen.index() as usize].label, "流命");
        assert_eq!(names[EarthlyBranch::Mao.index() as usize].label, "流兄");
        assert_eq!(names[EarthlyBranch::Xu.index() as usize].label, "流迁");
    }

    #[test]
    fn period_selection() {
        let c = golden();
        let v = c.select_period(2).unwrap();
        assert_eq!(v.period.branch, EarthlyBranch::Mao);
        let life = v.palaces.iter().find(|p| p.name == PalaceName::Life).unwrap();
        assert_eq!(life.branch, EarthlyBranch::Mao);
        assert_eq!(life.label, "大命");
        assert!(matches!(
            c.select_period(12),
            Err(ChartError::InvalidSelection(_))
        ));
    }

    #[test]
    fn fleeting_year_2024() {
        let c = golden();
        let y = c.fleeting_year(2024).unwrap();
        assert_eq!(y.ganzhi.name(), "甲辰");
        assert_eq!(y.branch, EarthlyBranch::Chen);
        assert_eq!(y.nominal_age, 35);
        assert_eq!(y.major_period, Some(2));
        assert_eq!(y.sihua.stem, HeavenlyStem::Jia);
        let lu = y.sihua.get(Transformation::Lu);
        assert_eq!((lu.star, lu.branch, lu.palace), (Star::LianZhen, EarthlyBranch::Wu, PalaceName::Friends));
        let ji = y.sihua.get(Transformation::Ji);
        assert_eq!((ji.star, ji.palace), (Star::TaiYang, PalaceName::Spouse));
    }

    #[test]
    fn birth_year_is_age_one() {
        let c = golden();
        let y = c.fleeting_year(1990).unwrap();
        assert_eq!(y.nominal_age, 1);
        assert_eq!(y.major_period, None);
        assert!(matches!(
            c.fleeting_year(1989),
            Err(ChartError::InvalidSelection(_))
        ));
    }

    #[test]
    fn far_future_year_is_rejected_as_too_late() {
        let c = golden();
        let err = c.fleeting_year(80_000).unwrap_err().to_string();
        assert!(err.contains("too far after"), "{err}");
        assert!(!err.contains("precedes"), "{err}");
        let err = c.fleeting_year(1900).unwrap_err().to_string();
        assert!(err.contains("precedes"), "{err}");
        // Largest year whose nominal age still fits.
        assert_eq!(c.fleeting_year(1990 + 65_534).unwrap().nominal_age, u16::MAX);
    }

    #[test]
    fn clearing_selection_restores_natal() {
        let c = golden();
        let selected = view(c.clone(), Selection::natal().with_period(3).with_year(2024)).unwrap();
        assert!(selected.period.is_some());
        assert!(selected.fleeting_year.is_some());
        let cleared = view(selected.chart.clone(), Selection::natal()).unwrap();
        assert!(cleared.selection.is_natal());
        assert!(cleared.period.is_none());
        assert!(cleared.fleeting_year.is_none());
        assert_eq!(*cleared.chart, *c);
    }
}
