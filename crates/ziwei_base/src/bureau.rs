//! Five Elements Bureau (五行局).
//!
//! The bureau is fixed by the year stem and the branch of the Life Palace.
//! Stems pair into five combinations (甲己, 乙庚, 丙辛, 丁壬, 戊癸) and
//! branches into six adjacent pairs (子丑 .. 戌亥), giving a 5×6 table whose
//! every cell is one of five bureaus numbered 2–6.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::FiveElement;
use crate::stem::HeavenlyStem;

/// The five bureaus, numbered by their traditional count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FiveElementsBureau {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

/// All five bureaus in numeric order.
pub const ALL_BUREAUS: [FiveElementsBureau; 5] = [
    FiveElementsBureau::Water2,
    FiveElementsBureau::Wood3,
    FiveElementsBureau::Metal4,
    FiveElementsBureau::Earth5,
    FiveElementsBureau::Fire6,
];

impl FiveElementsBureau {
    /// Bureau number (2–6). Also the starting age of the first major period.
    pub const fn number(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        ALL_BUREAUS.iter().copied().find(|b| b.number() == n)
    }

    pub const fn element(self) -> FiveElement {
        match self {
            Self::Water2 => FiveElement::Water,
            Self::Wood3 => FiveElement::Wood,
            Self::Metal4 => FiveElement::Metal,
            Self::Earth5 => FiveElement::Earth,
            Self::Fire6 => FiveElement::Fire,
        }
    }

    /// Chinese name, e.g. "水二局".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    /// 0-based row in numeric order (Water2=0 .. Fire6=4).
    pub const fn index(self) -> u8 {
        self.number() - 2
    }
}

/// Stem combinations (天干五合).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemCombination {
    JiaJi,
    YiGeng,
    BingXin,
    DingRen,
    WuGui,
}

impl StemCombination {
    pub const fn of(stem: HeavenlyStem) -> Self {
        match stem {
            HeavenlyStem::Jia | HeavenlyStem::Ji => Self::JiaJi,
            HeavenlyStem::Yi | HeavenlyStem::Geng => Self::YiGeng,
            HeavenlyStem::Bing | HeavenlyStem::Xin => Self::BingXin,
            HeavenlyStem::Ding | HeavenlyStem::Ren => Self::DingRen,
            HeavenlyStem::Wu | HeavenlyStem::Gui => Self::WuGui,
        }
    }
}

/// Adjacent branch pairs used as bureau table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchPair {
    ZiChou,
    YinMao,
    ChenSi,
    WuWei,
    ShenYou,
    XuHai,
}

impl BranchPair {
    pub const fn of(branch: EarthlyBranch) -> Self {
        match branch {
            EarthlyBranch::Zi | EarthlyBranch::Chou => Self::ZiChou,
            EarthlyBranch::Yin | EarthlyBranch::Mao => Self::YinMao,
            EarthlyBranch::Chen | EarthlyBranch::Si => Self::ChenSi,
            EarthlyBranch::Wu | EarthlyBranch::Wei => Self::WuWei,
            EarthlyBranch::Shen | EarthlyBranch::You => Self::ShenYou,
            EarthlyBranch::Xu | EarthlyBranch::Hai => Self::XuHai,
        }
    }
}

/// Bureau for a year stem and Life Palace branch.
pub const fn bureau_for(year_stem: HeavenlyStem, life_branch: EarthlyBranch) -> FiveElementsBureau {
    use BranchPair as P;
    use FiveElementsBureau as B;
    use StemCombination as S;
    match (S::of(year_stem), P::of(life_branch)) {
        (S::JiaJi, P::ZiChou) => B::Water2,
        (S::JiaJi, P::YinMao) => B::Fire6,
        (S::JiaJi, P::ChenSi) => B::Wood3,
        (S::JiaJi, P::WuWei) => B::Earth5,
        (S::JiaJi, P::ShenYou) => B::Metal4,
        (S::JiaJi, P::XuHai) => B::Fire6,

        (S::YiGeng, P::ZiChou) => B::Fire6,
        (S::YiGeng, P::YinMao) => B::Earth5,
        (S::YiGeng, P::ChenSi) => B::Metal4,
        (S::YiGeng, P::WuWei) => B::Wood3,
        (S::YiGeng, P::ShenYou) => B::Water2,
        (S::YiGeng, P::XuHai) => B::Earth5,

        (S::BingXin, P::ZiChou) => B::Earth5,
        (S::BingXin, P::YinMao) => B::Wood3,
        (S::BingXin, P::ChenSi) => B::Water2,
        (S::BingXin, P::WuWei) => B::Metal4,
        (S::BingXin, P::ShenYou) => B::Fire6,
        (S::BingXin, P::XuHai) => B::Wood3,

        (S::DingRen, P::ZiChou) => B::Wood3,
        (S::DingRen, P::YinMao) => B::Metal4,
        (S::DingRen, P::ChenSi) => B::Fire6,
        (S::DingRen, P::WuWei) => B::Water2,
        (S::DingRen, P::ShenYou) => B::Earth5,
        (S::DingRen, P::XuHai) => B::Metal4,

        (S::WuGui, P::ZiChou) => B::Metal4,
        (S::WuGui, P::YinMao) => B::Water2,
        (S::WuGui, P::ChenSi) => B::Earth5,
        (S::WuGui, P::WuWei) => B::Fire6,
        (S::WuGui, P::ShenYou) => B::Wood3,
        (S::WuGui, P::XuHai) => B::Water2,
    }
}
