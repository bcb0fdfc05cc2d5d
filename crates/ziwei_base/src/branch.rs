//! Earthly Branches (地支).
//!
//! Twelve branches occupy fixed positions 0–11 starting from 子 (Zi). In a
//! chart they double as the twelve palace positions; in time reckoning they
//! name the twelve two-hour periods and the lunar months (正月 = 寅).

use serde::{Deserialize, Serialize};

use crate::element::{FiveElement, Polarity};

/// The 12 Earthly Branches starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

/// Three-harmony groups (三合局), branches four apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Triad {
    /// 申子辰, Water.
    ShenZiChen,
    /// 寅午戌, Fire.
    YinWuXu,
    /// 巳酉丑, Metal.
    SiYouChou,
    /// 亥卯未, Wood.
    HaiMaoWei,
}

impl Triad {
    pub const fn element(self) -> FiveElement {
        match self {
            Self::ShenZiChen => FiveElement::Water,
            Self::YinWuXu => FiveElement::Fire,
            Self::SiYouChou => FiveElement::Metal,
            Self::HaiMaoWei => FiveElement::Wood,
        }
    }
}

impl EarthlyBranch {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Create from a 0-based index, `None` if out of range.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_BRANCHES.get(i as usize).copied()
    }

    /// Branch at any signed position, wrapped into the 12-cycle.
    pub fn wrapping(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Branch `steps` positions away (negative steps count backward).
    pub fn offset(self, steps: i32) -> Self {
        Self::wrapping(self.index() as i64 + steps as i64)
    }

    /// Forward distance from `self` to `other`, in 0..12.
    pub fn steps_to(self, other: Self) -> u8 {
        (other.index() as i16 - self.index() as i16).rem_euclid(12) as u8
    }

    /// Look up a branch by its Chinese character or pinyin (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.name() == s || b.pinyin().eq_ignore_ascii_case(s))
    }

    /// Branch directly across the circle (six positions away).
    pub fn opposite(self) -> Self {
        self.offset(6)
    }

    /// The other two members of this branch's three-harmony group.
    pub fn trines(self) -> [Self; 2] {
        [self.offset(4), self.offset(-4)]
    }

    pub const fn triad(self) -> Triad {
        match self {
            Self::Shen | Self::Zi | Self::Chen => Triad::ShenZiChen,
            Self::Yin | Self::Wu | Self::Xu => Triad::YinWuXu,
            Self::Si | Self::You | Self::Chou => Triad::SiYouChou,
            Self::Hai | Self::Mao | Self::Wei => Triad::HaiMaoWei,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    pub const fn element(self) -> FiveElement {
        match self {
            Self::Yin | Self::Mao => FiveElement::Wood,
            Self::Si | Self::Wu => FiveElement::Fire,
            Self::Shen | Self::You => FiveElement::Metal,
            Self::Hai | Self::Zi => FiveElement::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => FiveElement::Earth,
        }
    }

    /// Two-hour period (时辰) containing a civil clock hour.
    ///
    /// 23:00–00:59 is 子, 01:00–02:59 is 丑, and so on. Hours above 23
    /// return `None`.
    pub fn from_hour(hour: u8) -> Option<Self> {
        if hour > 23 {
            return None;
        }
        Some(Self::wrapping(((hour as i64) + 1) / 2))
    }

    /// Branch of a lunar month, 1 = 正月 = 寅. Months outside 1..=12 return `None`.
    pub fn from_lunar_month(month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self::Yin.offset(month as i32 - 1))
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
