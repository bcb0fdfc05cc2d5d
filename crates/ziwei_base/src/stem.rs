//! Heavenly Stems (天干).
//!
//! Ten stems cycle in fixed order starting from 甲 (Jia). Odd positions
//! (甲丙戊庚壬) are Yang, even positions Yin. Each adjacent pair shares an
//! element: 甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.

use serde::{Deserialize, Serialize};

use crate::element::{FiveElement, Polarity};

/// The 10 Heavenly Stems starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Create from a 0-based index, `None` if out of range.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_STEMS.get(i as usize).copied()
    }

    /// Stem at any signed position, wrapped into the 10-cycle.
    pub fn wrapping(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Stem `steps` positions away (negative steps count backward).
    pub fn offset(self, steps: i32) -> Self {
        Self::wrapping(self.index() as i64 + steps as i64)
    }

    /// Look up a stem by its Chinese character or pinyin (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.name() == s || st.pinyin().eq_ignore_ascii_case(s))
    }

    pub const fn element(self) -> FiveElement {
        match self {
            Self::Jia | Self::Yi => FiveElement::Wood,
            Self::Bing | Self::Ding => FiveElement::Fire,
            Self::Wu | Self::Ji => FiveElement::Earth,
            Self::Geng | Self::Xin => FiveElement::Metal,
            Self::Ren | Self::Gui => FiveElement::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    pub const fn is_yang(self) -> bool {
        self.polarity().is_yang()
    }

    /// Stem of the 寅 month (and 寅 palace) in a year with this stem.
    ///
    /// Five-tiger escapement (五虎遁): 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
    pub const fn tiger_stem(self) -> Self {
        match self {
            Self::Jia | Self::Ji => Self::Bing,
            Self::Yi | Self::Geng => Self::Wu,
            Self::Bing | Self::Xin => Self::Geng,
            Self::Ding | Self::Ren => Self::Ren,
            Self::Wu | Self::Gui => Self::Jia,
        }
    }

    /// Stem of the 子 hour on a day with this stem.
    ///
    /// Five-rat escapement (五鼠遁): 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
    pub const fn rat_stem(self) -> Self {
        match self {
            Self::Jia | Self::Ji => Self::Jia,
            Self::Yi | Self::Geng => Self::Bing,
            Self::Bing | Self::Xin => Self::Wu,
            Self::Ding | Self::Ren => Self::Geng,
            Self::Wu | Self::Gui => Self::Ren,
        }
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(HeavenlyStem::from_index(i as u8), Some(*s));
        }
        assert_eq!(HeavenlyStem::from_index(10), None);
    }

    #[test]
    fn wrapping_negative() {
        assert_eq!(HeavenlyStem::wrapping(-1), HeavenlyStem::Gui);
        assert_eq!(HeavenlyStem::Jia.offset(-11), HeavenlyStem::Gui);
        assert_eq!(HeavenlyStem::Ren.offset(3), HeavenlyStem::Yi);
    }

    #[test]
    fn yang_stems() {
        let yang: Vec<_> = ALL_STEMS.iter().filter(|s| s.is_yang()).collect();
        assert_eq!(
            yang,
            vec![
                &HeavenlyStem::Jia,
                &HeavenlyStem::Bing,
                &HeavenlyStem::Wu,
                &HeavenlyStem::Geng,
                &HeavenlyStem::Ren
            ]
        );
    }

    #[test]
    fn combined_stems_share_escapements() {
        // Stems five apart form a combination and share both escapements.
        for s in ALL_STEMS {
            assert_eq!(s.tiger_stem(), s.offset(5).tiger_stem());
            assert_eq!(s.rat_stem(), s.offset(5).rat_stem());
        }
    }

    #[test]
    fn tiger_stems_are_yang() {
        for s in ALL_STEMS {
            assert!(s.tiger_stem().is_yang());
            assert!(s.rat_stem().is_yang());
        }
    }

    #[test]
    fn parse_both_forms() {
        assert_eq!(HeavenlyStem::parse("庚"), Some(HeavenlyStem::Geng));
        assert_eq!(HeavenlyStem::parse("geng"), Some(HeavenlyStem::Geng));
        assert_eq!(HeavenlyStem::parse("X"), None);
    }
}
