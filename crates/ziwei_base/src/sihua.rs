//! Four Transformations (四化) by stem.
//!
//! Every stem transforms exactly four distinct stars into 化禄, 化权, 化科
//! and 化忌. The same table serves the year stem, a major-period stem, a
//! fleeting-year stem and each palace stem.

use serde::{Deserialize, Serialize};

use crate::star::Star;
use crate::stem::HeavenlyStem;

/// One of the four transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Transformation {
    /// 化禄
    Lu,
    /// 化权
    Quan,
    /// 化科
    Ke,
    /// 化忌
    Ji,
}

/// All four transformations in traditional order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    /// Full Chinese name, e.g. "化禄".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "化禄",
            Self::Quan => "化权",
            Self::Ke => "化科",
            Self::Ji => "化忌",
        }
    }

    /// Single-character form, e.g. "禄".
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Lu => "禄",
            Self::Quan => "权",
            Self::Ke => "科",
            Self::Ji => "忌",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Lu => 0,
            Self::Quan => 1,
            Self::Ke => 2,
            Self::Ji => 3,
        }
    }
}

impl std::fmt::Display for Transformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stars transformed by `stem`, indexed by [`Transformation::index`].
pub const fn sihua_row(stem: HeavenlyStem) -> [Star; 4] {
    use HeavenlyStem as H;
    use Star as S;
    match stem {
        H::Jia => [S::LianZhen, S::PoJun, S::WuQu, S::TaiYang],
        H::Yi => [S::TianJi, S::TianLiang, S::ZiWei, S::TaiYin],
        H::Bing => [S::TianTong, S::TianJi, S::WenChang, S::LianZhen],
        H::Ding => [S::TaiYin, S::TianTong, S::TianJi, S::JuMen],
        H::Wu => [S::TanLang, S::TaiYin, S::YouBi, S::TianJi],
        H::Ji => [S::WuQu, S::TanLang, S::TianLiang, S::WenQu],
        H::Geng => [S::TaiYang, S::WuQu, S::TaiYin, S::TianTong],
        H::Xin => [S::JuMen, S::TaiYang, S::WenQu, S::WenChang],
        H::Ren => [S::TianLiang, S::ZiWei, S::ZuoFu, S::WuQu],
        H::Gui => [S::PoJun, S::JuMen, S::TaiYin, S::TanLang],
    }
}

/// Star receiving transformation `t` under `stem`.
pub const fn transformed_star(stem: HeavenlyStem, t: Transformation) -> Star {
    sihua_row(stem)[t.index() as usize]
}

/// Transformation applied to `star` under `stem`, if any.
pub fn transformation_of(stem: HeavenlyStem, star: Star) -> Option<Transformation> {
    let row = sihua_row(stem);
    ALL_TRANSFORMATIONS
        .iter()
        .copied()
        .find(|t| row[t.index() as usize] == star)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn four_distinct_per_stem() {
        for s in ALL_STEMS {
            let row = sihua_row(s);
            for i in 0..4 {
                for j in i + 1..4 {
                    assert_ne!(row[i], row[j], "{s}");
                }
            }
        }
    }

    #[test]
    fn geng_row() {
        use Transformation::*;
        assert_eq!(transformed_star(HeavenlyStem::Geng, Lu), Star::TaiYang);
        assert_eq!(transformed_star(HeavenlyStem::Geng, Quan), Star::WuQu);
        assert_eq!(transformed_star(HeavenlyStem::Geng, Ke), Star::TaiYin);
        assert_eq!(transformed_star(HeavenlyStem::Geng, Ji), Star::TianTong);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(
            transformation_of(HeavenlyStem::Jia, Star::TaiYang),
            Some(Transformation::Ji)
        );
        assert_eq!(transformation_of(HeavenlyStem::Jia, Star::ZiWei), None);
    }

    #[test]
    fn only_main_and_literary_stars_transform() {
        let allowed = [Star::WenChang, Star::WenQu, Star::ZuoFu, Star::YouBi];
        for s in ALL_STEMS {
            for star in sihua_row(s) {
                assert!(star.is_main() || allowed.contains(&star), "{s} {star}");
            }
        }
    }
}
