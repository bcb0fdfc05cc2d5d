//! Star catalogue.
//!
//! Thirty-six stars in four categories: the 14 main stars (主星), ten
//! auxiliary stars (辅星), eight malefic stars (煞星) and four peach-blossom
//! stars (桃花星). Category is a static property of the star.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;

/// Star category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarCategory {
    Main,
    Auxiliary,
    Malefic,
    PeachBlossom,
}

impl StarCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "主星",
            Self::Auxiliary => "辅星",
            Self::Malefic => "煞星",
            Self::PeachBlossom => "桃花星",
        }
    }
}

/// Every star the engine places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Star {
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    WenChang,
    WenQu,
    ZuoFu,
    YouBi,
    TianKui,
    TianYue,
    LuCun,
    TianMa,
    SanTai,
    BaZuo,
    QingYang,
    TuoLuo,
    HuoXing,
    LingXing,
    DiKong,
    DiJie,
    TianXing,
    TianKong,
    HongLuan,
    TianXi,
    TianYao,
    XianChi,
}

/// All 36 stars in catalogue order (main stars first).
pub const ALL_STARS: [Star; 36] = [
    Star::ZiWei,
    Star::TianJi,
    Star::TaiYang,
    Star::WuQu,
    Star::TianTong,
    Star::LianZhen,
    Star::TianFu,
    Star::TaiYin,
    Star::TanLang,
    Star::JuMen,
    Star::TianXiang,
    Star::TianLiang,
    Star::QiSha,
    Star::PoJun,
    Star::WenChang,
    Star::WenQu,
    Star::ZuoFu,
    Star::YouBi,
    Star::TianKui,
    Star::TianYue,
    Star::LuCun,
    Star::TianMa,
    Star::SanTai,
    Star::BaZuo,
    Star::QingYang,
    Star::TuoLuo,
    Star::HuoXing,
    Star::LingXing,
    Star::DiKong,
    Star::DiJie,
    Star::TianXing,
    Star::TianKong,
    Star::HongLuan,
    Star::TianXi,
    Star::TianYao,
    Star::XianChi,
];

/// The 14 main stars: the ZiWei group followed by the TianFu group.
pub const MAIN_STARS: [Star; 14] = [
    Star::ZiWei,
    Star::TianJi,
    Star::TaiYang,
    Star::WuQu,
    Star::TianTong,
    Star::LianZhen,
    Star::TianFu,
    Star::TaiYin,
    Star::TanLang,
    Star::JuMen,
    Star::TianXiang,
    Star::TianLiang,
    Star::QiSha,
    Star::PoJun,
];

impl Star {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::TianKui => "天魁",
            Self::TianYue => "天钺",
            Self::LuCun => "禄存",
            Self::TianMa => "天马",
            Self::SanTai => "三台",
            Self::BaZuo => "八座",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀罗",
            Self::HuoXing => "火星",
            Self::LingXing => "铃星",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
            Self::TianXing => "天刑",
            Self::TianKong => "天空",
            Self::HongLuan => "红鸾",
            Self::TianXi => "天喜",
            Self::TianYao => "天姚",
            Self::XianChi => "咸池",
        }
    }

    /// Pinyin name, identical to the variant name.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::ZiWei => "ZiWei",
            Self::TianJi => "TianJi",
            Self::TaiYang => "TaiYang",
            Self::WuQu => "WuQu",
            Self::TianTong => "TianTong",
            Self::LianZhen => "LianZhen",
            Self::TianFu => "TianFu",
            Self::TaiYin => "TaiYin",
            Self::TanLang => "TanLang",
            Self::JuMen => "JuMen",
            Self::TianXiang => "TianXiang",
            Self::TianLiang => "TianLiang",
            Self::QiSha => "QiSha",
            Self::PoJun => "PoJun",
            Self::WenChang => "WenChang",
            Self::WenQu => "WenQu",
            Self::ZuoFu => "ZuoFu",
            Self::YouBi => "YouBi",
            Self::TianKui => "TianKui",
            Self::TianYue => "TianYue",
            Self::LuCun => "LuCun",
            Self::TianMa => "TianMa",
            Self::SanTai => "SanTai",
            Self::BaZuo => "BaZuo",
            Self::QingYang => "QingYang",
            Self::TuoLuo => "TuoLuo",
            Self::HuoXing => "HuoXing",
            Self::LingXing => "LingXing",
            Self::DiKong => "DiKong",
            Self::DiJie => "DiJie",
            Self::TianXing => "TianXing",
            Self::TianKong => "TianKong",
            Self::HongLuan => "HongLuan",
            Self::TianXi => "TianXi",
            Self::TianYao => "TianYao",
            Self::XianChi => "XianChi",
        }
    }

    /// 0-based catalogue index.
    pub const fn index(self) -> u8 {
        match self {
            Self::ZiWei => 0,
            Self::TianJi => 1,
            Self::TaiYang => 2,
            Self::WuQu => 3,
            Self::TianTong => 4,
            Self::LianZhen => 5,
            Self::TianFu => 6,
            Self::TaiYin => 7,
            Self::TanLang => 8,
            Self::JuMen => 9,
            Self::TianXiang => 10,
            Self::TianLiang => 11,
            Self::QiSha => 12,
            Self::PoJun => 13,
            Self::WenChang => 14,
            Self::WenQu => 15,
            Self::ZuoFu => 16,
            Self::YouBi => 17,
            Self::TianKui => 18,
            Self::TianYue => 19,
            Self::LuCun => 20,
            Self::TianMa => 21,
            Self::SanTai => 22,
            Self::BaZuo => 23,
            Self::QingYang => 24,
            Self::TuoLuo => 25,
            Self::HuoXing => 26,
            Self::LingXing => 27,
            Self::DiKong => 28,
            Self::DiJie => 29,
            Self::TianXing => 30,
            Self::TianKong => 31,
            Self::HongLuan => 32,
            Self::TianXi => 33,
            Self::TianYao => 34,
            Self::XianChi => 35,
        }
    }

    pub fn from_index(i: u8) -> Option<Self> {
        ALL_STARS.get(i as usize).copied()
    }

    pub const fn category(self) -> StarCategory {
        match self {
            Self::ZiWei
            | Self::TianJi
            | Self::TaiYang
            | Self::WuQu
            | Self::TianTong
            | Self::LianZhen
            | Self::TianFu
            | Self::TaiYin
            | Self::TanLang
            | Self::JuMen
            | Self::TianXiang
            | Self::TianLiang
            | Self::QiSha
            | Self::PoJun => StarCategory::Main,
            Self::WenChang
            | Self::WenQu
            | Self::ZuoFu
            | Self::YouBi
            | Self::TianKui
            | Self::TianYue
            | Self::LuCun
            | Self::TianMa
            | Self::SanTai
            | Self::BaZuo => StarCategory::Auxiliary,
            Self::QingYang
            | Self::TuoLuo
            | Self::HuoXing
            | Self::LingXing
            | Self::DiKong
            | Self::DiJie
            | Self::TianXing
            | Self::TianKong => StarCategory::Malefic,
            Self::HongLuan
            | Self::TianXi
            | Self::TianYao
            | Self::XianChi => StarCategory::PeachBlossom,
        }
    }

    pub const fn is_main(self) -> bool {
        matches!(self.category(), StarCategory::Main)
    }

    /// Look up a star by Chinese name or pinyin (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        ALL_STARS
            .iter()
            .copied()
            .find(|st| st.name() == s || st.pinyin().eq_ignore_ascii_case(s))
    }
}

/// Life master (命主), keyed by the Life Palace branch.
pub const fn ming_zhu(life_branch: EarthlyBranch) -> Star {
    match life_branch {
        EarthlyBranch::Zi => Star::TanLang,
        EarthlyBranch::Chou | EarthlyBranch::Hai => Star::JuMen,
        EarthlyBranch::Yin | EarthlyBranch::Xu => Star::LuCun,
        EarthlyBranch::Mao | EarthlyBranch::You => Star::WenQu,
        EarthlyBranch::Chen | EarthlyBranch::Shen => Star::LianZhen,
        EarthlyBranch::Si | EarthlyBranch::Wei => Star::WuQu,
        EarthlyBranch::Wu => Star::PoJun,
    }
}

/// Body master (身主), keyed by the year branch.
pub const fn shen_zhu(year_branch: EarthlyBranch) -> Star {
    match year_branch {
        EarthlyBranch::Zi => Star::HuoXing,
        EarthlyBranch::Wu => Star::LingXing,
        EarthlyBranch::Chou | EarthlyBranch::Wei => Star::TianXiang,
        EarthlyBranch::Yin | EarthlyBranch::Shen => Star::TianLiang,
        EarthlyBranch::Mao | EarthlyBranch::You => Star::TianTong,
        EarthlyBranch::Chen | EarthlyBranch::Xu => Star::WenChang,
        EarthlyBranch::Si | EarthlyBranch::Hai => Star::TianJi,
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
