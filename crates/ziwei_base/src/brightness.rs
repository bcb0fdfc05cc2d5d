//! Star brightness (庙旺利陷) by branch.
//!
//! Seven levels from strongest to weakest. Stars without a reference table
//! (三台, 八座, 地空, 天刑, 咸池) report no brightness.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::star::Star;

/// Brightness level, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Brightness {
    /// 庙
    Miao,
    /// 旺
    Wang,
    /// 得
    De,
    /// 利
    Li,
    /// 平
    Ping,
    /// 不
    Bu,
    /// 陷
    Xian,
}

impl Brightness {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Miao => "庙",
            Self::Wang => "旺",
            Self::De => "得",
            Self::Li => "利",
            Self::Ping => "平",
            Self::Bu => "不",
            Self::Xian => "陷",
        }
    }

    /// True for 庙, 旺 and 得.
    pub const fn is_bright(self) -> bool {
        matches!(self, Self::Miao | Self::Wang | Self::De)
    }
}

const M: Brightness = Brightness::Miao;
const W: Brightness = Brightness::Wang;
const D: Brightness = Brightness::De;
const L: Brightness = Brightness::Li;
const P: Brightness = Brightness::Ping;
const B: Brightness = Brightness::Bu;
const X: Brightness = Brightness::Xian;

type Row = [Brightness; 12];

const ZI_WEI: Row = [M, W, D, L, P, B, M, W, D, L, P, B];
const TIAN_JI: Row = [P, M, W, D, L, B, X, P, M, W, D, L];
const TAI_YANG: Row = [X, B, P, L, D, W, M, W, D, L, P, B];
const WU_QU: Row = [D, L, P, B, X, M, W, D, L, P, B, M];
const TIAN_TONG: Row = [L, P, B, X, M, W, D, L, P, B, M, W];
const LIAN_ZHEN: Row = [P, B, X, M, W, D, L, P, B, M, W, D];
const TAI_YIN: Row = [M, W, D, L, P, B, X, B, P, L, D, W];
const TAN_LANG: Row = [W, D, L, P, B, X, M, W, D, L, P, B];
const JU_MEN: Row = [B, X, M, W, D, L, P, B, M, W, D, L];
const TIAN_XIANG: Row = [D, L, P, B, M, W, D, L, P, B, M, W];
const TIAN_LIANG: Row = [P, B, M, W, D, L, P, B, M, W, D, L];
const QI_SHA: Row = [M, W, D, L, P, B, X, M, W, D, L, P];
const PO_JUN: Row = [D, L, P, B, X, M, W, D, L, P, B, M];
const WEN_CHANG: Row = [M, W, D, L, P, B, M, W, D, L, P, B];
const WEN_QU: Row = [P, B, M, W, D, L, P, B, M, W, D, L];
const TIAN_MA: Row = [M, W, D, L, P, B, M, W, D, L, P, B];
const QING_YANG: Row = [X, B, P, L, D, W, X, B, P, L, D, W];
const TUO_LUO: Row = [W, D, L, P, B, X, W, D, L, P, B, X];
const HUO_XING: Row = [D, M, W, D, L, P, B, X, B, P, L, D];
const LING_XING: Row = [B, X, B, P, L, D, M, W, D, M, W, D];

/// Brightness of `star` in `branch`, `None` for stars without a table.
pub fn brightness(star: Star, branch: EarthlyBranch) -> Option<Brightness> {
    let row: &Row = match star {
        Star::ZiWei => &ZI_WEI,
        Star::TianJi => &TIAN_JI,
        Star::TaiYang => &TAI_YANG,
        Star::WuQu => &WU_QU,
        Star::TianTong => &TIAN_TONG,
        Star::LianZhen => &LIAN_ZHEN,
        Star::TaiYin => &TAI_YIN,
        Star::TanLang => &TAN_LANG,
        Star::JuMen => &JU_MEN,
        Star::TianXiang => &TIAN_XIANG,
        Star::TianLiang => &TIAN_LIANG,
        Star::QiSha => &QI_SHA,
        Star::PoJun => &PO_JUN,
        Star::WenChang => &WEN_CHANG,
        Star::WenQu => &WEN_QU,
        Star::TianMa => &TIAN_MA,
        Star::QingYang => &QING_YANG,
        Star::TuoLuo => &TUO_LUO,
        Star::HuoXing => &HUO_XING,
        Star::LingXing => &LING_XING,
        Star::TianFu | Star::ZuoFu | Star::YouBi | Star::LuCun => return Some(M),
        Star::TianKui | Star::TianYue | Star::TianYao | Star::HongLuan | Star::TianXi => return Some(P),
        Star::TianKong | Star::DiJie => return Some(X),
        Star::SanTai | Star::BaZuo | Star::DiKong | Star::TianXing | Star::XianChi => return None,
    };
    Some(row[branch.index() as usize])
}
