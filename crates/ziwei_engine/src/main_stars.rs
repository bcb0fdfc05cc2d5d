//! Main-star placement (十四主星).
//!
//! ZiWei's branch depends only on the bureau and the lunar day. The rule:
//! find the smallest `x >= 0` making `day + x` divisible by the bureau, take
//! the quotient `q`, start at 寅 + (q - 1), then step back `x` branches when
//! `x` is odd or forward `x` when it is even. The result is stored as an
//! explicit table and re-derived from the rule in tests.
//!
//! The other thirteen stars follow two fixed chains: the ZiWei group counts
//! backward from ZiWei, the TianFu group counts forward from TianFu, which
//! mirrors ZiWei across the 寅–申 axis.

use ziwei_base::{EarthlyBranch, FiveElementsBureau, Star};
use ziwei_time::CalendarError;

use crate::error::ChartError;

/// ZiWei branch by bureau (row, Water2 first) and lunar day (column, day 1 first).
pub const ZIWEI_TABLE: [[EarthlyBranch; 30]; 5] = {
    use EarthlyBranch::*;
    [
        // Water2
        [
            Chou, Yin, Yin, Mao, Mao, Chen, Chen, Si, Si, Wu,
            Wu, Wei, Wei, Shen, Shen, You, You, Xu, Xu, Hai,
            Hai, Zi, Zi, Chou, Chou, Yin, Yin, Mao, Mao, Chen,
        ],
        // Wood3
        [
            Chen, Chou, Yin, Si, Yin, Mao, Wu, Mao, Chen, Wei,
            Chen, Si, Shen, Si, Wu, You, Wu, Wei, Xu, Wei,
            Shen, Hai, Shen, You, Zi, You, Xu, Chou, Xu, Hai,
        ],
        // Metal4
        [
            Hai, Chen, Chou, Yin, Zi, Si, Yin, Mao, Chou, Wu,
            Mao, Chen, Yin, Wei, Chen, Si, Mao, Shen, Si, Wu,
            Chen, You, Wu, Wei, Si, Xu, Wei, Shen, Wu, Hai,
        ],
        // Earth5
        [
            Wu, Hai, Chen, Chou, Yin, Wei, Zi, Si, Yin, Mao,
            Shen, Chou, Wu, Mao, Chen, You, Yin, Wei, Chen, Si,
            Xu, Mao, Shen, Si, Wu, Hai, Chen, You, Wu, Wei,
        ],
        // Fire6
        [
            You, Wu, Hai, Chen, Chou, Yin, Xu, Wei, Zi, Si,
            Yin, Mao, Hai, Shen, Chou, Wu, Mao, Chen, Zi, You,
            Yin, Wei, Chen, Si, Chou, Xu, Mao, Shen, Si, Wu,
        ],
    ]
};

/// ZiWei group: offsets from ZiWei.
pub const ZIWEI_CHAIN: [(Star, i32); 6] = [
    (Star::ZiWei, 0),
    (Star::TianJi, -1),
    (Star::TaiYang, -3),
    (Star::WuQu, -4),
    (Star::TianTong, -5),
    (Star::LianZhen, -8),
];

/// TianFu group: offsets from TianFu.
pub const TIANFU_CHAIN: [(Star, i32); 8] = [
    (Star::TianFu, 0),
    (Star::TaiYin, 1),
    (Star::TanLang, 2),
    (Star::JuMen, 3),
    (Star::TianXiang, 4),
    (Star::TianLiang, 5),
    (Star::QiSha, 6),
    (Star::PoJun, 10),
];

/// Branch of ZiWei for a bureau and lunar day (1–30).
pub fn ziwei_branch(bureau: FiveElementsBureau, lunar_day: u8) -> Result<EarthlyBranch, ChartError> {
    if !(1..=30).contains(&lunar_day) {
        return Err(CalendarError::InvalidBirthData(format!(
            "lunar day {lunar_day} outside 1..=30"
        ))
        .into());
    }
    Ok(ZIWEI_TABLE[bureau.index() as usize][lunar_day as usize - 1])
}

/// TianFu mirrors ZiWei across the 寅–申 axis.
pub fn tianfu_branch(ziwei: EarthlyBranch) -> EarthlyBranch {
    EarthlyBranch::wrapping(4 - ziwei.index() as i64)
}

/// All 14 main stars with their branches, ZiWei group first.
pub fn place_main_stars(
    bureau: FiveElementsBureau,
    lunar_day: u8,
) -> Result<[(Star, EarthlyBranch); 14], ChartError> {
    let ziwei = ziwei_branch(bureau, lunar_day)?;
    let tianfu = tianfu_branch(ziwei);
    let mut out = [(Star::ZiWei, ziwei); 14];
    for (slot, &(star, step)) in out.iter_mut().zip(ZIWEI_CHAIN.iter()) {
        *slot = (star, ziwei.offset(step));
    }
    for (slot, &(star, step)) in out[ZIWEI_CHAIN.len()..].iter_mut().zip(TIANFU_CHAIN.iter()) {
        *slot = (star, tianfu.offset(step));
    }
    Ok(out)
}
