//! Auxiliary, malefic and peach-blossom stars.
//!
//! Each star has its own rule keyed by the year stem, the year branch, the
//! lunar month, the lunar day or the hour branch. Month and day counts are
//! 1-based, so "month − 1" steps are applied from the month-1 position.

use ziwei_base::{EarthlyBranch, HeavenlyStem, Star, Triad};

/// Inputs shared by the auxiliary-star rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxiliaryInputs {
    pub year_stem: HeavenlyStem,
    pub year_branch: EarthlyBranch,
    /// Lunar month 1–12.
    pub lunar_month: u8,
    /// Lunar day 1–30.
    pub lunar_day: u8,
    pub hour: EarthlyBranch,
}

/// Number of stars placed by [`place_auxiliary_stars`].
pub const AUXILIARY_STAR_COUNT: usize = 22;

fn hour_steps(hour: EarthlyBranch) -> i32 {
    hour.index() as i32
}

fn month_steps(month: u8) -> i32 {
    month as i32 - 1
}

/// 文昌: counted backward from 戌 by hour.
pub fn wen_chang(hour: EarthlyBranch) -> EarthlyBranch {
    EarthlyBranch::Xu.offset(-hour_steps(hour))
}

/// 文曲: counted forward from 辰 by hour.
pub fn wen_qu(hour: EarthlyBranch) -> EarthlyBranch {
    EarthlyBranch::Chen.offset(hour_steps(hour))
}

/// 左辅: forward from 辰 by month.
pub fn zuo_fu(month: u8) -> EarthlyBranch {
    EarthlyBranch::Chen.offset(month_steps(month))
}

/// 右弼: backward from 戌 by month.
pub fn you_bi(month: u8) -> EarthlyBranch {
    EarthlyBranch::Xu.offset(-month_steps(month))
}

/// 三台: forward from 左辅 by day.
pub fn san_tai(month: u8, day: u8) -> EarthlyBranch {
    zuo_fu(month).offset(day as i32 - 1)
}

/// 八座: backward from 右弼 by day.
pub fn ba_zuo(month: u8, day: u8) -> EarthlyBranch {
    you_bi(month).offset(-(day as i32 - 1))
}

/// 天魁 and 天钺 by year stem.
pub const fn kui_yue(stem: HeavenlyStem) -> (EarthlyBranch, EarthlyBranch) {
    use EarthlyBranch as B;
    match stem {
        HeavenlyStem::Jia | HeavenlyStem::Wu | HeavenlyStem::Geng => (B::Chou, B::Wei),
        HeavenlyStem::Yi | HeavenlyStem::Ji => (B::Zi, B::Shen),
        HeavenlyStem::Bing | HeavenlyStem::Ding => (B::Hai, B::You),
        HeavenlyStem::Xin => (B::Yin, B::Wu),
        HeavenlyStem::Ren | HeavenlyStem::Gui => (B::Mao, B::Si),
    }
}

/// 禄存 by year stem.
pub const fn lu_cun(stem: HeavenlyStem) -> EarthlyBranch {
    use EarthlyBranch as B;
    match stem {
        HeavenlyStem::Jia => B::Yin,
        HeavenlyStem::Yi => B::Mao,
        HeavenlyStem::Bing | HeavenlyStem::Wu => B::Si,
        HeavenlyStem::Ding | HeavenlyStem::Ji => B::Wu,
        HeavenlyStem::Geng => B::Shen,
        HeavenlyStem::Xin => B::You,
        HeavenlyStem::Ren => B::Hai,
        HeavenlyStem::Gui => B::Zi,
    }
}

/// 擎羊 sits one step after 禄存, 陀罗 one step before.
pub fn qing_yang_tuo_luo(stem: HeavenlyStem) -> (EarthlyBranch, EarthlyBranch) {
    let lu = lu_cun(stem);
    (lu.offset(1), lu.offset(-1))
}

/// 天马 by the year branch's triad.
pub const fn tian_ma(year_branch: EarthlyBranch) -> EarthlyBranch {
    match year_branch.triad() {
        Triad::YinWuXu => EarthlyBranch::Shen,
        Triad::ShenZiChen => EarthlyBranch::Yin,
        Triad::SiYouChou => EarthlyBranch::Hai,
        Triad::HaiMaoWei => EarthlyBranch::Si,
    }
}

/// 火星: triad base, then forward by hour.
pub fn huo_xing(year_branch: EarthlyBranch, hour: EarthlyBranch) -> EarthlyBranch {
    let base = match year_branch.triad() {
        Triad::YinWuXu => EarthlyBranch::Chou,
        Triad::ShenZiChen => EarthlyBranch::Yin,
        Triad::SiYouChou => EarthlyBranch::Mao,
        Triad::HaiMaoWei => EarthlyBranch::You,
    };
    base.offset(hour_steps(hour))
}

/// 铃星: 卯 for 寅午戌 years, 戌 otherwise, then forward by hour.
pub fn ling_xing(year_branch: EarthlyBranch, hour: EarthlyBranch) -> EarthlyBranch {
    let base = match year_branch.triad() {
        Triad::YinWuXu => EarthlyBranch::Mao,
        Triad::ShenZiChen | Triad::SiYouChou | Triad::HaiMaoWei => EarthlyBranch::Xu,
    };
    base.offset(hour_steps(hour))
}

/// 地空: backward from 亥 by hour.
pub fn di_kong(hour: EarthlyBranch) -> EarthlyBranch {
    EarthlyBranch::Hai.offset(-hour_steps(hour))
}

/// 地劫: forward from 亥 by hour.
pub fn di_jie(hour: EarthlyBranch) -> EarthlyBranch {
    EarthlyBranch::Hai.offset(hour_steps(hour))
}

/// 天刑: forward from 酉 by month.
pub fn tian_xing(month: u8) -> EarthlyBranch {
    EarthlyBranch::You.offset(month_steps(month))
}

/// 天姚: forward from 丑 by month.
pub fn tian_yao(month: u8) -> EarthlyBranch {
    EarthlyBranch::Chou.offset(month_steps(month))
}

/// 天空: one step after the year branch.
pub fn tian_kong(year_branch: EarthlyBranch) -> EarthlyBranch {
    year_branch.offset(1)
}

/// 红鸾: backward from 卯 by year branch.
pub fn hong_luan(year_branch: EarthlyBranch) -> EarthlyBranch {
    EarthlyBranch::Mao.offset(-(year_branch.index() as i32))
}

/// 天喜: opposite 红鸾.
pub fn tian_xi(year_branch: EarthlyBranch) -> EarthlyBranch {
    hong_luan(year_branch).opposite()
}

/// 咸池 by the year branch's triad.
pub const fn xian_chi(year_branch: EarthlyBranch) -> EarthlyBranch {
    match year_branch.triad() {
        Triad::YinWuXu => EarthlyBranch::Mao,
        Triad::ShenZiChen => EarthlyBranch::You,
        Triad::SiYouChou => EarthlyBranch::Wu,
        Triad::HaiMaoWei => EarthlyBranch::Zi,
    }
}

/// All 22 non-main stars with their branches, in catalogue order.
pub fn place_auxiliary_stars(i: &AuxiliaryInputs) -> [(Star, EarthlyBranch); AUXILIARY_STAR_COUNT] {
    let (kui, yue) = kui_yue(i.year_stem);
    let (yang, tuo) = qing_yang_tuo_luo(i.year_stem);
    [
        (Star::WenChang, wen_chang(i.hour)),
        (Star::WenQu, wen_qu(i.hour)),
        (Star::ZuoFu, zuo_fu(i.lunar_month)),
        (Star::YouBi, you_bi(i.lunar_month)),
        (Star::TianKui, kui),
        (Star::TianYue, yue),
        (Star::LuCun, lu_cun(i.year_stem)),
        (Star::TianMa, tian_ma(i.year_branch)),
        (Star::SanTai, san_tai(i.lunar_month, i.lunar_day)),
        (Star::BaZuo, ba_zuo(i.lunar_month, i.lunar_day)),
        (Star::QingYang, yang),
        (Star::TuoLuo, tuo),
        (Star::HuoXing, huo_xing(i.year_branch, i.hour)),
        (Star::LingXing, ling_xing(i.year_branch, i.hour)),
        (Star::DiKong, di_kong(i.hour)),
        (Star::DiJie, di_jie(i.hour)),
        (Star::TianXing, tian_xing(i.lunar_month)),
        (Star::TianKong, tian_kong(i.year_branch)),
        (Star::HongLuan, hong_luan(i.year_branch)),
        (Star::TianXi, tian_xi(i.year_branch)),
        (Star::TianYao, tian_yao(i.lunar_month)),
        (Star::XianChi, xian_chi(i.year_branch)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::{ALL_BRANCHES, ALL_STARS};

    fn golden() -> AuxiliaryInputs {
        AuxiliaryInputs {
            year_stem: HeavenlyStem::Geng,
            year_branch: EarthlyBranch::Wu,
            lunar_month: 4,
            lunar_day: 21,
            hour: EarthlyBranch::Chen,
        }
    }

    #[test]
    fn golden_positions() {
        use EarthlyBranch::*;
        let placed = place_auxiliary_stars(&golden());
        let expect = [
            (Star::WenChang, Wu),
            (Star::WenQu, Shen),
            (Star::ZuoFu, Wei),
            (Star::YouBi, Wei),
            (Star::TianKui, Chou),
            (Star::TianYue, Wei),
            (Star::LuCun, Shen),
            (Star::TianMa, Shen),
            (Star::SanTai, Mao),
            (Star::BaZuo, Hai),
            (Star::QingYang, You),
            (Star::TuoLuo, Wei),
            (Star::HuoXing, Si),
            (Star::LingXing, Wei),
            (Star::DiKong, Wei),
            (Star::DiJie, Mao),
            (Star::TianXing, Zi),
            (Star::TianKong, Wei),
            (Star::HongLuan, You),
            (Star::TianXi, Mao),
            (Star::TianYao, Chen),
            (Star::XianChi, Mao),
        ];
        assert_eq!(placed, expect);
    }

    #[test]
    fn catalogue_order_after_main_stars() {
        let placed = place_auxiliary_stars(&golden());
        for (i, (star, _)) in placed.iter().enumerate() {
            assert_eq!(*star, ALL_STARS[14 + i]);
        }
    }

    #[test]
    fn chang_qu_meet_at_wei_and_chou() {
        // 文昌 and 文曲 share a palace only at the 卯 and 酉 hours.
        for h in ALL_BRANCHES {
            let same = wen_chang(h) == wen_qu(h);
            assert_eq!(same, matches!(h, EarthlyBranch::Mao | EarthlyBranch::You));
        }
        assert_eq!(wen_chang(EarthlyBranch::Mao), EarthlyBranch::Wei);
        assert_eq!(wen_chang(EarthlyBranch::You), EarthlyBranch::Chou);
    }

    #[test]
    fn kong_jie_meet_at_hai_and_si() {
        assert_eq!(di_kong(EarthlyBranch::Zi), di_jie(EarthlyBranch::Zi));
        assert_eq!(di_kong(EarthlyBranch::Wu), EarthlyBranch::Si);
        assert_eq!(di_jie(EarthlyBranch::Wu), EarthlyBranch::Si);
    }

    #[test]
    fn yang_tuo_flank_lu_cun() {
        for s in ziwei_base::ALL_STEMS {
            let (yang, tuo) = qing_yang_tuo_luo(s);
            assert_eq!(yang.offset(-2), tuo);
        }
    }

    #[test]
    fn ling_xing_non_fire_years_start_at_xu() {
        assert_eq!(ling_xing(EarthlyBranch::Zi, EarthlyBranch::Zi), EarthlyBranch::Xu);
        assert_eq!(ling_xing(EarthlyBranch::Hai, EarthlyBranch::Chou), EarthlyBranch::Hai);
        assert_eq!(huo_xing(EarthlyBranch::Mao, EarthlyBranch::Zi), EarthlyBranch::You);
    }
}
