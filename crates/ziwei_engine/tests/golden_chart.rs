//! Golden chart: 1990-05-15 07:00, male, Gregorian input.
//!
//! Lunar 1990-04-21, pillars 庚午 辛巳 庚辰 庚辰.

use ziwei_base::{
    Brightness, EarthlyBranch, FiveElementsBureau, HeavenlyStem, PalaceName, Star, Transformation,
};
use ziwei_engine::{Chart, Direction, assemble};
use ziwei_time::{BirthRecord, Gender, LunarDate, TableCalendar};

use EarthlyBranch::*;

fn chart(gender: Gender) -> Chart {
    let cal = TableCalendar::bundled().unwrap();
    assemble(&BirthRecord::solar(1990, 5, 15, 7, gender), &cal).unwrap()
}

#[test]
fn pillars_and_frame() {
    let c = chart(Gender::Male);
    assert_eq!(c.birth.lunar, LunarDate::new(1990, 4, 21, false));
    let pillars: Vec<String> = c.birth.pillars().iter().map(|p| p.name()).collect();
    assert_eq!(pillars, ["庚午", "辛巳", "庚辰", "庚辰"]);
    assert_eq!(c.life_branch(), Chou);
    assert_eq!(c.body_branch(), You);
    assert!(!c.frame.body_in_life_palace());
    assert_eq!(c.bureau, FiveElementsBureau::Fire6);
    assert_eq!(c.frame.laiyin, Chen);
}

/// A birth in the leap fifth month of 1990 charts as the fifth month.
#[test]
fn leap_month_charts_as_base_month() {
    let cal = TableCalendar::bundled().unwrap();
    let leap = assemble(&BirthRecord::lunar(1990, 5, 1, true, 7, Gender::Male), &cal).unwrap();
    let regular =
        assemble(&BirthRecord::lunar(1990, 5, 1, false, 7, Gender::Male), &cal).unwrap();
    assert!(leap.birth.lunar.is_leap);
    assert_ne!(leap.birth.solar, regular.birth.solar);
    assert_eq!(leap.birth.month_pillar.name(), "壬午");
    assert_eq!(leap.birth.month_pillar, regular.birth.month_pillar);

    assert_eq!(leap.frame, regular.frame);
    assert_eq!(leap.life_branch(), Yin);
    assert_eq!(leap.body_branch(), Xu);
    for (star, branch) in [
        (Star::ZuoFu, Shen),
        (Star::YouBi, Wu),
        (Star::TianXing, Chou),
        (Star::TianYao, Si),
    ] {
        assert_eq!(leap.star_branch(star), Some(branch), "{star}");
        assert_eq!(regular.star_branch(star), Some(branch), "{star}");
    }
    assert_eq!(leap.placement(), regular.placement());
    assert_eq!(leap.palaces, regular.palaces);
}

#[test]
fn main_star_positions() {
    let c = chart(Gender::Male);
    let expect = [
        (Star::ZiWei, Yin),
        (Star::TianJi, Chou),
        (Star::TaiYang, Hai),
        (Star::WuQu, Xu),
        (Star::TianTong, You),
        (Star::LianZhen, Wu),
        (Star::TianFu, Yin),
        (Star::TaiYin, Mao),
        (Star::TanLang, Chen),
        (Star::JuMen, Si),
        (Star::TianXiang, Wu),
        (Star::TianLiang, Wei),
        (Star::QiSha, Shen),
        (Star::PoJun, Zi),
    ];
    for (star, branch) in expect {
        assert_eq!(c.star_branch(star), Some(branch), "{star}");
        assert!(c.palace(branch).contains(star));
    }
}

#[test]
fn palace_names() {
    let c = chart(Gender::Male);
    let expect = [
        (Chou, PalaceName::Life),
        (Zi, PalaceName::Siblings),
        (Hai, PalaceName::Spouse),
        (Xu, PalaceName::Children),
        (You, PalaceName::Wealth),
        (Shen, PalaceName::Health),
        (Wei, PalaceName::Travel),
        (Wu, PalaceName::Friends),
        (Si, PalaceName::Career),
        (Chen, PalaceName::Property),
        (Mao, PalaceName::Fortune),
        (Yin, PalaceName::Parents),
    ];
    for (branch, name) in expect {
        assert_eq!(c.palace(branch).name, name, "{branch}");
    }
}

#[test]
fn palace_stems_for_geng_year() {
    let c = chart(Gender::Male);
    let expect = [
        (Yin, HeavenlyStem::Wu),
        (Mao, HeavenlyStem::Ji),
        (Chen, HeavenlyStem::Geng),
        (Si, HeavenlyStem::Xin),
        (Wu, HeavenlyStem::Ren),
        (Wei, HeavenlyStem::Gui),
        (Shen, HeavenlyStem::Jia),
        (You, HeavenlyStem::Yi),
        (Xu, HeavenlyStem::Bing),
        (Hai, HeavenlyStem::Ding),
        (Zi, HeavenlyStem::Wu),
        (Chou, HeavenlyStem::Ji),
    ];
    for (branch, stem) in expect {
        assert_eq!(c.palace(branch).stem, stem, "{branch}");
    }
}

#[test]
fn natal_sihua() {
    let c = chart(Gender::Male);
    let s = &c.natal_sihua;
    let cases = [
        (Transformation::Lu, Star::TaiYang, Hai, PalaceName::Spouse),
        (Transformation::Quan, Star::WuQu, Xu, PalaceName::Children),
        (Transformation::Ke, Star::TaiYin, Mao, PalaceName::Fortune),
        (Transformation::Ji, Star::TianTong, You, PalaceName::Wealth),
    ];
    for (t, star, branch, palace) in cases {
        let e = s.get(t);
        assert_eq!((e.star, e.branch, e.palace), (star, branch, palace), "{t}");
    }
}

#[test]
fn auxiliary_positions() {
    let c = chart(Gender::Male);
    let expect = [
        (Star::WenChang, Wu),
        (Star::WenQu, Shen),
        (Star::ZuoFu, Wei),
        (Star::YouBi, Wei),
        (Star::TianKui, Chou),
        (Star::TianYue, Wei),
        (Star::LuCun, Shen),
        (Star::QingYang, You),
        (Star::TuoLuo, Wei),
        (Star::HuoXing, Si),
        (Star::LingXing, Wei),
        (Star::DiKong, Wei),
        (Star::DiJie, Mao),
        (Star::HongLuan, You),
        (Star::TianXi, Mao),
    ];
    for (star, branch) in expect {
        assert_eq!(c.star_branch(star), Some(branch), "{star}");
    }
}

#[test]
fn masters_and_brightness() {
    let c = chart(Gender::Male);
    assert_eq!(c.ming_zhu, Star::JuMen);
    assert_eq!(c.shen_zhu, Star::LingXing);
    let ziwei = c
        .palace(Yin)
        .stars
        .iter()
        .find(|s| s.star == Star::ZiWei)
        .unwrap();
    assert_eq!(ziwei.brightness, Some(Brightness::De));
}

#[test]
fn life_palace_not_empty() {
    let c = chart(Gender::Male);
    assert!(c.empty_life_palace.is_none());
    assert!(c.palace(Chou).relations.has_main_star);
}

#[test]
fn male_periods_forward() {
    let c = chart(Gender::Male);
    assert_eq!(c.direction, Direction::Forward);
    let p: Vec<(EarthlyBranch, String, u16, u16)> = c.major_periods[..4]
        .iter()
        .map(|p| (p.branch, p.ganzhi.name(), p.start_age, p.end_age))
        .collect();
    assert_eq!(
        p,
        vec![
            (Chou, "己丑".to_string(), 6, 15),
            (Yin, "戊寅".to_string(), 16, 25),
            (Mao, "己卯".to_string(), 26, 35),
            (Chen, "庚辰".to_string(), 36, 45),
        ]
    );
}

#[test]
fn female_periods_backward() {
    let c = chart(Gender::Female);
    assert_eq!(c.direction, Direction::Backward);
    assert_eq!(c.major_periods[1].branch, Zi);
    assert_eq!(c.major_periods[1].ganzhi.name(), "戊子");
    // Natal placement does not depend on gender.
    let m = chart(Gender::Male);
    assert_eq!(c.placement(), m.placement());
}

#[test]
fn serializes_to_json() {
    let c = chart(Gender::Male);
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["bureau"], "Fire6");
    assert_eq!(v["palaces"].as_array().map(Vec::len), Some(12));
    assert_eq!(v["frame"]["life"], "Chou");
    assert_eq!(v["frame"]["body_in_life"], false);

    // 子 hour: the Body Palace sits in the Life Palace.
    let cal = TableCalendar::bundled().unwrap();
    let zi = assemble(&BirthRecord::solar(1990, 5, 15, 0, Gender::Male), &cal).unwrap();
    let v = serde_json::to_value(&zi).unwrap();
    assert_eq!(v["frame"]["body_in_life"], true);
    assert_eq!(v["frame"]["life"], v["frame"]["body"]);
}
