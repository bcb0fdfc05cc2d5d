//! Cached results must equal fresh computation, across threads and evictions.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use ziwei_engine::{assemble, view};
use ziwei_rs::*;

fn fresh(record: &BirthRecord, selection: Selection) -> ChartView {
    let cal = TableCalendar::bundled().unwrap();
    view(Arc::new(assemble(record, &cal).unwrap()), selection).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_cached_equals_fresh(
        year in 1900i32..2101,
        month in 1u8..13,
        day in 1u8..29,
        hour in 0u8..24,
        male: bool,
        period in proptest::option::of(0u8..12),
    ) {
        let gender = if male { Gender::Male } else { Gender::Female };
        let record = BirthRecord::solar(year, month, day, hour, gender);
        let selection = Selection { period, year: None };
        let svc = ChartService::new(&ServiceConfig::with_capacity(4)).unwrap();
        let first = svc.view(&record, selection).unwrap();
        let second = svc.view(&record, selection).unwrap();
        prop_assert!(Arc::ptr_eq(&first, &second));
        prop_assert_eq!(&*first, &fresh(&record, selection));
    }
}

#[test]
fn evicted_entries_recompute_identically() {
    let svc = ChartService::new(&ServiceConfig::with_capacity(2)).unwrap();
    let records: Vec<_> = (1..=5)
        .map(|d| BirthRecord::solar(1995, 8, d, 13, Gender::Female))
        .collect();
    let first: Vec<_> = records.iter().map(|r| svc.chart(r).unwrap()).collect();
    assert!(svc.cache_stats().evictions >= 3);
    for (record, before) in records.iter().zip(&first) {
        assert_eq!(&*svc.chart(record).unwrap(), &**before);
    }
    assert_eq!(svc.cache_stats().len, 2);
}

#[test]
fn concurrent_requests_agree() {
    let svc = Arc::new(ChartService::new(&ServiceConfig::with_capacity(16)).unwrap());
    let record = BirthRecord::solar(1990, 5, 15, 7, Gender::Male);
    let selection = Selection::natal().with_period(3).with_year(2024);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || svc.view(&record, selection).unwrap())
        })
        .collect();
    let views: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expect = fresh(&record, selection);
    for v in &views {
        assert_eq!(&**v, &expect);
    }
    let stats = svc.cache_stats();
    assert_eq!(stats.len, 2);
    assert_eq!(stats.hits + stats.misses, 16);
}

#[test]
fn lunar_and_solar_inputs_share_chart_content() {
    let svc = ChartService::new(&ServiceConfig::default()).unwrap();
    let solar = svc
        .chart(&BirthRecord::solar(1990, 5, 15, 7, Gender::Male))
        .unwrap();
    let lunar = svc
        .chart(&BirthRecord::lunar(1990, 4, 21, false, 7, Gender::Male))
        .unwrap();
    assert!(!Arc::ptr_eq(&solar, &lunar));
    assert_eq!(solar.palaces, lunar.palaces);
    assert_eq!(solar.major_periods, lunar.major_periods);
    assert_eq!(svc.cache_stats().len, 2);
}
