use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_rs::{BirthRecord, ChartKey, ChartService, Gender, Selection, ServiceConfig};

fn service_bench(c: &mut Criterion) {
    let svc = ChartService::new(&ServiceConfig::default()).expect("service");
    let record = BirthRecord::solar(1990, 5, 15, 7, Gender::Male);
    let selection = Selection::natal().with_period(2).with_year(2024);
    svc.view(&record, selection).expect("warm cache");

    let mut group = c.benchmark_group("service");
    group.bench_function("view_cache_hit", |b| {
        b.iter(|| svc.view(black_box(&record), black_box(selection)))
    });
    group.bench_function("chart_cold", |b| {
        b.iter(|| {
            svc.clear_cache();
            svc.chart(black_box(&record))
        })
    });
    group.bench_function("key_fingerprint", |b| {
        let key = ChartKey::new(&record, selection);
        b.iter(|| black_box(key).fingerprint())
    });
    group.finish();
}

criterion_group!(benches, service_bench);
criterion_main!(benches);
