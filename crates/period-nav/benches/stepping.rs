use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use period_nav::calendar::{add_days, add_months};
use period_nav::config::{NavigatorConfig, PartialUpdate};
use period_nav::time_input::normalize;
use period_nav::Mode;

fn bench_calendar(c: &mut Criterion) {
    c.bench_function("add_days +1", |b| {
        b.iter(|| add_days(black_box("2024-02-28"), black_box(1)))
    });
    c.bench_function("add_months -13", |b| {
        b.iter(|| add_months(black_box("2024-01"), black_box(-13)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let config = NavigatorConfig::new(Mode::Day, "/wtm/log/{value}?day={compact}")
        .with_partial(PartialUpdate::new("#log-table"));
    c.bench_function("resolve_url", |b| {
        b.iter(|| config.resolve_url(black_box("2024-05-01")))
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize six digits", |b| {
        b.iter(|| normalize(black_box("145601")))
    });
    c.bench_function("normalize noisy input", |b| {
        b.iter(|| normalize(black_box(" 14h 56m 01s ")))
    });
}

criterion_group!(benches, bench_calendar, bench_resolve, bench_normalize);
criterion_main!(benches);
