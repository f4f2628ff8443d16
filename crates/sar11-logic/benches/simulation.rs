use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sar11_logic::analysis::analyze;
use sar11_logic::config::StressSeries;
use sar11_logic::simulation::run_simulation;

fn bench_default_run(c: &mut Criterion) {
    c.bench_function("run_default_100", |b| {
        b.iter(|| run_simulation(black_box(1000), None, black_box(100)))
    });
}

fn bench_long_run_and_analyze(c: &mut Criterion) {
    let series = StressSeries::new((0..1000).map(|i| (i % 10) as f64 / 10.0).collect())
        .expect("non-empty series");
    c.bench_function("run_and_analyze_10k", |b| {
        b.iter(|| {
            let result = run_simulation(black_box(10), Some(&series), 10_000);
            analyze(&result)
        })
    });
}

criterion_group!(benches, bench_default_run, bench_long_run_and_analyze);
criterion_main!(benches);
