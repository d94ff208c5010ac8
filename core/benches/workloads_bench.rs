use criterion::{Criterion, criterion_group, criterion_main};
use hbench_core::perf::scenarios::SMOKE_SCENARIOS;
use hbench_core::workload;
use std::hint::black_box;

fn bench_smoke_scenarios(c: &mut Criterion) {
    for scenario in SMOKE_SCENARIOS {
        c.bench_function(&scenario.benchmark.bench_case_name(), move |b| {
            b.iter(|| {
                let value = scenario
                    .verify()
                    .expect("smoke scenario failed during benchmarking");
                black_box(value);
            });
        });
    }
}

// Larger inputs for the two algorithms whose cost grows fastest.
fn bench_scaled_workloads(c: &mut Criterion) {
    c.bench_function("fib_20", |b| b.iter(|| black_box(workload::fib(black_box(20)))));
    c.bench_function("primes_below_2000", |b| {
        b.iter(|| black_box(workload::primes_below(black_box(2_000))))
    });
    c.bench_function("reverse_100k", |b| {
        let mut data = workload::sequence(100_000);
        b.iter(|| {
            workload::reverse(&mut data);
            black_box(data.first().copied());
        })
    });
}

criterion_group!(workloads, bench_smoke_scenarios, bench_scaled_workloads);
criterion_main!(workloads);
