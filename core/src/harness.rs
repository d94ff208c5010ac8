//! Brackets a workload between two clock readings.

use crate::{
    clock::{Clock, Stopwatch},
    perf::scenarios::Benchmark,
    report::Report,
};
use anyhow::{Context, Result};
use std::hint::black_box;
use std::io::Write;
use tracing::{debug, info};

/// Runs `benchmark` at size `n` on `clock` and times it.
pub fn measure(benchmark: Benchmark, n: u64, clock: Clock) -> Result<Report> {
    debug!(benchmark = benchmark.key(), n, clock = clock.label(), "starting workload");
    let watch = Stopwatch::start(clock)?;
    let value = black_box(benchmark.run(black_box(n)))
        .with_context(|| format!("{} workload failed", benchmark))?;
    let elapsed = watch.elapsed()?;
    info!(
        benchmark = benchmark.key(),
        n,
        elapsed_secs = elapsed.as_secs_f64(),
        value,
        "workload finished"
    );
    Ok(Report {
        benchmark,
        size: n,
        clock,
        elapsed,
        value,
    })
}

/// Entry point of the standalone executables: default size, process clock,
/// one line on stdout.
pub fn run_standalone(benchmark: Benchmark) -> Result<()> {
    let report = measure(benchmark, benchmark.default_size(), Clock::Process)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", report).context("write report to stdout")?;
    out.flush()?;
    Ok(())
}
