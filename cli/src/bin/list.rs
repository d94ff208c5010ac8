use hbench_core::{perf::scenarios::Benchmark, run_standalone, trace::maybe_init_tracing};

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();
    run_standalone(Benchmark::List)
}
