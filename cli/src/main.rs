use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use hbench_core::{
    clock::Clock,
    harness::measure,
    perf::scenarios::Benchmark,
    report::{Format, Report, write_reports},
    trace::maybe_init_tracing,
};


#[derive(Debug, Parser)]
#[command(
    name = "hbench",
    author,
    version,
    about = "Process-time micro-benchmarks",
    long_about = None,
    after_help = "Set HBENCH_TRACE=1 (or a filter such as hbench_core=debug) to log to stderr."
)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BenchmarkArg {
    Factors,
    Fib,
    List,
    Loop,
    Objects,
    Primes,
}

impl From<BenchmarkArg> for Benchmark {
    fn from(value: BenchmarkArg) -> Self {
        match value {
            BenchmarkArg::Factors => Benchmark::Factors,
            BenchmarkArg::Fib => Benchmark::Fib,
            BenchmarkArg::List => Benchmark::List,
            BenchmarkArg::Loop => Benchmark::Loop,
            BenchmarkArg::Objects => Benchmark::Objects,
            BenchmarkArg::Primes => Benchmark::Primes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClockArg {
    Process,
    Wall,
}

impl From<ClockArg> for Clock {
    fn from(value: ClockArg) -> Self {
        match value {
            ClockArg::Process => Clock::Process,
            ClockArg::Wall => Clock::Wall,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Csv,
}

impl From<FormatArg> for Format {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => Format::Text,
            FormatArg::Json => Format::Json,
            FormatArg::Csv => Format::Csv,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Time benchmarks and report elapsed time with each sanity value.
    Run {
        /// Benchmarks to run, in order (default: all)
        #[arg(value_enum, value_name = "BENCH")]
        benchmarks: Vec<BenchmarkArg>,
        /// Override the workload size of every selected benchmark
        #[arg(long, short = 'n')]
        n: Option<u64>,
        #[arg(long, value_enum, default_value_t = ClockArg::Process)]
        clock: ClockArg,
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
        /// Write the report here instead of stdout
        #[arg(long, value_name = "PATH", value_parser = parse_sanitized_path)]
        output: Option<PathBuf>,
    },
    /// List benchmarks with their default sizes.
    List,
    /// Run reduced-size scenarios and check their sanity values.
    Verify {
        #[arg(value_enum, value_name = "BENCH")]
        benchmarks: Vec<BenchmarkArg>,
    },
}

fn sanitize_path(raw: &str) -> anyhow::Result<PathBuf> {
    let p = Path::new(raw);

    for comp in p.components() {
        if matches!(comp, Component::ParentDir) {
            return Err(anyhow::anyhow!(
                "Parent directory components ('..') are not allowed in file paths."
            ));
        }
    }

    Ok(p.to_path_buf())
}

fn parse_sanitized_path(raw: &str) -> Result<PathBuf, String> {
    sanitize_path(raw).map_err(|e| e.to_string())
}

fn selected(benchmarks: &[BenchmarkArg]) -> Vec<Benchmark> {
    if benchmarks.is_empty() {
        Benchmark::ALL.to_vec()
    } else {
        benchmarks.iter().copied().map(Benchmark::from).collect()
    }
}

fn run_benchmarks(benchmarks: &[Benchmark], n: Option<u64>, clock: Clock) -> anyhow::Result<Vec<Report>> {
    benchmarks
        .iter()
        .map(|&bench| measure(bench, n.unwrap_or_else(|| bench.default_size()), clock))
        .collect()
}

fn emit(format: Format, clock: Clock, reports: &[Report], output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_reports(&mut writer, format, clock, reports).with_context(|| format!("write {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_reports(&mut writer, format, clock, reports)
        }
    }
}

fn list_benchmarks<W: Write>(writer: &mut W) -> anyhow::Result<()> {
    for bench in Benchmark::ALL {
        writeln!(writer, "{:<8} {:>10}  {}", bench.key(), bench.default_size(), bench.title())?;
    }
    Ok(())
}

fn verify_benchmarks<W: Write>(writer: &mut W, benchmarks: &[Benchmark]) -> anyhow::Result<()> {
    for bench in benchmarks {
        let scenario = bench.smoke();
        scenario.verify()?;
        writeln!(writer, "ok {} (n = {}) -> {}", bench, scenario.size, scenario.expected)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();
    let args = CliArgs::parse();

    match args.command {
        Commands::Run {
            benchmarks,
            n,
            clock,
            format,
            output,
        } => {
            let clock = Clock::from(clock);
            let reports = run_benchmarks(&selected(&benchmarks), n, clock)?;
            tracing::debug!(count = reports.len(), ?format, "emitting reports");
            emit(format.into(), clock, &reports, output.as_deref())?;
        }
        Commands::List => list_benchmarks(&mut io::stdout().lock())?,
        Commands::Verify { benchmarks } => {
            verify_benchmarks(&mut io::stdout().lock(), &selected(&benchmarks))?;
        }
    }

    Ok(())
}
