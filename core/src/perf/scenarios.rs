use crate::workload;
use anyhow::{Context, Result, anyhow};
use std::fmt;

/// Number of `fib` calls summed by the fib benchmark.
pub const FIB_REPEAT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Benchmark {
    Factors,
    Fib,
    List,
    Loop,
    Objects,
    Primes,
}

impl Benchmark {
    pub const ALL: [Benchmark; 6] = [
        Benchmark::Factors,
        Benchmark::Fib,
        Benchmark::List,
        Benchmark::Loop,
        Benchmark::Objects,
        Benchmark::Primes,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Benchmark::Factors => "factors",
            Benchmark::Fib => "fib",
            Benchmark::List => "list",
            Benchmark::Loop => "loop",
            Benchmark::Objects => "objects",
            Benchmark::Primes => "primes",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Benchmark::Factors => "Divisors by trial division",
            Benchmark::Fib => "Unmemoized recursive Fibonacci",
            Benchmark::List => "In-place two-pointer list reversal",
            Benchmark::Loop => "Append loop and index-by-value sum",
            Benchmark::Objects => "String-keyed table churn",
            Benchmark::Primes => "Primality by unbounded trial division",
        }
    }

    /// Workload size used by the standalone executables. For `fib` this is
    /// the Fibonacci argument rather than a sequence length.
    pub fn default_size(self) -> u64 {
        match self {
            Benchmark::Factors => 50_000_000,
            Benchmark::Fib => 30,
            Benchmark::List => 20_000_000,
            Benchmark::Loop => 10_000_000,
            Benchmark::Objects => 5_000_000,
            Benchmark::Primes => 30_000,
        }
    }

    pub fn bench_case_name(self) -> String {
        format!("{}_smoke", self.key())
    }

    /// Runs the workload at size `n` and returns its sanity value.
    pub fn run(self, n: u64) -> Result<i64> {
        let n = i64::try_from(n).with_context(|| format!("{} size {} does not fit in i64", self.key(), n))?;
        match self {
            Benchmark::Factors => workload::factors(n)
                .last()
                .copied()
                .ok_or_else(|| anyhow!("factors produced no divisors for {}", n)),
            Benchmark::Fib => Ok(workload::fib_sum(n, FIB_REPEAT)),
            Benchmark::List => {
                let mut data = workload::sequence(n);
                workload::reverse(&mut data);
                data.first().copied().ok_or_else(|| anyhow!("list is empty after reversal"))
            }
            Benchmark::Loop => {
                let data = workload::push_sequence(n);
                workload::index_sum(&data).context("sum loop sequence")
            }
            Benchmark::Objects => {
                let objects = workload::build_objects(n, &workload::OBJECT_KEYS);
                let last = objects.last().ok_or_else(|| anyhow!("no objects were built"))?;
                let key = workload::OBJECT_KEYS[0];
                last.get(key)
                    .copied()
                    .ok_or_else(|| anyhow!("last object is missing key '{}'", key))
            }
            Benchmark::Primes => workload::primes_below(n)
                .last()
                .copied()
                .ok_or_else(|| anyhow!("no primes below {}", n)),
        }
    }

    /// Reduced-size scenario with a known sanity value.
    pub fn smoke(self) -> &'static SmokeScenario {
        &SMOKE_SCENARIOS[self as usize]
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone)]
pub struct SmokeScenario {
    pub benchmark: Benchmark,
    pub size: u64,
    pub expected: i64,
}

impl SmokeScenario {
    pub fn run(&self) -> Result<i64> {
        self.benchmark.run(self.size)
    }

    /// Runs the scenario and checks its sanity value.
    pub fn verify(&self) -> Result<i64> {
        let actual = self
            .run()
            .with_context(|| format!("run {} smoke scenario", self.benchmark))?;
        if actual == self.expected {
            Ok(actual)
        } else {
            Err(anyhow!(
                "{} (n = {}): expected {} but observed {}",
                self.benchmark,
                self.size,
                self.expected,
                actual
            ))
        }
    }
}

// Indexed by `Benchmark` discriminant.
pub static SMOKE_SCENARIOS: &[SmokeScenario] = &[
    SmokeScenario {
        benchmark: Benchmark::Factors,
        size: 12,
        expected: 12,
    },
    SmokeScenario {
        benchmark: Benchmark::Fib,
        size: 10,
        expected: 550,
    },
    SmokeScenario {
        benchmark: Benchmark::List,
        size: 5,
        expected: 4,
    },
    SmokeScenario {
        benchmark: Benchmark::Loop,
        size: 5,
        expected: 10,
    },
    SmokeScenario {
        benchmark: Benchmark::Objects,
        size: 2,
        expected: 0,
    },
    SmokeScenario {
        benchmark: Benchmark::Primes,
        size: 20,
        expected: 19,
    },
];
