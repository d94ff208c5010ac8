//! Clocks used to bracket a workload.
//!
//! The process clock reads CPU time consumed by this process
//! (`CLOCK_PROCESS_CPUTIME_ID`), so time spent descheduled is not counted.
//! The wall clock is a monotonic `Instant`.

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Clock {
    #[default]
    Process,
    Wall,
}

impl Clock {
    pub fn label(self) -> &'static str {
        match self {
            Clock::Process => "process",
            Clock::Wall => "wall",
        }
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy)]
enum Reading {
    Cpu(Duration),
    Wall(Instant),
}

/// A clock reading taken at construction, compared against a second reading
/// by [`Stopwatch::elapsed`].
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    clock: Clock,
    start: Reading,
}

impl Stopwatch {
    pub fn start(clock: Clock) -> Result<Self> {
        Ok(Self {
            clock,
            start: read(clock)?,
        })
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Time since [`Stopwatch::start`]. Never negative.
    pub fn elapsed(&self) -> Result<Duration> {
        match self.start {
            Reading::Cpu(start) => Ok(process_time()?.saturating_sub(start)),
            Reading::Wall(start) => Ok(start.elapsed()),
        }
    }
}

fn read(clock: Clock) -> Result<Reading> {
    match clock {
        Clock::Process => process_time().map(Reading::Cpu),
        Clock::Wall => Ok(Reading::Wall(Instant::now())),
    }
}

/// CPU time consumed by the current process.
#[cfg(unix)]
pub fn process_time() -> Result<Duration> {
    use anyhow::Context;
    use nix::time::{ClockId, clock_gettime};

    let spec = clock_gettime(ClockId::CLOCK_PROCESS_CPUTIME_ID).context("read process cpu clock")?;
    Ok(Duration::from(spec))
}

#[cfg(not(unix))]
pub fn process_time() -> Result<Duration> {
    use std::sync::OnceLock;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    let origin = ORIGIN.get_or_init(|| {
        tracing::warn!("process cpu clock unavailable on this platform; falling back to monotonic time");
        Instant::now()
    });
    Ok(origin.elapsed())
}
