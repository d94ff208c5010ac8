//! Result encoding: the one-line text form printed by every benchmark, plus
//! JSON and CSV batches for the `hbench` runner.

use crate::{clock::Clock, perf::scenarios::Benchmark};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub benchmark: Benchmark,
    pub size: u64,
    pub clock: Clock,
    pub elapsed: Duration,
    pub value: i64,
}

impl Report {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// `elapsed: <seconds>s | <value>`
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut secs = ryu::Buffer::new();
        let mut value = itoa::Buffer::new();
        write!(
            f,
            "elapsed: {}s | {}",
            secs.format(self.elapsed_secs()),
            value.format(self.value)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct BenchmarkMetrics {
    pub key: &'static str,
    pub title: &'static str,
    pub n: u64,
    pub elapsed_secs: f64,
    pub value: i64,
}

impl From<&Report> for BenchmarkMetrics {
    fn from(report: &Report) -> Self {
        Self {
            key: report.benchmark.key(),
            title: report.benchmark.title(),
            n: report.size,
            elapsed_secs: report.elapsed_secs(),
            value: report.value,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub generated_at: String,
    pub clock: Clock,
    pub results: Vec<BenchmarkMetrics>,
}

impl RunRecord {
    pub fn new(timestamp: DateTime<Utc>, clock: Clock, reports: &[Report]) -> Self {
        Self {
            generated_at: timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            clock,
            results: reports.iter().map(BenchmarkMetrics::from).collect(),
        }
    }
}

pub fn write_reports<W: Write>(writer: &mut W, format: Format, clock: Clock, reports: &[Report]) -> Result<()> {
    match format {
        Format::Text => write_text(writer, reports),
        Format::Json => write_json(writer, &RunRecord::new(Utc::now(), clock, reports)),
        Format::Csv => write_csv(writer, reports),
    }
}

pub fn write_text<W: Write>(writer: &mut W, reports: &[Report]) -> Result<()> {
    for report in reports {
        writeln!(writer, "{}", report).context("write report line")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, record: &RunRecord) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, record).context("serialize run record")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(writer: &mut W, reports: &[Report]) -> Result<()> {
    writeln!(writer, "benchmark,n,clock,elapsed_secs,value")?;
    for report in reports {
        writeln!(
            writer,
            "{},{},{},{:.9},{}",
            report.benchmark,
            report.size,
            report.clock,
            report.elapsed_secs(),
            report.value
        )?;
    }
    writer.flush()?;
    Ok(())
}
