//! Benchmark registry shared by the standalone executables, the `hbench`
//! runner and the criterion benches.
//!
//! Keeping sizes and expected sanity values in one table means every tool
//! runs the same scenarios.

pub mod scenarios;
