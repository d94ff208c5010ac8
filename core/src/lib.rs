pub mod clock;
pub mod harness;
pub mod perf;
pub mod report;
pub mod trace;
pub mod workload;


pub use clock::{Clock, Stopwatch};
pub use harness::{measure, run_standalone};
pub use perf::scenarios::Benchmark;
pub use report::{Format, Report};
