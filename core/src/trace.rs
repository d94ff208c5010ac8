//! Stderr tracing for benchmark runs, switched on by `HBENCH_TRACE`.
//!
//! Benchmarks print their report on stdout, so events never go there.
//! `HBENCH_TRACE=1` logs harness events at info level; any other non-off
//! value is taken as an `EnvFilter` directive, e.g.
//! `HBENCH_TRACE=hbench_core::harness=debug`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACE_INIT: Once = Once::new();

pub const TRACE_ENV: &str = "HBENCH_TRACE";
pub const DEFAULT_TRACE_FILTER: &str = "hbench_core=info,hbench_cli=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceSetting {
    Off,
    /// `RUST_LOG` if set, else [`DEFAULT_TRACE_FILTER`].
    Default,
    Filter(String),
}

impl TraceSetting {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "off" => TraceSetting::Off,
            "1" | "true" | "on" => TraceSetting::Default,
            _ => TraceSetting::Filter(raw.trim().to_string()),
        }
    }

    /// Directive to install, or `None` when tracing stays off.
    pub fn directive(&self, rust_log: Option<String>) -> Option<String> {
        match self {
            TraceSetting::Off => None,
            TraceSetting::Default => Some(rust_log.unwrap_or_else(|| DEFAULT_TRACE_FILTER.to_string())),
            TraceSetting::Filter(expr) => Some(expr.clone()),
        }
    }
}

pub fn maybe_init_tracing() {
    let Ok(raw) = std::env::var(TRACE_ENV) else {
        return;
    };
    let Some(directive) = TraceSetting::parse(&raw).directive(std::env::var("RUST_LOG").ok()) else {
        return;
    };

    TRACE_INIT.call_once(|| {
        // a malformed directive still gets the harness events
        let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init();
    });
}
