//! Benchmark workload bodies.
//!
//! Each workload is a plain function over owned data so it can be run by the
//! timing harness, the criterion benches and the unit tests alike. The
//! recursion is unmemoized and trial division has no square-root bound.

pub mod factors;
pub mod fib;
pub mod list;
pub mod loops;
pub mod objects;
pub mod primes;

pub use factors::factors;
pub use fib::{fib, fib_sum};
pub use list::{reverse, sequence};
pub use loops::{index_sum, push_sequence};
pub use objects::{OBJECT_KEYS, ObjectTable, build_objects};
pub use primes::{is_prime, primes_below};
