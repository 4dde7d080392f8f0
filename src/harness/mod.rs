//! The two phases of a run: the side-by-side demonstration and the
//! timing loops.
//!
//! - **Demo**: every operation on fixed inputs, native vs. assembly
//! - **Bench**: fixed-iteration throughput loops for addition and
//!   multiplication

pub mod bench;
pub mod demo;

pub use bench::{BenchResult, DEFAULT_ITERATIONS, bench_inputs, run_benchmark, run_suite};
pub use demo::{Comparison, DemoReport, run_demo};
