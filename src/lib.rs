//! # asmbench
//!
//! Hand-written assembly routines compared against native Rust.
//!
//! asmbench calls five small routines (addition, multiplication,
//! factorial, string length, array sum) through both a native Rust
//! implementation and hand-written machine code reached over an `extern`
//! boundary. It reports the results side by side and times the
//! arithmetic routines in fixed-iteration loops.
//!
//! ## Features
//!
//! - **Assembly backends**: AArch64 (ARM64) and x86-64 via `global_asm!`
//! - **Demonstration**: native vs. assembly on fixed sample inputs
//! - **Benchmarks**: ten-million-iteration wall-clock loops per backend
//! - **Output**: human-readable text or JSON

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed at the assembly FFI boundary
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod harness;
pub mod routines;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::Operation;

// Re-export routine types
pub use routines::{AsmRoutines, NativeRoutines, Routines, arch_label, foreign_available};

// Re-export harness types
pub use harness::{
    BenchResult, Comparison, DEFAULT_ITERATIONS, DemoReport, run_benchmark, run_demo, run_suite,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
