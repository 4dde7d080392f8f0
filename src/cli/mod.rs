//! CLI layer for asmbench.
//!
//! Provides the command-line interface using clap, with commands for the
//! demonstration, the benchmarks, or both.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
