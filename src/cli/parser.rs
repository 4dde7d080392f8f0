//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::harness::DEFAULT_ITERATIONS;
use clap::{Parser, Subcommand};

/// asmbench: hand-written assembly vs. native Rust.
///
/// Runs each routine through both implementations on fixed inputs, then
/// times addition and multiplication in fixed-iteration loops.
#[derive(Parser, Debug)]
#[command(name = "asmbench")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug-level) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Iterations per benchmark batch.
    #[arg(
        long,
        global = true,
        env = "ASMBENCH_ITERATIONS",
        default_value_t = DEFAULT_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub iterations: u32,

    /// The subcommand to execute (defaults to `run`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the demonstration followed by the benchmarks.
    Run,

    /// Compare native and assembly results on the fixed sample inputs.
    Demo,

    /// Time native and assembly routines.
    Bench {
        /// Operation to time (add, multiply); repeatable.
        #[arg(short, long = "op", value_name = "OPERATION")]
        ops: Vec<String>,
    },

    /// Show host architecture and backend availability.
    Info,
}

impl Cli {
    /// Returns the subcommand, treating a bare invocation as `run`.
    #[must_use]
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
