//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    HostInfo, OutputFormat, RunReport, format_bench, format_demo, format_info, format_run,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::Operation;
use crate::error::Result;
use crate::harness::{run_demo, run_suite};
use crate::routines::{
    AsmRoutines, HOST_ARCH, NativeRoutines, arch_label, foreign_available,
};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the host has no assembly backend, an argument is
/// invalid, or the demonstration finds a native/assembly mismatch.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match cli.resolved_command() {
        Commands::Run => cmd_run(cli.iterations, format),
        Commands::Demo => cmd_demo(format),
        Commands::Bench { ops } => cmd_bench(&ops, cli.iterations, format),
        Commands::Info => Ok(cmd_info(cli.iterations, format)),
    }
}

/// Resolves operation names, defaulting to every benchmarkable operation.
fn parse_operations(names: &[String]) -> Result<Vec<Operation>> {
    if names.is_empty() {
        return Ok(Operation::BENCHMARKED.to_vec());
    }
    names.iter().map(|name| name.parse()).collect()
}

// ==================== Command Implementations ====================

fn cmd_run(iterations: u32, format: OutputFormat) -> Result<String> {
    let asm = AsmRoutines::detect()?;
    let native = NativeRoutines;

    let demo = run_demo(&native, &asm);
    demo.ensure_all_match()?;

    let benchmarks = run_suite(&native, &asm, &Operation::BENCHMARKED, iterations)?;

    tracing::info!("all assembly functions match their native counterparts");
    let report = RunReport {
        arch: arch_label(),
        all_match: demo.all_match(),
        demo,
        benchmarks,
    };
    Ok(format_run(&report, format))
}

fn cmd_demo(format: OutputFormat) -> Result<String> {
    let asm = AsmRoutines::detect()?;
    let demo = run_demo(&NativeRoutines, &asm);
    demo.ensure_all_match()?;
    Ok(format_demo(&demo, arch_label(), format))
}

fn cmd_bench(names: &[String], iterations: u32, format: OutputFormat) -> Result<String> {
    let operations = parse_operations(names)?;
    let asm = AsmRoutines::detect()?;
    let results = run_suite(&NativeRoutines, &asm, &operations, iterations)?;
    Ok(format_bench(&results, format))
}

fn cmd_info(iterations: u32, format: OutputFormat) -> String {
    let info = HostInfo {
        target_arch: HOST_ARCH,
        arch: arch_label(),
        assembly_available: foreign_available(),
        iterations,
        operations: Operation::ALL.to_vec(),
        benchmarkable: Operation::BENCHMARKED.to_vec(),
    };
    format_info(&info, format)
}
