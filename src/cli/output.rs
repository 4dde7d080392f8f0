//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::Operation;
use crate::error::Error;
use crate::harness::{BenchResult, Comparison, DemoReport};
use serde::Serialize;
use std::fmt::Write;

/// Closing line of a successful full run.
pub const SUCCESS_LINE: &str = "✅ All assembly functions working correctly!";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Everything a full run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Host instruction set label.
    pub arch: &'static str,
    /// Demonstration results.
    pub demo: DemoReport,
    /// Benchmark batches, in execution order.
    pub benchmarks: Vec<BenchResult>,
    /// Whether every demonstration row matched.
    pub all_match: bool,
}

/// Host and backend description for the `info` command.
#[derive(Debug, Clone, Serialize)]
pub struct HostInfo {
    /// Raw `target_arch`.
    pub target_arch: &'static str,
    /// Human-readable instruction set label.
    pub arch: &'static str,
    /// Whether hand-written routines are compiled in.
    pub assembly_available: bool,
    /// Configured iterations per benchmark batch.
    pub iterations: u32,
    /// Operations the demo exercises.
    pub operations: Vec<Operation>,
    /// Operations the benchmark can time.
    pub benchmarkable: Vec<Operation>,
}

/// Formats the demonstration section.
#[must_use]
pub fn format_demo(report: &DemoReport, arch: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_demo_text(report, arch),
        OutputFormat::Json => format_json(report),
    }
}

fn format_demo_text(report: &DemoReport, arch: &str) -> String {
    let mut output = String::new();
    let title = format!("{arch} Assembly Module Demo");
    let _ = writeln!(output, "{title}");
    let _ = writeln!(output, "{}", "=".repeat(title.len()));

    for c in &report.comparisons {
        let _ = writeln!(output, "{}", result_line(c));
    }

    let _ = writeln!(
        output,
        "\nComparison with {} implementations:",
        report.native_backend
    );
    for c in &report.comparisons {
        let _ = writeln!(
            output,
            "{}",
            comparison_line(c, report.native_backend, report.foreign_backend)
        );
    }
    output
}

/// Line reporting the foreign result for one operation.
fn result_line(c: &Comparison) -> String {
    match c.operation {
        Operation::Add | Operation::Multiply | Operation::Factorial => {
            format!("{}: {} = {}", c.operation.title(), c.expression, c.foreign)
        }
        Operation::StringLength => format!("String length of {}: {}", c.expression, c.foreign),
        Operation::ArraySum => format!("Sum of array {}: {}", c.expression, c.foreign),
    }
}

/// Line putting the native result next to the foreign one.
fn comparison_line(c: &Comparison, native_backend: &str, foreign_backend: &str) -> String {
    let mut line = match c.operation {
        Operation::Add | Operation::Multiply | Operation::Factorial => format!(
            "{native_backend} {}: {} = {} ({foreign_backend}: {})",
            c.operation, c.expression, c.native, c.foreign
        ),
        Operation::StringLength | Operation::ArraySum => format!(
            "{native_backend} {}: {} ({foreign_backend}: {})",
            c.operation, c.native, c.foreign
        ),
    };
    if !c.matches() {
        line.push_str("  <-- MISMATCH");
    }
    line
}

/// Formats benchmark results.
#[must_use]
pub fn format_bench(results: &[BenchResult], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_bench_text(results),
        OutputFormat::Json => format_json(&results),
    }
}

fn format_bench_text(results: &[BenchResult]) -> String {
    let mut output = String::new();
    output.push_str("Performance Benchmarks:\n");
    output.push_str("======================\n");

    let mut previous: Option<Operation> = None;
    for result in results {
        if previous.is_some_and(|op| op != result.operation) {
            output.push('\n');
        }
        previous = Some(result.operation);
        let _ = writeln!(output, "{}", bench_line(result));
    }
    output
}

/// `"<Backend> <Operation>: N iterations in <elapsed> (<x.xx> ns/op)"`.
fn bench_line(result: &BenchResult) -> String {
    format!(
        "{} {}: {} iterations in {:?} ({:.2} ns/op)",
        result.backend,
        result.operation.title(),
        result.iterations,
        result.elapsed,
        result.ns_per_op
    )
}

/// Formats a full run: demonstration, benchmarks and the closing line.
#[must_use]
pub fn format_run(report: &RunReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = format_demo_text(&report.demo, report.arch);
            output.push('\n');
            output.push_str(&format_bench_text(&report.benchmarks));
            if report.all_match {
                let _ = writeln!(output, "\n{SUCCESS_LINE}");
            }
            output
        }
        OutputFormat::Json => format_json(report),
    }
}

/// Formats host information.
#[must_use]
pub fn format_info(info: &HostInfo, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let list = |ops: &[Operation]| {
                ops.iter()
                    .map(|op| op.cli_name())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let mut output = String::new();
            output.push_str("asmbench Info\n");
            output.push_str("=============\n\n");
            let _ = writeln!(
                output,
                "  Architecture:  {} ({})",
                info.arch, info.target_arch
            );
            let _ = writeln!(
                output,
                "  Assembly:      {}",
                if info.assembly_available {
                    "available"
                } else {
                    "unavailable"
                }
            );
            let _ = writeln!(output, "  Iterations:    {}", info.iterations);
            let _ = writeln!(output, "  Operations:    {}", list(&info.operations));
            let _ = writeln!(output, "  Benchmarkable: {}", list(&info.benchmarkable));
            output
        }
        OutputFormat::Json => format_json(info),
    }
}

/// Formats an error for the given output format.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: err.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}
