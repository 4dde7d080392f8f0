//! Fixed-iteration throughput loops.
//!
//! Each batch calls one routine `iterations` times back to back on the
//! calling thread and records wall-clock time. Results are discarded
//! through [`black_box`]; nothing is checked for correctness here.
//! Numbers are only comparable within a single run.

use crate::core::Operation;
use crate::error::{Error, Result};
use crate::routines::Routines;
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Iterations per measured batch unless overridden.
pub const DEFAULT_ITERATIONS: u32 = 10_000_000;

/// Multiplication operands are reduced modulo this to keep them small.
const MULTIPLY_MODULUS: i64 = 1000;

/// Timing of one batch.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    /// Operation timed.
    pub operation: Operation,
    /// Backend label ("Rust", "ASM").
    pub backend: &'static str,
    /// Number of calls made.
    pub iterations: u32,
    /// Wall-clock time for the whole batch.
    #[serde(rename = "elapsed_ns", serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
    /// Average latency per call in nanoseconds.
    pub ns_per_op: f64,
}

impl BenchResult {
    fn new(operation: Operation, backend: &'static str, iterations: u32, elapsed: Duration) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let ns_per_op = elapsed.as_nanos() as f64 / f64::from(iterations);
        Self {
            operation,
            backend,
            iterations,
            elapsed,
            ns_per_op,
        }
    }
}

fn serialize_nanos<S: serde::Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
}

/// Operands fed to `operation` on loop iteration `i`.
///
/// - addition: `(i, i + 1)`, wrapping at `i64::MAX`
/// - multiplication: `(i % 1000, (i + 1) % 1000)`
///
/// Returns `None` for operations without a benchmark input sequence.
#[must_use]
pub const fn bench_inputs(operation: Operation, i: i64) -> Option<(i64, i64)> {
    match operation {
        Operation::Add => Some(add_inputs(i)),
        Operation::Multiply => Some(multiply_inputs(i)),
        Operation::Factorial | Operation::StringLength | Operation::ArraySum => None,
    }
}

#[inline]
const fn add_inputs(i: i64) -> (i64, i64) {
    (i, i.wrapping_add(1))
}

#[inline]
const fn multiply_inputs(i: i64) -> (i64, i64) {
    (i % MULTIPLY_MODULUS, i.wrapping_add(1) % MULTIPLY_MODULUS)
}

/// Times `iterations` calls of one routine.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `iterations` is zero or the
/// operation has no benchmark input sequence.
pub fn run_benchmark<R: Routines>(
    routines: &R,
    operation: Operation,
    iterations: u32,
) -> Result<BenchResult> {
    if iterations == 0 {
        return Err(Error::InvalidArgument("iterations must be > 0".to_string()));
    }
    if !operation.is_benchmarkable() {
        return Err(Error::InvalidArgument(format!(
            "{operation} cannot be benchmarked (supported: add, multiply)"
        )));
    }

    let count = i64::from(iterations);
    let start = Instant::now();
    match operation {
        Operation::Add => {
            for i in 0..count {
                let (a, b) = add_inputs(i);
                black_box(routines.add(a, b));
            }
        }
        Operation::Multiply => {
            for i in 0..count {
                let (a, b) = multiply_inputs(i);
                black_box(routines.multiply(a, b));
            }
        }
        Operation::Factorial | Operation::StringLength | Operation::ArraySum => {}
    }
    let elapsed = start.elapsed();

    let result = BenchResult::new(operation, routines.name(), iterations, elapsed);
    tracing::debug!(
        operation = %operation,
        backend = result.backend,
        iterations,
        elapsed_ns = %elapsed.as_nanos(),
        ns_per_op = result.ns_per_op,
        "benchmark batch finished"
    );
    Ok(result)
}

/// Times each operation with the native backend, then the foreign one.
///
/// # Errors
///
/// Fails on the first operation [`run_benchmark`] rejects; no batch runs
/// before all operations are validated.
pub fn run_suite<N: Routines, F: Routines>(
    native: &N,
    foreign: &F,
    operations: &[Operation],
    iterations: u32,
) -> Result<Vec<BenchResult>> {
    if let Some(op) = operations.iter().find(|op| !op.is_benchmarkable()) {
        return Err(Error::InvalidArgument(format!(
            "{op} cannot be benchmarked (supported: add, multiply)"
        )));
    }

    tracing::info!(iterations, operations = operations.len(), "running benchmarks");

    let mut results = Vec::with_capacity(operations.len() * 2);
    for &operation in operations {
        results.push(run_benchmark(native, operation, iterations)?);
        results.push(run_benchmark(foreign, operation, iterations)?);
    }
    Ok(results)
}
