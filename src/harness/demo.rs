//! Side-by-side demonstration of native and assembly routines.

use crate::core::{Operation, samples};
use crate::error::{Error, Result};
use crate::routines::Routines;
use serde::Serialize;

/// One demonstration row: the same input through both implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Operation exercised.
    pub operation: Operation,
    /// Human-readable rendering of the input, e.g. `15 + 27`.
    pub expression: String,
    /// Result of the native routine.
    pub native: i64,
    /// Result of the foreign routine.
    pub foreign: i64,
}

impl Comparison {
    /// Whether both implementations produced the same result.
    #[must_use]
    pub const fn matches(&self) -> bool {
        self.native == self.foreign
    }
}

/// Outcome of a full demonstration pass.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    /// Label of the native backend.
    pub native_backend: &'static str,
    /// Label of the foreign backend.
    pub foreign_backend: &'static str,
    /// One row per operation, in [`Operation::ALL`] order.
    pub comparisons: Vec<Comparison>,
}

impl DemoReport {
    /// Whether every row matched.
    #[must_use]
    pub fn all_match(&self) -> bool {
        self.comparisons.iter().all(Comparison::matches)
    }

    /// Looks up the row for an operation.
    #[must_use]
    pub fn get(&self, operation: Operation) -> Option<&Comparison> {
        self.comparisons.iter().find(|c| c.operation == operation)
    }

    /// Converts the first disagreeing row into an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mismatch`] for the first row whose results differ.
    pub fn ensure_all_match(&self) -> Result<()> {
        match self.comparisons.iter().find(|c| !c.matches()) {
            Some(c) => Err(Error::Mismatch {
                operation: c.operation,
                native: c.native,
                foreign: c.foreign,
            }),
            None => Ok(()),
        }
    }
}

/// Runs every operation through both backends on the fixed sample inputs.
///
/// # Examples
///
/// ```
/// use asmbench::harness::run_demo;
/// use asmbench::routines::NativeRoutines;
///
/// // Comparing a backend with itself always matches.
/// let report = run_demo(&NativeRoutines, &NativeRoutines);
/// assert!(report.all_match());
/// assert_eq!(report.comparisons.len(), 5);
/// ```
pub fn run_demo<N: Routines, F: Routines>(native: &N, foreign: &F) -> DemoReport {
    tracing::info!(
        native = native.name(),
        foreign = foreign.name(),
        "running demonstration"
    );

    let comparisons: Vec<Comparison> = Operation::ALL
        .into_iter()
        .map(|operation| compare(native, foreign, operation))
        .collect();

    for c in &comparisons {
        if c.matches() {
            tracing::debug!(operation = %c.operation, result = c.native, "results match");
        } else {
            tracing::warn!(
                operation = %c.operation,
                native = c.native,
                foreign = c.foreign,
                "results differ"
            );
        }
    }

    DemoReport {
        native_backend: native.name(),
        foreign_backend: foreign.name(),
        comparisons,
    }
}

fn compare<N: Routines, F: Routines>(native: &N, foreign: &F, operation: Operation) -> Comparison {
    let (expression, native_result, foreign_result) = match operation {
        Operation::Add => {
            let (a, b) = samples::ADD_OPERANDS;
            (format!("{a} + {b}"), native.add(a, b), foreign.add(a, b))
        }
        Operation::Multiply => {
            let (a, b) = samples::MULTIPLY_OPERANDS;
            (
                format!("{a} * {b}"),
                native.multiply(a, b),
                foreign.multiply(a, b),
            )
        }
        Operation::Factorial => {
            let n = samples::FACTORIAL_INPUT;
            (format!("{n}!"), native.factorial(n), foreign.factorial(n))
        }
        Operation::StringLength => (
            format!("'{}'", samples::TEXT.to_string_lossy()),
            native.strlen(samples::TEXT),
            foreign.strlen(samples::TEXT),
        ),
        Operation::ArraySum => (
            format!("{:?}", samples::NUMBERS),
            native.sum_array(&samples::NUMBERS),
            foreign.sum_array(&samples::NUMBERS),
        ),
    };

    Comparison {
        operation,
        expression,
        native: native_result,
        foreign: foreign_result,
    }
}
