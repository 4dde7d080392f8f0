//! The closed set of operations exercised by the harness.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the five routines implemented both natively and in assembly.
///
/// # Examples
///
/// ```
/// use asmbench::core::Operation;
///
/// let op: Operation = "MULTIPLY".parse().unwrap();
/// assert_eq!(op, Operation::Multiply);
/// assert!(op.is_benchmarkable());
/// assert_eq!(op.to_string(), "multiplication");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Wrapping 64-bit addition.
    Add,
    /// Wrapping 64-bit multiplication.
    Multiply,
    /// Iterative factorial with wrapping products.
    Factorial,
    /// Length of a NUL-terminated byte string.
    #[serde(rename = "strlen")]
    StringLength,
    /// Wrapping sum of an `i64` slice.
    #[serde(rename = "sum")]
    ArraySum,
}

impl Operation {
    /// All operations, in demonstration order.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Multiply,
        Self::Factorial,
        Self::StringLength,
        Self::ArraySum,
    ];

    /// Operations timed when the caller does not pick any.
    pub const BENCHMARKED: [Self; 2] = [Self::Add, Self::Multiply];

    /// Short name accepted on the command line and used in JSON output.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "multiply",
            Self::Factorial => "factorial",
            Self::StringLength => "strlen",
            Self::ArraySum => "sum",
        }
    }

    /// Capitalized label used in benchmark lines ("Addition").
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Multiply => "Multiplication",
            Self::Factorial => "Factorial",
            Self::StringLength => "String length",
            Self::ArraySum => "Array sum",
        }
    }

    /// Whether the benchmark runner knows an input sequence for this operation.
    #[must_use]
    pub const fn is_benchmarkable(self) -> bool {
        matches!(self, Self::Add | Self::Multiply)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "addition",
            Self::Multiply => "multiplication",
            Self::Factorial => "factorial",
            Self::StringLength => "string length",
            Self::ArraySum => "array sum",
        };
        f.write_str(name)
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "add" | "addition" => Ok(Self::Add),
            "multiply" | "mul" | "multiplication" => Ok(Self::Multiply),
            "factorial" | "fact" => Ok(Self::Factorial),
            "strlen" | "string-length" => Ok(Self::StringLength),
            "sum" | "sum-array" | "array-sum" => Ok(Self::ArraySum),
            _ => Err(Error::InvalidArgument(format!(
                "unknown operation: {s} (expected one of: {})",
                Self::ALL.map(Self::cli_name).join(", ")
            ))),
        }
    }
}
