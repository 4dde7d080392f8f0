//! Error types for asmbench operations.
//!
//! Every fallible path in the harness funnels into [`Error`], built with
//! `thiserror`. The demo inputs are fixed constants, so in practice the
//! only errors are a host without an assembly backend, a bad CLI value, or
//! a native/foreign disagreement.

use crate::core::Operation;
use thiserror::Error;

/// Result type alias for asmbench operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for asmbench operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No hand-written routines exist for the host architecture.
    #[error("no assembly backend for target architecture: {arch}")]
    ForeignUnavailable {
        /// The `target_arch` the binary was built for.
        arch: &'static str,
    },

    /// Native and foreign routines disagreed on a demonstration input.
    #[error("{operation} mismatch: native returned {native}, assembly returned {foreign}")]
    Mismatch {
        /// Operation that disagreed.
        operation: Operation,
        /// Result of the native routine.
        native: i64,
        /// Result of the foreign routine.
        foreign: i64,
    },

    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Io(String),

    /// Report serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
