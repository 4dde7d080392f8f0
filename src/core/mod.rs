//! Core domain models for asmbench.
//!
//! The operation catalogue and the fixed demonstration inputs. These are
//! pure values with no FFI or I/O dependencies.

pub mod operation;
pub mod samples;

pub use operation::Operation;
