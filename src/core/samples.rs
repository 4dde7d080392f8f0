//! Fixed demonstration inputs.
//!
//! The demo takes no caller input; every routine runs against these
//! constants.

use std::ffi::CStr;

/// Operands for the addition demo.
pub const ADD_OPERANDS: (i64, i64) = (15, 27);

/// Operands for the multiplication demo.
pub const MULTIPLY_OPERANDS: (i64, i64) = (8, 9);

/// Argument for the factorial demo.
pub const FACTORIAL_INPUT: i64 = 6;

/// NUL-terminated string for the string-length demo.
pub const TEXT: &CStr = c"Hello, ARM64 Assembly!";

/// Sequence for the array-sum demo.
pub const NUMBERS: [i64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
