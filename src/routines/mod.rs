//! Native and foreign implementations of the five demo routines.
//!
//! [`Routines`] is the seam both implementations sit behind:
//!
//! - **Native**: plain Rust ([`NativeRoutines`])
//! - **Assembly**: hand-written machine code called through `extern`
//!   declarations ([`AsmRoutines`])
//!
//! The harness is generic over the trait so each backend is monomorphized
//! into its own timing loop.

pub mod asm;
pub mod native;

#[cfg(target_arch = "aarch64")]
#[path = "ffi/aarch64.rs"]
mod ffi;

#[cfg(target_arch = "x86_64")]
#[path = "ffi/x86_64.rs"]
mod ffi;

pub use asm::AsmRoutines;
pub use native::NativeRoutines;

use std::ffi::CStr;

/// The `target_arch` this binary was compiled for.
pub const HOST_ARCH: &str = std::env::consts::ARCH;

/// Human-readable name of the host instruction set.
#[must_use]
pub fn arch_label() -> &'static str {
    match HOST_ARCH {
        "aarch64" => "ARM64",
        "x86_64" => "x86-64",
        other => other,
    }
}

/// Whether this build carries hand-written routines for the host.
#[must_use]
pub const fn foreign_available() -> bool {
    cfg!(any(target_arch = "aarch64", target_arch = "x86_64"))
}

/// The five routines compared by the harness.
///
/// All arithmetic wraps on overflow so that every implementation agrees
/// with the two's complement behaviour of the machine instructions.
///
/// # Examples
///
/// ```
/// use asmbench::routines::{NativeRoutines, Routines};
///
/// let native = NativeRoutines;
/// assert_eq!(native.add(15, 27), 42);
/// assert_eq!(native.factorial(6), 720);
/// assert_eq!(native.strlen(c"Hello"), 5);
/// assert_eq!(native.sum_array(&[1, 2, 3]), 6);
/// ```
pub trait Routines {
    /// Backend label used in reports ("Rust", "ASM").
    fn name(&self) -> &'static str;

    /// Returns `a + b`, wrapping on overflow.
    fn add(&self, a: i64, b: i64) -> i64;

    /// Returns `a * b`, wrapping on overflow.
    fn multiply(&self, a: i64, b: i64) -> i64;

    /// Returns `n!`, or 1 when `n <= 1`. Wraps on overflow.
    fn factorial(&self, n: i64) -> i64;

    /// Returns the number of bytes before the terminating NUL.
    fn strlen(&self, s: &CStr) -> i64;

    /// Returns the wrapping sum of `values` (0 when empty).
    fn sum_array(&self, values: &[i64]) -> i64;
}
