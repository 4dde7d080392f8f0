//! Safe wrapper over the hand-written assembly routines.
//!
//! Borrowed inputs are turned into raw pointer (and length) arguments for
//! the duration of a single call; nothing crosses the boundary by value
//! except scalars.

// Calling into the foreign routines requires unsafe; the invariants are
// upheld by the borrowed `&CStr` / `&[i64]` arguments.
#![allow(unsafe_code)]

use super::Routines;
use crate::error::Result;
use std::ffi::CStr;

/// Assembly implementation of [`Routines`].
///
/// Can only be constructed on hosts that carry hand-written routines
/// (AArch64 and x86-64); see [`AsmRoutines::detect`].
#[cfg(any(target_arch = "aarch64", target_arch = "x86_64"))]
#[derive(Debug, Clone, Copy)]
pub struct AsmRoutines {
    _private: (),
}

/// Assembly implementation of [`Routines`].
///
/// Uninhabited: this architecture has no hand-written routines.
#[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
#[derive(Debug, Clone, Copy)]
pub enum AsmRoutines {}

impl AsmRoutines {
    /// Returns the assembly backend for the host architecture.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ForeignUnavailable`] when the binary was built for
    /// an architecture without hand-written routines.
    pub fn detect() -> Result<Self> {
        #[cfg(any(target_arch = "aarch64", target_arch = "x86_64"))]
        {
            tracing::debug!(arch = super::HOST_ARCH, "assembly backend available");
            Ok(Self { _private: () })
        }
        #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
        {
            Err(crate::Error::ForeignUnavailable {
                arch: super::HOST_ARCH,
            })
        }
    }
}

#[cfg(any(target_arch = "aarch64", target_arch = "x86_64"))]
impl Routines for AsmRoutines {
    fn name(&self) -> &'static str {
        "ASM"
    }

    #[inline]
    fn add(&self, a: i64, b: i64) -> i64 {
        super::ffi::asmbench_add(a, b)
    }

    #[inline]
    fn multiply(&self, a: i64, b: i64) -> i64 {
        super::ffi::asmbench_multiply(a, b)
    }

    fn factorial(&self, n: i64) -> i64 {
        super::ffi::asmbench_factorial(n)
    }

    fn strlen(&self, s: &CStr) -> i64 {
        // SAFETY: a `CStr` is always NUL-terminated and outlives the call.
        unsafe { super::ffi::asmbench_strlen(s.as_ptr()) }
    }

    fn sum_array(&self, values: &[i64]) -> i64 {
        let len = i64::try_from(values.len()).unwrap_or(i64::MAX);
        // SAFETY: `values` is readable for exactly `len` elements; an empty
        // slice passes length 0 and the routine never dereferences.
        unsafe { super::ffi::asmbench_sum_array(values.as_ptr(), len) }
    }
}

// Keeps the type usable in generic code on hosts without a backend.
#[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
impl Routines for AsmRoutines {
    fn name(&self) -> &'static str {
        "ASM"
    }

    fn add(&self, _a: i64, _b: i64) -> i64 {
        match *self {}
    }

    fn multiply(&self, _a: i64, _b: i64) -> i64 {
        match *self {}
    }

    fn factorial(&self, _n: i64) -> i64 {
        match *self {}
    }

    fn strlen(&self, _s: &CStr) -> i64 {
        match *self {}
    }

    fn sum_array(&self, _values: &[i64]) -> i64 {
        match *self {}
    }
}
