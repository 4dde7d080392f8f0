//! Plain Rust versions of the demo routines.

use super::Routines;
use std::ffi::CStr;

/// Native Rust implementation of [`Routines`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRoutines;

impl Routines for NativeRoutines {
    fn name(&self) -> &'static str {
        "Rust"
    }

    #[inline]
    fn add(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    #[inline]
    fn multiply(&self, a: i64, b: i64) -> i64 {
        a.wrapping_mul(b)
    }

    fn factorial(&self, n: i64) -> i64 {
        (2..=n).fold(1_i64, i64::wrapping_mul)
    }

    fn strlen(&self, s: &CStr) -> i64 {
        i64::try_from(s.count_bytes()).unwrap_or(i64::MAX)
    }

    fn sum_array(&self, values: &[i64]) -> i64 {
        values.iter().fold(0, |acc, &v| acc.wrapping_add(v))
    }
}
