//! Hand-written AArch64 routines.
//!
//! Calling convention (AAPCS64, `extern "C"`):
//!   x0, x1 = arguments (i64 or pointer)
//!   x0     = return value
//!
//! Only caller-saved registers (x0-x3) are touched, and no stack frame is
//! built, so every routine is a leaf.
//!
//! Each symbol is exported twice, bare and with a leading underscore, so
//! the `extern` declarations below resolve under both ELF and Mach-O C
//! symbol decoration.

#![allow(unsafe_code)]

use std::arch::global_asm;
use std::ffi::c_char;

global_asm!(
    ".text",
    ".p2align 2",
    ".globl asmbench_add",
    ".globl _asmbench_add",
    "asmbench_add:",
    "_asmbench_add:",
    "add x0, x0, x1",
    "ret",
);

global_asm!(
    ".text",
    ".p2align 2",
    ".globl asmbench_multiply",
    ".globl _asmbench_multiply",
    "asmbench_multiply:",
    "_asmbench_multiply:",
    "mul x0, x0, x1",
    "ret",
);

// x1 counts down from n while x0 accumulates the product.
global_asm!(
    ".text",
    ".p2align 2",
    ".globl asmbench_factorial",
    ".globl _asmbench_factorial",
    "asmbench_factorial:",
    "_asmbench_factorial:",
    "mov x1, x0",
    "mov x0, #1",
    "cmp x1, #1",
    "b.le 3f",
    "2:",
    "mul x0, x0, x1",
    "sub x1, x1, #1",
    "cmp x1, #1",
    "b.gt 2b",
    "3:",
    "ret",
);

// Post-indexed byte loads until NUL; length = end - start - 1.
global_asm!(
    ".text",
    ".p2align 2",
    ".globl asmbench_strlen",
    ".globl _asmbench_strlen",
    "asmbench_strlen:",
    "_asmbench_strlen:",
    "mov x1, x0",
    "2:",
    "ldrb w2, [x1], #1",
    "cbnz w2, 2b",
    "sub x0, x1, x0",
    "sub x0, x0, #1",
    "ret",
);

// x0 = base, x1 = length; a non-positive length sums to zero.
global_asm!(
    ".text",
    ".p2align 2",
    ".globl asmbench_sum_array",
    ".globl _asmbench_sum_array",
    "asmbench_sum_array:",
    "_asmbench_sum_array:",
    "mov x2, #0",
    "cmp x1, #0",
    "b.le 3f",
    "2:",
    "ldr x3, [x0], #8",
    "add x2, x2, x3",
    "subs x1, x1, #1",
    "b.ne 2b",
    "3:",
    "mov x0, x2",
    "ret",
);

unsafe extern "C" {
    pub safe fn asmbench_add(a: i64, b: i64) -> i64;
    pub safe fn asmbench_multiply(a: i64, b: i64) -> i64;
    pub safe fn asmbench_factorial(n: i64) -> i64;

    /// `s` must point to a readable NUL-terminated byte string.
    pub fn asmbench_strlen(s: *const c_char) -> i64;

    /// `values` must be readable for `len` consecutive `i64`s.
    pub fn asmbench_sum_array(values: *const i64, len: i64) -> i64;
}
