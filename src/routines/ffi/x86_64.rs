//! Hand-written x86-64 routines (Intel syntax).
//!
//! Calling convention (System V, `extern "sysv64"` on every OS):
//!   rdi, rsi = arguments (i64 or pointer)
//!   rax      = return value
//!
//! All routines are leaves and only touch caller-saved registers.
//!
//! Each symbol is exported twice, bare and with a leading underscore, so
//! the `extern` declarations below resolve under both ELF and Mach-O C
//! symbol decoration.

#![allow(unsafe_code)]

use std::arch::global_asm;
use std::ffi::c_char;

global_asm!(
    ".text",
    ".p2align 4",
    ".globl asmbench_add",
    ".globl _asmbench_add",
    "asmbench_add:",
    "_asmbench_add:",
    "lea rax, [rdi + rsi]",
    "ret",
);

global_asm!(
    ".text",
    ".p2align 4",
    ".globl asmbench_multiply",
    ".globl _asmbench_multiply",
    "asmbench_multiply:",
    "_asmbench_multiply:",
    "mov rax, rdi",
    "imul rax, rsi",
    "ret",
);

// rdi counts down from n while rax accumulates the product.
global_asm!(
    ".text",
    ".p2align 4",
    ".globl asmbench_factorial",
    ".globl _asmbench_factorial",
    "asmbench_factorial:",
    "_asmbench_factorial:",
    "mov eax, 1",
    "cmp rdi, 1",
    "jle 3f",
    "2:",
    "imul rax, rdi",
    "dec rdi",
    "cmp rdi, 1",
    "jg 2b",
    "3:",
    "ret",
);

global_asm!(
    ".text",
    ".p2align 4",
    ".globl asmbench_strlen",
    ".globl _asmbench_strlen",
    "asmbench_strlen:",
    "_asmbench_strlen:",
    "mov rax, rdi",
    "2:",
    "cmp byte ptr [rax], 0",
    "je 3f",
    "inc rax",
    "jmp 2b",
    "3:",
    "sub rax, rdi",
    "ret",
);

// rdi = base, rsi = length; a non-positive length sums to zero.
global_asm!(
    ".text",
    ".p2align 4",
    ".globl asmbench_sum_array",
    ".globl _asmbench_sum_array",
    "asmbench_sum_array:",
    "_asmbench_sum_array:",
    "xor eax, eax",
    "test rsi, rsi",
    "jle 3f",
    "2:",
    "add rax, qword ptr [rdi]",
    "add rdi, 8",
    "dec rsi",
    "jnz 2b",
    "3:",
    "ret",
);

unsafe extern "sysv64" {
    pub safe fn asmbench_add(a: i64, b: i64) -> i64;
    pub safe fn asmbench_multiply(a: i64, b: i64) -> i64;
    pub safe fn asmbench_factorial(n: i64) -> i64;

    /// `s` must point to a readable NUL-terminated byte string.
    pub fn asmbench_strlen(s: *const c_char) -> i64;

    /// `values` must be readable for `len` consecutive `i64`s.
    pub fn asmbench_sum_array(values: *const i64, len: i64) -> i64;
}
