/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Bit Operations
//!
//! Bit-probing helpers used by bit-parallel and concurrent algorithms.
//! `popcount_64` and `lowest_set_bit_64` use the target's instruction when
//! it has one and the [`portable`] implementations otherwise; both paths
//! give identical results.
//!
//! # Author
//!
//! Haixing Hu

pub mod portable;

/// Whether the target has a population-count instruction.
pub const NATIVE_POPCOUNT: bool = cfg!(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "popcnt"
    ),
    target_arch = "aarch64",
    target_arch = "powerpc64",
    target_arch = "wasm32",
    all(
        any(target_arch = "riscv32", target_arch = "riscv64"),
        target_feature = "zbb"
    ),
));

/// Whether the target has a bit-scan or count-trailing-zeros instruction.
pub const NATIVE_BIT_SCAN: bool = cfg!(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "arm",
    target_arch = "powerpc64",
    target_arch = "wasm32",
    all(
        any(target_arch = "riscv32", target_arch = "riscv64"),
        target_feature = "zbb"
    ),
));

/// Counts the set bits of a 64-bit word.
#[inline]
pub fn popcount_64(x: u64) -> u32 {
    if NATIVE_POPCOUNT {
        x.count_ones()
    } else {
        portable::popcount_64(x)
    }
}

/// Returns the index of the lowest set bit of a 64-bit word.
///
/// Returns `64` when `x` is zero.
#[inline]
pub fn lowest_set_bit_64(x: u64) -> u32 {
    if NATIVE_BIT_SCAN {
        x.trailing_zeros()
    } else {
        portable::lowest_set_bit_64(x)
    }
}

/// Integer base-2 logarithm, rounded down.
///
/// `log2(0)` is `0`, the same as `log2(1)`; it does not signal an
/// undefined input.
pub const fn log2(x: u64) -> u32 {
    if x <= 1 {
        0
    } else {
        1 + log2(x >> 1)
    }
}

/// Returns `true` if `x` is a power of two. Zero is not.
pub const fn is_power_of_2(x: u64) -> bool {
    x != 0 && (x & (x - 1)) == 0
}
