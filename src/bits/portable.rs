/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Portable Bit Operations
//!
//! Software fallbacks for targets without bit-counting instructions.
//! Always compiled, so they can be checked against the native path.
//!
//! # Author
//!
//! Haixing Hu

const M1: u64 = 0x5555_5555_5555_5555;
const M2: u64 = 0x3333_3333_3333_3333;
const M4: u64 = 0x0f0f_0f0f_0f0f_0f0f;
const H01: u64 = 0x0101_0101_0101_0101;

/// A 64-bit De Bruijn sequence: every 6-bit window is distinct.
const DE_BRUIJN_64: u64 = 0x03f7_9d71_b4cb_0a89;

const DE_BRUIJN_INDEX: [u8; 64] = build_de_bruijn_index();

const fn build_de_bruijn_index() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut bit = 0;
    while bit < 64 {
        let slot = ((1u64 << bit).wrapping_mul(DE_BRUIJN_64) >> 58) as usize;
        table[slot] = bit as u8;
        bit += 1;
    }
    table
}

/// Counts the set bits of a 64-bit word with a SWAR reduction.
#[inline]
pub const fn popcount_64(x: u64) -> u32 {
    let x = x - ((x >> 1) & M1);
    let x = (x & M2) + ((x >> 2) & M2);
    let x = (x + (x >> 4)) & M4;
    (x.wrapping_mul(H01) >> 56) as u32
}

/// Index of the lowest set bit by De Bruijn multiplication; `64` for
/// zero.
#[inline]
pub const fn lowest_set_bit_64(x: u64) -> u32 {
    if x == 0 {
        return 64;
    }
    let lowest = x & x.wrapping_neg();
    DE_BRUIJN_INDEX[(lowest.wrapping_mul(DE_BRUIJN_64) >> 58) as usize] as u32
}
