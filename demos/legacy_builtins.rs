/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Legacy Builtins Example
//!
//! Call sites written in the `__atomic_*` builtin style, running on the
//! ordering-tagged layer.

use prism3_atomic_ops::compat::{
    atomic_compare_exchange_n,
    atomic_fetch_add,
    atomic_load_n,
    atomic_xor_fetch,
    ATOMIC_ACQUIRE,
    ATOMIC_RELAXED,
    ATOMIC_SEQ_CST,
};

fn main() {
    let mut weight = 0i64;
    let mut flags = 0u8;

    unsafe {
        let before = atomic_fetch_add(&mut weight, 17, ATOMIC_RELAXED);
        println!("fetch_add: before = {}, after = {}", before, atomic_load_n(&mut weight, ATOMIC_ACQUIRE));

        let toggled = atomic_xor_fetch(&mut flags, 0b0000_0101, ATOMIC_SEQ_CST);
        println!("xor_fetch: flags = {:#010b}", toggled);

        let mut expected = 0i64;
        let swapped = atomic_compare_exchange_n(
            &mut weight,
            &mut expected,
            100,
            false,
            ATOMIC_SEQ_CST,
            ATOMIC_RELAXED,
        );
        println!("compare_exchange: swapped = {}, actual = {}", swapped, expected);
    }
}
