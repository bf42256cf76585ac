/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Builtin Atomics Compatibility
//!
//! Re-expresses the ordering-tagged operations in the call shape of the
//! GCC `__atomic_*` builtins: orderings are small integer codes,
//! `fetch_add`/`fetch_sub`/`exchange` return the previous value,
//! `xor_fetch` returns the new value, and the compare-exchange takes the
//! expected value through a pointer plus a `weak` flag.
//!
//! Code ported from that convention can keep its call sites as they are.
//! This module holds no state; every function forwards to
//! [`crate::atomic::ops`] and has the same safety requirements.
//!
//! Only compiled with the `compat` feature.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::{
    ops,
    AtomicInteger,
    AtomicValue,
    MemoryOrder,
};

/// No ordering, only atomicity.
pub const ATOMIC_RELAXED: i32 = 0;
/// Consume; treated as acquire.
pub const ATOMIC_CONSUME: i32 = 1;
/// Acquire.
pub const ATOMIC_ACQUIRE: i32 = 2;
/// Release.
pub const ATOMIC_RELEASE: i32 = 3;
/// Acquire and release.
pub const ATOMIC_ACQ_REL: i32 = 4;
/// Sequentially consistent.
pub const ATOMIC_SEQ_CST: i32 = 5;

/// Maps a builtin ordering code to a [`MemoryOrder`].
///
/// Unrecognized codes fall back to `SeqCst`, the strongest ordering.
#[inline]
pub fn map_order(code: i32) -> MemoryOrder {
    match MemoryOrder::from_code(code) {
        Ok(order) => order,
        Err(err) => {
            log::trace!("{}, using seq_cst", err);
            MemoryOrder::SeqCst
        }
    }
}

/// `__atomic_load_n`.
///
/// # Safety
///
/// See [`crate::atomic::ops`].
#[inline]
pub unsafe fn atomic_load_n<T: AtomicValue>(ptr: *mut T, memorder: i32) -> T {
    unsafe { ops::load(ptr, map_order(memorder)) }
}

/// `__atomic_store_n`.
///
/// # Safety
///
/// See [`crate::atomic::ops`].
#[inline]
pub unsafe fn atomic_store_n<T: AtomicValue>(ptr: *mut T, val: T, memorder: i32) {
    unsafe { ops::store(ptr, val, map_order(memorder)) }
}

/// `__atomic_exchange_n`; returns the previous value.
///
/// # Safety
///
/// See [`crate::atomic::ops`].
#[inline]
pub unsafe fn atomic_exchange_n<T: AtomicValue>(ptr: *mut T, val: T, memorder: i32) -> T {
    unsafe { ops::exchange(ptr, val, map_order(memorder)) }
}

/// `__atomic_fetch_add`; returns the previous value.
///
/// # Safety
///
/// See [`crate::atomic::ops`].
#[inline]
pub unsafe fn atomic_fetch_add<T: AtomicInteger>(ptr: *mut T, val: T, memorder: i32) -> T {
    unsafe { ops::fetch_add(ptr, val, map_order(memorder)) }
}

/// `__atomic_fetch_sub`; returns the previous value.
///
/// # Safety
///
/// See [`crate::atomic::ops`].
#[inline]
pub unsafe fn atomic_fetch_sub<T: AtomicInteger>(ptr: *mut T, val: T, memorder: i32) -> T {
    unsafe { ops::fetch_sub(ptr, val, map_order(memorder)) }
}

/// `__atomic_xor_fetch`; returns the new value.
///
/// # Safety
///
/// See [`crate::atomic::ops`].
#[inline]
pub unsafe fn atomic_xor_fetch<T: AtomicInteger>(ptr: *mut T, val: T, memorder: i32) -> T {
    unsafe { ops::xor_fetch(ptr, val, map_order(memorder)) }
}

/// `__atomic_compare_exchange_n`.
///
/// `weak` is accepted and ignored: the exchange is always strong, which
/// the builtin contract permits. On failure the actual value is written
/// to `*expected`.
///
/// # Safety
///
/// See [`crate::atomic::ops`]. In addition, `expected` must be valid for
/// reads and writes and must not alias `ptr`.
#[inline]
pub unsafe fn atomic_compare_exchange_n<T: AtomicValue>(
    ptr: *mut T,
    expected: *mut T,
    desired: T,
    weak: bool,
    success_memorder: i32,
    failure_memorder: i32,
) -> bool {
    let _ = weak;
    unsafe {
        ops::compare_exchange(
            ptr,
            &mut *expected,
            desired,
            map_order(success_memorder),
            map_order(failure_memorder),
        )
    }
}
