/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Interlocked Backend
//!
//! Operations over the full-barrier primitive family, which has no
//! ordering parameter and no plain load or store.
//!
//! - `load` is `interlocked_or(ptr, 0)`. Or with zero never changes the
//!   word, so a concurrent compare-exchange never fails because of it, but
//!   it is still a write-class access: the location must be writable.
//! - `store` is `interlocked_exchange` with the previous value discarded.
//! - `fetch_sub` is `interlocked_exchange_add` of the negated delta.
//!
//! Each primitive is already a hardware full barrier. What the requested
//! ordering still needs is a compiler barrier: before the primitive for
//! release semantics, after it for acquire semantics.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::{
    compiler_fence,
    Ordering,
};

use super::AtomicOps;
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::word::AtomicWord;

/// Backend built from full-barrier read-modify-write primitives.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interlocked;

#[inline(always)]
fn release_barrier(order: MemoryOrder) {
    if order.has_release() {
        compiler_fence(Ordering::SeqCst);
    }
}

#[inline(always)]
fn acquire_barrier(order: MemoryOrder) {
    if order.has_acquire() {
        compiler_fence(Ordering::SeqCst);
    }
}

impl AtomicOps for Interlocked {
    const NAME: &'static str = "interlocked";

    #[inline(always)]
    unsafe fn load_word<W: AtomicWord>(ptr: *mut W, order: MemoryOrder) -> W {
        let value = unsafe { W::interlocked_or(ptr, W::ZERO) };
        acquire_barrier(order.for_load());
        value
    }

    #[inline(always)]
    unsafe fn store_word<W: AtomicWord>(ptr: *mut W, value: W, order: MemoryOrder) {
        release_barrier(order.for_store());
        unsafe { W::interlocked_exchange(ptr, value) };
    }

    #[inline(always)]
    unsafe fn exchange_word<W: AtomicWord>(ptr: *mut W, value: W, order: MemoryOrder) -> W {
        release_barrier(order);
        let previous = unsafe { W::interlocked_exchange(ptr, value) };
        acquire_barrier(order);
        previous
    }

    #[inline(always)]
    unsafe fn fetch_add_word<W: AtomicWord>(ptr: *mut W, delta: W, order: MemoryOrder) -> W {
        release_barrier(order);
        let previous = unsafe { W::interlocked_exchange_add(ptr, delta) };
        acquire_barrier(order);
        previous
    }

    #[inline(always)]
    unsafe fn fetch_sub_word<W: AtomicWord>(ptr: *mut W, delta: W, order: MemoryOrder) -> W {
        release_barrier(order);
        let previous = unsafe { W::interlocked_exchange_add(ptr, delta.wrapping_neg()) };
        acquire_barrier(order);
        previous
    }

    #[inline(always)]
    unsafe fn xor_fetch_word<W: AtomicWord>(ptr: *mut W, mask: W, order: MemoryOrder) -> W {
        release_barrier(order);
        let previous = unsafe { W::interlocked_xor(ptr, mask) };
        acquire_barrier(order);
        previous.xor(mask)
    }

    #[inline(always)]
    unsafe fn compare_exchange_word<W: AtomicWord>(
        ptr: *mut W,
        expected: &mut W,
        desired: W,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        release_barrier(success);
        let previous = unsafe { W::interlocked_compare_exchange(ptr, desired, *expected) };
        if previous == *expected {
            acquire_barrier(success);
            true
        } else {
            acquire_barrier(failure.for_load());
            *expected = previous;
            false
        }
    }
}
