/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Ordered Backend
//!
//! Operations over the ordering-parameterized primitive family.
//!
//! # Author
//!
//! Haixing Hu

use super::AtomicOps;
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::word::AtomicWord;

/// Backend passing each ordering straight through to a primitive that
/// accepts it.
///
/// The only translation is dropping the irrelevant half of an ordering on
/// loads, stores and compare-exchange failure, where the primitives would
/// otherwise reject it.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordered;

impl AtomicOps for Ordered {
    const NAME: &'static str = "ordered";

    #[inline(always)]
    unsafe fn load_word<W: AtomicWord>(ptr: *mut W, order: MemoryOrder) -> W {
        unsafe { W::load_n(ptr, order.for_load().to_std()) }
    }

    #[inline(always)]
    unsafe fn store_word<W: AtomicWord>(ptr: *mut W, value: W, order: MemoryOrder) {
        unsafe { W::store_n(ptr, value, order.for_store().to_std()) }
    }

    #[inline(always)]
    unsafe fn exchange_word<W: AtomicWord>(ptr: *mut W, value: W, order: MemoryOrder) -> W {
        unsafe { W::exchange_n(ptr, value, order.to_std()) }
    }

    #[inline(always)]
    unsafe fn fetch_add_word<W: AtomicWord>(ptr: *mut W, delta: W, order: MemoryOrder) -> W {
        unsafe { W::fetch_add(ptr, delta, order.to_std()) }
    }

    #[inline(always)]
    unsafe fn fetch_sub_word<W: AtomicWord>(ptr: *mut W, delta: W, order: MemoryOrder) -> W {
        unsafe { W::fetch_sub(ptr, delta, order.to_std()) }
    }

    #[inline(always)]
    unsafe fn xor_fetch_word<W: AtomicWord>(ptr: *mut W, mask: W, order: MemoryOrder) -> W {
        let previous = unsafe { W::fetch_xor(ptr, mask, order.to_std()) };
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
        match unsafe {
            W::compare_exchange_n(
                ptr,
                *expected,
                desired,
                success.to_std(),
                failure.for_load().to_std(),
            )
        } {
            Ok(_) => true,
            Err(actual) => {
                *expected = actual;
                false
            }
        }
    }
}
