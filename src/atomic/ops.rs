/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Operations
//!
//! Free functions over the [`Platform`] backend. This is the API callers
//! use; the backend types are only needed to compare implementations.
//!
//! Every function is `unsafe` because it operates on a raw location that
//! the caller owns. The requirements are the same for all of them:
//!
//! - `ptr` is non-null and valid for reads **and writes**, even for
//!   [`load`];
//! - `ptr` is aligned to the atomic alignment of the value's word (on some
//!   32-bit targets this is stricter than the alignment of `u64`);
//! - every concurrent access to the location is atomic.
//!
//! Violations are not detected in release builds.
//!
//! # Example
//!
//! ```rust
//! use prism3_atomic_ops::atomic::{ops, MemoryOrder};
//!
//! let mut counter = 0u64;
//! let ptr = &mut counter as *mut u64;
//! unsafe {
//!     assert_eq!(ops::fetch_add(ptr, 5, MemoryOrder::SeqCst), 0);
//!     assert_eq!(ops::load(ptr, MemoryOrder::Acquire), 5);
//! }
//! ```
//!
//! # Author
//!
//! Haixing Hu

use super::backend::{
    AtomicOps,
    Platform,
};
use super::memory_order::MemoryOrder;
use super::value::{
    AtomicInteger,
    AtomicValue,
};

/// Atomically reads the value at `ptr`.
///
/// # Safety
///
/// See the module documentation.
#[inline(always)]
pub unsafe fn load<T: AtomicValue>(ptr: *mut T, order: MemoryOrder) -> T {
    unsafe { Platform::load(ptr, order) }
}

/// Atomically replaces the value at `ptr`.
///
/// # Safety
///
/// See the module documentation.
#[inline(always)]
pub unsafe fn store<T: AtomicValue>(ptr: *mut T, value: T, order: MemoryOrder) {
    unsafe { Platform::store(ptr, value, order) }
}

/// Atomically swaps in `value`, returning the previous value.
///
/// # Safety
///
/// See the module documentation.
#[inline(always)]
pub unsafe fn exchange<T: AtomicValue>(ptr: *mut T, value: T, order: MemoryOrder) -> T {
    unsafe { Platform::exchange(ptr, value, order) }
}

/// Atomically adds `delta`, wrapping, and returns the previous value.
///
/// # Safety
///
/// See the module documentation.
#[inline(always)]
pub unsafe fn fetch_add<T: AtomicInteger>(ptr: *mut T, delta: T, order: MemoryOrder) -> T {
    unsafe { Platform::fetch_add(ptr, delta, order) }
}

/// Atomically subtracts `delta`, wrapping, and returns the previous value.
///
/// # Safety
///
/// See the module documentation.
#[inline(always)]
pub unsafe fn fetch_sub<T: AtomicInteger>(ptr: *mut T, delta: T, order: MemoryOrder) -> T {
    unsafe { Platform::fetch_sub(ptr, delta, order) }
}

/// Atomically xors `mask` in and returns the **new** value.
///
/// Unlike [`fetch_add`] and [`fetch_sub`], the result is the value after
/// the operation.
///
/// # Safety
///
/// See the module documentation.
#[inline(always)]
pub unsafe fn xor_fetch<T: AtomicInteger>(ptr: *mut T, mask: T, order: MemoryOrder) -> T {
    unsafe { Platform::xor_fetch(ptr, mask, order) }
}

/// Strong compare-exchange.
///
/// Stores `desired` and returns `true` if the location holds `*expected`;
/// otherwise writes the actual value to `*expected` and returns `false`.
/// Never fails spuriously.
///
/// # Safety
///
/// See the module documentation.
#[inline(always)]
pub unsafe fn compare_exchange<T: AtomicValue>(
    ptr: *mut T,
    expected: &mut T,
    desired: T,
    success: MemoryOrder,
    failure: MemoryOrder,
) -> bool {
    unsafe { Platform::compare_exchange(ptr, expected, desired, success, failure) }
}

/// Strong compare-exchange with `expected` by value.
///
/// # Safety
///
/// See the module documentation.
#[inline(always)]
pub unsafe fn compare_exchange_n<T: AtomicValue>(
    ptr: *mut T,
    expected: T,
    desired: T,
    success: MemoryOrder,
    failure: MemoryOrder,
) -> bool {
    unsafe { Platform::compare_exchange_n(ptr, expected, desired, success, failure) }
}
