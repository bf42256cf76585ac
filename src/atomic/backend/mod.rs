/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Backends
//!
//! The capability interface [`AtomicOps`] and its two implementations:
//!
//! - [`Ordered`] forwards each ordering to the ordering-parameterized
//!   primitive family.
//! - [`Interlocked`] builds every operation from full-barrier primitives,
//!   emulating `load` with a no-op `or` and placing compiler barriers
//!   around each primitive according to the requested ordering.
//!
//! Exactly one of them is the [`Platform`] backend, chosen at build time
//! by the `interlocked` cargo feature. Both stay compiled so they can be
//! compared side by side. All dispatch is static.
//!
//! # Author
//!
//! Haixing Hu

mod interlocked;
mod ordered;

pub use interlocked::Interlocked;
pub use ordered::Ordered;

use super::memory_order::MemoryOrder;
use super::value::{
    word_ptr,
    AtomicInteger,
    AtomicValue,
};
use super::word::AtomicWord;

/// The backend behind the free functions in [`crate::atomic::ops`].
#[cfg(not(feature = "interlocked"))]
pub type Platform = Ordered;

/// The backend behind the free functions in [`crate::atomic::ops`].
#[cfg(feature = "interlocked")]
pub type Platform = Interlocked;

/// Ordering-tagged atomic operations over raw memory.
///
/// Implementors provide the word-level operations; the value-level
/// operations are derived from them by reinterpreting the value as its
/// word.
///
/// # Safety
///
/// Every method requires that `ptr` is non-null, valid for reads and
/// writes, aligned to the atomic alignment of the value's word, and that
/// every concurrent access to the location is atomic. This holds for
/// loads too: the [`Interlocked`] backend implements a load as a
/// read-modify-write.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicOps {
    /// Short backend name, used in diagnostics and benchmarks.
    const NAME: &'static str;

    /// Loads a word.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn load_word<W: AtomicWord>(ptr: *mut W, order: MemoryOrder) -> W;

    /// Stores a word.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn store_word<W: AtomicWord>(ptr: *mut W, value: W, order: MemoryOrder);

    /// Swaps a word, returning the previous one.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn exchange_word<W: AtomicWord>(ptr: *mut W, value: W, order: MemoryOrder) -> W;

    /// Wrapping add, returning the previous word.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn fetch_add_word<W: AtomicWord>(ptr: *mut W, delta: W, order: MemoryOrder) -> W;

    /// Wrapping subtract, returning the previous word.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn fetch_sub_word<W: AtomicWord>(ptr: *mut W, delta: W, order: MemoryOrder) -> W;

    /// Bitwise xor, returning the new word.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn xor_fetch_word<W: AtomicWord>(ptr: *mut W, mask: W, order: MemoryOrder) -> W;

    /// Strong compare-exchange on a word.
    ///
    /// On failure `*expected` receives the actual word.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn compare_exchange_word<W: AtomicWord>(
        ptr: *mut W,
        expected: &mut W,
        desired: W,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool;

    /// Atomically reads the value at `ptr`.
    ///
    /// Only the read-relevant half of `order` is honored.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    #[inline(always)]
    unsafe fn load<T: AtomicValue>(ptr: *mut T, order: MemoryOrder) -> T {
        T::from_repr(unsafe { Self::load_word(word_ptr(ptr), order) })
    }

    /// Atomically replaces the value at `ptr`.
    ///
    /// Only the write-relevant half of `order` is honored.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    #[inline(always)]
    unsafe fn store<T: AtomicValue>(ptr: *mut T, value: T, order: MemoryOrder) {
        unsafe { Self::store_word(word_ptr(ptr), value.into_repr(), order) }
    }

    /// Atomically swaps in `value`, returning the previous value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    #[inline(always)]
    unsafe fn exchange<T: AtomicValue>(ptr: *mut T, value: T, order: MemoryOrder) -> T {
        T::from_repr(unsafe { Self::exchange_word(word_ptr(ptr), value.into_repr(), order) })
    }

    /// Atomically adds `delta` with wrapping, returning the previous value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    #[inline(always)]
    unsafe fn fetch_add<T: AtomicInteger>(ptr: *mut T, delta: T, order: MemoryOrder) -> T {
        T::from_repr(unsafe { Self::fetch_add_word(word_ptr(ptr), delta.into_repr(), order) })
    }

    /// Atomically subtracts `delta` with wrapping, returning the previous
    /// value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    #[inline(always)]
    unsafe fn fetch_sub<T: AtomicInteger>(ptr: *mut T, delta: T, order: MemoryOrder) -> T {
        T::from_repr(unsafe { Self::fetch_sub_word(word_ptr(ptr), delta.into_repr(), order) })
    }

    /// Atomically xors `mask` in, returning the **new** value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    #[inline(always)]
    unsafe fn xor_fetch<T: AtomicInteger>(ptr: *mut T, mask: T, order: MemoryOrder) -> T {
        T::from_repr(unsafe { Self::xor_fetch_word(word_ptr(ptr), mask.into_repr(), order) })
    }

    /// Strong compare-exchange.
    ///
    /// If the location holds `*expected`, stores `desired` and returns
    /// `true`. Otherwise writes the actual value to `*expected` and returns
    /// `false`. Values are compared by bit pattern.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    #[inline(always)]
    unsafe fn compare_exchange<T: AtomicValue>(
        ptr: *mut T,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        let mut current = expected.into_repr();
        let exchanged = unsafe {
            Self::compare_exchange_word(
                word_ptr(ptr),
                &mut current,
                desired.into_repr(),
                success,
                failure,
            )
        };
        if !exchanged {
            *expected = T::from_repr(current);
        }
        exchanged
    }

    /// Strong compare-exchange with `expected` taken by value.
    ///
    /// Same as [`AtomicOps::compare_exchange`], without reporting the
    /// actual value on failure.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    #[inline(always)]
    unsafe fn compare_exchange_n<T: AtomicValue>(
        ptr: *mut T,
        expected: T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        let mut expected = expected;
        unsafe { Self::compare_exchange(ptr, &mut expected, desired, success, failure) }
    }
}
