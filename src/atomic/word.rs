/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Words
//!
//! Width classes of the atomic layer. A word is one of `u8`, `u16`, `u32`
//! or `u64`, bound to the lock-free standard atomic of the same width.
//! Each word exposes two primitive families:
//!
//! - [`OrderedPrimitives`]: every primitive takes an explicit ordering,
//!   and a dedicated load and store exist.
//! - [`InterlockedPrimitives`]: every primitive is a full barrier, takes
//!   no ordering, and there is no plain load or store.
//!
//! A word is only defined when the target supports lock-free atomics of
//! that width, so the layer can never fall back to a lock.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::hash::Hash;
use std::sync::atomic::Ordering;

mod sealed {
    pub trait Sealed {}
}

/// A machine word with native lock-free atomic support.
///
/// This trait is sealed; it is implemented for `u8`, `u16`, `u32` and
/// `u64` on targets that have atomics of that width.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicWord:
    sealed::Sealed
    + OrderedPrimitives
    + InterlockedPrimitives
    + Copy
    + Eq
    + Hash
    + fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// The standard atomic type of the same width.
    type Atomic: Send + Sync;

    /// Storage width in bytes.
    const WIDTH: usize;

    /// The all-zero word.
    const ZERO: Self;

    /// Two's-complement negation, wrapping on the minimum value.
    fn wrapping_neg(self) -> Self;

    /// Bitwise exclusive or.
    fn xor(self, rhs: Self) -> Self;

    /// Views a raw location as the standard atomic of this width.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, valid for reads and writes for `'a`, and
    /// aligned to `align_of::<Self::Atomic>()`. All concurrent accesses to
    /// the location during `'a` must be atomic.
    unsafe fn as_atomic<'a>(ptr: *mut Self) -> &'a Self::Atomic;
}

/// The ordering-parameterized primitive family.
///
/// # Safety
///
/// Every method has the safety contract of [`AtomicWord::as_atomic`].
/// Orderings must be valid for the primitive: loads reject `Release` and
/// `AcqRel`, stores reject `Acquire` and `AcqRel`, and the failure ordering
/// of a compare-exchange rejects `Release` and `AcqRel`.
///
/// # Author
///
/// Haixing Hu
pub trait OrderedPrimitives: Sized {
    /// Atomic load.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn load_n(ptr: *mut Self, order: Ordering) -> Self;

    /// Atomic store.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn store_n(ptr: *mut Self, value: Self, order: Ordering);

    /// Atomic swap, returning the previous value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn exchange_n(ptr: *mut Self, value: Self, order: Ordering) -> Self;

    /// Wrapping add, returning the previous value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn fetch_add(ptr: *mut Self, value: Self, order: Ordering) -> Self;

    /// Wrapping subtract, returning the previous value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn fetch_sub(ptr: *mut Self, value: Self, order: Ordering) -> Self;

    /// Bitwise xor, returning the previous value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn fetch_xor(ptr: *mut Self, value: Self, order: Ordering) -> Self;

    /// Strong compare-exchange.
    ///
    /// Returns `Ok(previous)` on success and `Err(actual)` on failure.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn compare_exchange_n(
        ptr: *mut Self,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;
}

/// The full-barrier primitive family.
///
/// Each primitive is a sequentially consistent read-modify-write. There is
/// no ordering parameter and no dedicated load or store.
///
/// # Safety
///
/// Every method has the safety contract of [`AtomicWord::as_atomic`].
///
/// # Author
///
/// Haixing Hu
pub trait InterlockedPrimitives: Sized {
    /// Bitwise or, returning the previous value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn interlocked_or(ptr: *mut Self, value: Self) -> Self;

    /// Swap, returning the previous value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn interlocked_exchange(ptr: *mut Self, value: Self) -> Self;

    /// Wrapping add, returning the previous value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn interlocked_exchange_add(ptr: *mut Self, value: Self) -> Self;

    /// Bitwise xor, returning the previous value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn interlocked_xor(ptr: *mut Self, value: Self) -> Self;

    /// Stores `exchange` if the location holds `comparand`.
    ///
    /// Always returns the value held before the call; the exchange
    /// happened exactly when that value equals `comparand`.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn interlocked_compare_exchange(
        ptr: *mut Self,
        exchange: Self,
        comparand: Self,
    ) -> Self;
}

/// Implements the word traits for one width.
///
/// # Parameters
///
/// * `$word` - The unsigned integer type (e.g., `u32`)
/// * `$atomic` - The standard atomic of the same width (e.g.,
///   `std::sync::atomic::AtomicU32`)
macro_rules! impl_atomic_word {
    ($word:ty, $atomic:ty) => {
        impl sealed::Sealed for $word {}

        impl AtomicWord for $word {
            type Atomic = $atomic;

            const WIDTH: usize = std::mem::size_of::<$word>();

            const ZERO: Self = 0;

            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                <$word>::wrapping_neg(self)
            }

            #[inline(always)]
            fn xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline(always)]
            unsafe fn as_atomic<'a>(ptr: *mut Self) -> &'a Self::Atomic {
                debug_assert!(!ptr.is_null(), "atomic location is null");
                debug_assert!(
                    ptr as usize % std::mem::align_of::<$atomic>() == 0,
                    "atomic location {:p} is not aligned to {} bytes",
                    ptr,
                    std::mem::align_of::<$atomic>(),
                );
                // SAFETY: the caller guarantees validity, alignment and
                // that all concurrent accesses are atomic.
                unsafe { <$atomic>::from_ptr(ptr) }
            }
        }

        impl OrderedPrimitives for $word {
            #[inline(always)]
            unsafe fn load_n(ptr: *mut Self, order: Ordering) -> Self {
                unsafe { Self::as_atomic(ptr).load(order) }
            }

            #[inline(always)]
            unsafe fn store_n(ptr: *mut Self, value: Self, order: Ordering) {
                unsafe { Self::as_atomic(ptr).store(value, order) }
            }

            #[inline(always)]
            unsafe fn exchange_n(ptr: *mut Self, value: Self, order: Ordering) -> Self {
                unsafe { Self::as_atomic(ptr).swap(value, order) }
            }

            #[inline(always)]
            unsafe fn fetch_add(ptr: *mut Self, value: Self, order: Ordering) -> Self {
                unsafe { Self::as_atomic(ptr).fetch_add(value, order) }
            }

            #[inline(always)]
            unsafe fn fetch_sub(ptr: *mut Self, value: Self, order: Ordering) -> Self {
                unsafe { Self::as_atomic(ptr).fetch_sub(value, order) }
            }

            #[inline(always)]
            unsafe fn fetch_xor(ptr: *mut Self, value: Self, order: Ordering) -> Self {
                unsafe { Self::as_atomic(ptr).fetch_xor(value, order) }
            }

            #[inline(always)]
            unsafe fn compare_exchange_n(
                ptr: *mut Self,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                unsafe { Self::as_atomic(ptr).compare_exchange(current, new, success, failure) }
            }
        }

        impl InterlockedPrimitives for $word {
            #[inline(always)]
            unsafe fn interlocked_or(ptr: *mut Self, value: Self) -> Self {
                unsafe { Self::as_atomic(ptr).fetch_or(value, Ordering::SeqCst) }
            }

            #[inline(always)]
            unsafe fn interlocked_exchange(ptr: *mut Self, value: Self) -> Self {
                unsafe { Self::as_atomic(ptr).swap(value, Ordering::SeqCst) }
            }

            #[inline(always)]
            unsafe fn interlocked_exchange_add(ptr: *mut Self, value: Self) -> Self {
                unsafe { Self::as_atomic(ptr).fetch_add(value, Ordering::SeqCst) }
            }

            #[inline(always)]
            unsafe fn interlocked_xor(ptr: *mut Self, value: Self) -> Self {
                unsafe { Self::as_atomic(ptr).fetch_xor(value, Ordering::SeqCst) }
            }

            #[inline(always)]
            unsafe fn interlocked_compare_exchange(
                ptr: *mut Self,
                exchange: Self,
                comparand: Self,
            ) -> Self {
                match unsafe { Self::as_atomic(ptr) }.compare_exchange(
                    comparand,
                    exchange,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                ) {
                    Ok(previous) | Err(previous) => previous,
                }
            }
        }
    };
}

#[cfg(target_has_atomic = "8")]
impl_atomic_word!(u8, std::sync::atomic::AtomicU8);
#[cfg(target_has_atomic = "16")]
impl_atomic_word!(u16, std::sync::atomic::AtomicU16);
#[cfg(target_has_atomic = "32")]
impl_atomic_word!(u32, std::sync::atomic::AtomicU32);
#[cfg(target_has_atomic = "64")]
impl_atomic_word!(u64, std::sync::atomic::AtomicU64);
