/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Slot
//!
//! A safe, owning cell over the ordering-tagged operations.
//!
//! # Author
//!
//! Haixing Hu

use std::cell::UnsafeCell;
use std::fmt;
use std::marker::PhantomData;

use super::backend::{
    AtomicOps,
    Platform,
};
use super::memory_order::{
    MemoryOrder,
    DEFAULT_FAILURE_ORDER,
    DEFAULT_ORDER,
    DEFAULT_SUCCESS_ORDER,
};
use super::value::{
    AtomicInteger,
    AtomicValue,
};
use super::word::AtomicWord;

/// A memory location accessed only through atomic operations.
///
/// `AtomicSlot` owns its value, so it upholds the safety requirements of
/// the raw operations itself: the location is valid, correctly aligned for
/// the value's word, and never accessed non-atomically while shared.
///
/// The backend parameter defaults to [`Platform`]. Naming a backend
/// explicitly gives a slot whose behavior can be compared against the
/// other one.
///
/// # Memory Ordering Strategy
///
/// Methods taking a [`MemoryOrder`] forward it unchanged. The convenience
/// methods without one (`get`, `set`, `swap`, `compare_and_set`,
/// `get_and_add`, ...) use `SeqCst`, and `Relaxed` for a failed
/// compare-exchange.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::atomic::{AtomicSlot, MemoryOrder};
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(AtomicSlot::<u64>::new(0));
/// let mut handles = vec![];
///
/// for _ in 0..10 {
///     let counter = counter.clone();
///     let handle = thread::spawn(move || {
///         for _ in 0..100 {
///             counter.fetch_add(1, MemoryOrder::Relaxed);
///         }
///     });
///     handles.push(handle);
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(counter.get(), 1000);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(C)]
pub struct AtomicSlot<T: AtomicValue, B: AtomicOps = Platform> {
    _align: [<T::Repr as AtomicWord>::Atomic; 0],
    value: UnsafeCell<T>,
    _backend: PhantomData<fn() -> B>,
}

// SAFETY: the value is only accessed through atomic operations while
// shared.
unsafe impl<T: AtomicValue, B: AtomicOps> Sync for AtomicSlot<T, B> {}

impl<T: AtomicValue, B: AtomicOps> AtomicSlot<T, B> {
    /// Creates a new slot holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            _align: [],
            value: UnsafeCell::new(value),
            _backend: PhantomData,
        }
    }

    /// Returns the raw location, for use with [`crate::atomic::ops`].
    #[inline]
    pub const fn as_ptr(&self) -> *mut T {
        self.value.get()
    }

    /// Returns a mutable reference to the value.
    ///
    /// No atomic access is needed, since `&mut self` is exclusive.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    /// Consumes the slot and returns the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    /// Loads the current value.
    ///
    /// # Parameters
    ///
    /// * `order` - The ordering. Only `Relaxed`, `Acquire` and `SeqCst`
    ///   constrain a load.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load(&self, order: MemoryOrder) -> T {
        // SAFETY: the slot owns a valid, aligned location.
        unsafe { B::load(self.as_ptr(), order) }
    }

    /// Stores a new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    /// * `order` - The ordering. Only `Relaxed`, `Release` and `SeqCst`
    ///   constrain a store.
    #[inline]
    pub fn store(&self, value: T, order: MemoryOrder) {
        // SAFETY: the slot owns a valid, aligned location.
        unsafe { B::store(self.as_ptr(), value, order) }
    }

    /// Swaps in a new value, returning the previous one.
    #[inline]
    pub fn exchange(&self, value: T, order: MemoryOrder) -> T {
        // SAFETY: the slot owns a valid, aligned location.
        unsafe { B::exchange(self.as_ptr(), value, order) }
    }

    /// Strong compare-exchange.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the slot must hold. Receives the actual
    ///   value on failure.
    /// * `desired` - The value stored on success.
    /// * `success` - The ordering of the read-modify-write on success.
    /// * `failure` - The ordering of the load on failure.
    ///
    /// # Returns
    ///
    /// `true` if `desired` was stored.
    #[inline]
    pub fn compare_exchange(
        &self,
        expected: &mut T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        // SAFETY: the slot owns a valid, aligned location.
        unsafe { B::compare_exchange(self.as_ptr(), expected, desired, success, failure) }
    }

    /// Strong compare-exchange with `expected` by value.
    #[inline]
    pub fn compare_exchange_n(
        &self,
        expected: T,
        desired: T,
        success: MemoryOrder,
        failure: MemoryOrder,
    ) -> bool {
        // SAFETY: the slot owns a valid, aligned location.
        unsafe { B::compare_exchange_n(self.as_ptr(), expected, desired, success, failure) }
    }

    /// Loads the current value with `SeqCst` ordering.
    #[inline]
    pub fn get(&self) -> T {
        self.load(DEFAULT_ORDER)
    }

    /// Stores a new value with `SeqCst` ordering.
    #[inline]
    pub fn set(&self, value: T) {
        self.store(value, DEFAULT_ORDER)
    }

    /// Swaps in a new value with `SeqCst` ordering, returning the previous
    /// one.
    #[inline]
    pub fn swap(&self, value: T) -> T {
        self.exchange(value, DEFAULT_ORDER)
    }

    /// Compares and sets the value with the default orderings.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` with the value the slot held.
    #[inline]
    pub fn compare_and_set(&self, current: T, new: T) -> Result<(), T> {
        let mut expected = current;
        if self.compare_exchange(
            &mut expected,
            new,
            DEFAULT_SUCCESS_ORDER,
            DEFAULT_FAILURE_ORDER,
        ) {
            Ok(())
        } else {
            Err(expected)
        }
    }
}

impl<T: AtomicInteger, B: AtomicOps> AtomicSlot<T, B> {
    /// Adds `delta` with wrapping, returning the previous value.
    #[inline]
    pub fn fetch_add(&self, delta: T, order: MemoryOrder) -> T {
        // SAFETY: the slot owns a valid, aligned location.
        unsafe { B::fetch_add(self.as_ptr(), delta, order) }
    }

    /// Subtracts `delta` with wrapping, returning the previous value.
    #[inline]
    pub fn fetch_sub(&self, delta: T, order: MemoryOrder) -> T {
        // SAFETY: the slot owns a valid, aligned location.
        unsafe { B::fetch_sub(self.as_ptr(), delta, order) }
    }

    /// Xors `mask` in, returning the **new** value.
    #[inline]
    pub fn xor_fetch(&self, mask: T, order: MemoryOrder) -> T {
        // SAFETY: the slot owns a valid, aligned location.
        unsafe { B::xor_fetch(self.as_ptr(), mask, order) }
    }

    /// Adds `delta` with `SeqCst` ordering, returning the previous value.
    #[inline]
    pub fn get_and_add(&self, delta: T) -> T {
        self.fetch_add(delta, DEFAULT_ORDER)
    }

    /// Subtracts `delta` with `SeqCst` ordering, returning the previous
    /// value.
    #[inline]
    pub fn get_and_sub(&self, delta: T) -> T {
        self.fetch_sub(delta, DEFAULT_ORDER)
    }

    /// Xors `mask` in with `SeqCst` ordering, returning the new value.
    #[inline]
    pub fn xor_and_get(&self, mask: T) -> T {
        self.xor_fetch(mask, DEFAULT_ORDER)
    }
}

impl<T: AtomicValue + Default, B: AtomicOps> Default for AtomicSlot<T, B> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: AtomicValue, B: AtomicOps> From<T> for AtomicSlot<T, B> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: AtomicValue + fmt::Debug, B: AtomicOps> fmt::Debug for AtomicSlot<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicSlot")
            .field("value", &self.load(MemoryOrder::Relaxed))
            .field("backend", &B::NAME)
            .finish()
    }
}
