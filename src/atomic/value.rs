/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Values
//!
//! Value types the atomic layer operates on. A value is stored in memory as
//! exactly one [`AtomicWord`]; the word is the width class that selects the
//! native primitive.
//!
//! # Author
//!
//! Haixing Hu

use std::marker::PhantomData;
use std::mem;

use super::word::AtomicWord;

/// A value that can be accessed atomically as a single machine word.
///
/// Implemented for the fixed-width integers, `isize`/`usize`, `bool`,
/// `f32` and `f64`. User types of 1, 2, 4 or 8 bytes may implement it too.
///
/// # Safety
///
/// Implementors guarantee that:
///
/// - `size_of::<Self>() == size_of::<Self::Repr>()`;
/// - `into_repr` and `from_repr` are bit-preserving (a transmute);
/// - every word reachable through the implemented operations is a valid
///   bit pattern for `Self`.
///
/// The size requirement is also checked at compile time when an operation
/// is instantiated.
///
/// # Author
///
/// Haixing Hu
pub unsafe trait AtomicValue: Copy + Send + 'static {
    /// The word of the same width.
    type Repr: AtomicWord;

    /// Reinterprets the value as its word.
    fn into_repr(self) -> Self::Repr;

    /// Reinterprets a word as a value.
    fn from_repr(repr: Self::Repr) -> Self;
}

/// A value with wrapping two's-complement arithmetic and bitwise xor on its
/// word.
///
/// Required by `fetch_add`, `fetch_sub` and `xor_fetch`.
///
/// # Safety
///
/// In addition to the [`AtomicValue`] contract, every bit pattern of
/// `Self::Repr` must be a valid `Self`, and wrapping arithmetic on the word
/// must equal wrapping arithmetic on the value.
pub unsafe trait AtomicInteger: AtomicValue {}

/// Compile-time width validation for a value type.
pub(crate) struct WidthCheck<T>(PhantomData<T>);

impl<T: AtomicValue> WidthCheck<T> {
    /// Evaluated once per instantiated value type; fails the build for
    /// types whose size does not match their word.
    pub(crate) const VALID: () = {
        assert!(
            mem::size_of::<T>() <= 8,
            "atomic operations only support types up to 64 bits"
        );
        assert!(
            mem::size_of::<T>() == <T::Repr as AtomicWord>::WIDTH,
            "atomic value size must equal the size of its word"
        );
    };
}

/// Casts a value location to its word location, validating the width.
#[inline(always)]
pub(crate) fn word_ptr<T: AtomicValue>(ptr: *mut T) -> *mut T::Repr {
    #[allow(clippy::let_unit_value)]
    let () = WidthCheck::<T>::VALID;
    ptr.cast::<T::Repr>()
}

/// Implements [`AtomicValue`] and [`AtomicInteger`] for integer types.
///
/// # Parameters
///
/// * `$value` - The integer type (e.g., `i32`)
/// * `$repr` - The unsigned word of the same width (e.g., `u32`)
macro_rules! impl_atomic_integer_value {
    ($($value:ty => $repr:ty),+ $(,)?) => {
        $(
            unsafe impl AtomicValue for $value {
                type Repr = $repr;

                #[inline(always)]
                fn into_repr(self) -> $repr {
                    self as $repr
                }

                #[inline(always)]
                fn from_repr(repr: $repr) -> Self {
                    repr as $value
                }
            }

            unsafe impl AtomicInteger for $value {}
        )+
    };
}

#[cfg(target_has_atomic = "8")]
impl_atomic_integer_value!(u8 => u8, i8 => u8);
#[cfg(target_has_atomic = "16")]
impl_atomic_integer_value!(u16 => u16, i16 => u16);
#[cfg(target_has_atomic = "32")]
impl_atomic_integer_value!(u32 => u32, i32 => u32);
#[cfg(target_has_atomic = "64")]
impl_atomic_integer_value!(u64 => u64, i64 => u64);

#[cfg(all(target_pointer_width = "16", target_has_atomic = "16"))]
impl_atomic_integer_value!(usize => u16, isize => u16);
#[cfg(all(target_pointer_width = "32", target_has_atomic = "32"))]
impl_atomic_integer_value!(usize => u32, isize => u32);
#[cfg(all(target_pointer_width = "64", target_has_atomic = "64"))]
impl_atomic_integer_value!(usize => u64, isize => u64);

#[cfg(target_has_atomic = "8")]
unsafe impl AtomicValue for bool {
    type Repr = u8;

    #[inline(always)]
    fn into_repr(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    fn from_repr(repr: u8) -> Self {
        repr != 0
    }
}

// Floats are stored by bit pattern, so NaN payloads and signed zeros
// survive a round trip and compare-exchange compares bits, not values.
#[cfg(target_has_atomic = "32")]
unsafe impl AtomicValue for f32 {
    type Repr = u32;

    #[inline(always)]
    fn into_repr(self) -> u32 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_repr(repr: u32) -> Self {
        f32::from_bits(repr)
    }
}

#[cfg(target_has_atomic = "64")]
unsafe impl AtomicValue for f64 {
    type Repr = u64;

    #[inline(always)]
    fn into_repr(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_repr(repr: u64) -> Self {
        f64::from_bits(repr)
    }
}
