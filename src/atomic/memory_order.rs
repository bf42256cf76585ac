/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Memory Order
//!
//! Defines the ordering intent attached to every atomic operation and its
//! translation into the orderings accepted by the native primitive
//! families.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use thiserror::Error;

/// Ordering used by `load`, `store`, `exchange` and the fetch operations
/// when the caller has no stronger opinion.
pub const DEFAULT_ORDER: MemoryOrder = MemoryOrder::SeqCst;

/// Default success ordering of a compare-exchange.
pub const DEFAULT_SUCCESS_ORDER: MemoryOrder = MemoryOrder::SeqCst;

/// Default failure ordering of a compare-exchange.
pub const DEFAULT_FAILURE_ORDER: MemoryOrder = MemoryOrder::Relaxed;

/// Ordering intent of a single atomic operation.
///
/// The five values mirror the C++20 / Rust memory model. An operation
/// only honors the half of an ordering that is relevant to it:
///
/// - **Loads** honor `Relaxed`, `Acquire` and `SeqCst`. `Release` acts as
///   `Relaxed` and `AcqRel` acts as `Acquire`.
/// - **Stores** honor `Relaxed`, `Release` and `SeqCst`. `Acquire` acts as
///   `Relaxed` and `AcqRel` acts as `Release`.
/// - **Read-modify-write** operations honor all five.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemoryOrder {
    /// No ordering constraint, only atomicity.
    Relaxed,
    /// Later accesses cannot move before this operation.
    Acquire,
    /// Earlier accesses cannot move after this operation.
    Release,
    /// Both `Acquire` and `Release`.
    AcqRel,
    /// `AcqRel` plus a single total order over all `SeqCst` operations.
    #[default]
    SeqCst,
}

/// Error returned when decoding an unrecognized builtin ordering code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderCodeError {
    /// The code is outside the `0..=5` range of the builtin convention.
    #[error("unknown atomic memory order code {0}")]
    Unknown(i32),
}

impl MemoryOrder {
    /// All orderings, weakest first.
    pub const ALL: [MemoryOrder; 5] = [
        MemoryOrder::Relaxed,
        MemoryOrder::Acquire,
        MemoryOrder::Release,
        MemoryOrder::AcqRel,
        MemoryOrder::SeqCst,
    ];

    /// Returns `true` if this ordering carries acquire semantics.
    #[inline]
    pub const fn has_acquire(self) -> bool {
        matches!(
            self,
            MemoryOrder::Acquire | MemoryOrder::AcqRel | MemoryOrder::SeqCst
        )
    }

    /// Returns `true` if this ordering carries release semantics.
    #[inline]
    pub const fn has_release(self) -> bool {
        matches!(
            self,
            MemoryOrder::Release | MemoryOrder::AcqRel | MemoryOrder::SeqCst
        )
    }

    /// Drops the write-relevant half, leaving an ordering valid for a load.
    #[inline]
    pub const fn for_load(self) -> MemoryOrder {
        match self {
            MemoryOrder::Relaxed | MemoryOrder::Release => MemoryOrder::Relaxed,
            MemoryOrder::Acquire | MemoryOrder::AcqRel => MemoryOrder::Acquire,
            MemoryOrder::SeqCst => MemoryOrder::SeqCst,
        }
    }

    /// Drops the read-relevant half, leaving an ordering valid for a store.
    #[inline]
    pub const fn for_store(self) -> MemoryOrder {
        match self {
            MemoryOrder::Relaxed | MemoryOrder::Acquire => MemoryOrder::Relaxed,
            MemoryOrder::Release | MemoryOrder::AcqRel => MemoryOrder::Release,
            MemoryOrder::SeqCst => MemoryOrder::SeqCst,
        }
    }

    /// Maps onto the standard library ordering, one-to-one.
    #[inline]
    pub const fn to_std(self) -> Ordering {
        match self {
            MemoryOrder::Relaxed => Ordering::Relaxed,
            MemoryOrder::Acquire => Ordering::Acquire,
            MemoryOrder::Release => Ordering::Release,
            MemoryOrder::AcqRel => Ordering::AcqRel,
            MemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }

    /// Decodes a builtin-atomics ordering code.
    ///
    /// `1` (consume) is strengthened to `Acquire`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderCodeError::Unknown`] for codes outside `0..=5`.
    pub const fn from_code(code: i32) -> Result<MemoryOrder, OrderCodeError> {
        match code {
            0 => Ok(MemoryOrder::Relaxed),
            1 | 2 => Ok(MemoryOrder::Acquire),
            3 => Ok(MemoryOrder::Release),
            4 => Ok(MemoryOrder::AcqRel),
            5 => Ok(MemoryOrder::SeqCst),
            other => Err(OrderCodeError::Unknown(other)),
        }
    }

    /// Returns the builtin-atomics code of this ordering.
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            MemoryOrder::Relaxed => 0,
            MemoryOrder::Acquire => 2,
            MemoryOrder::Release => 3,
            MemoryOrder::AcqRel => 4,
            MemoryOrder::SeqCst => 5,
        }
    }
}

impl From<MemoryOrder> for Ordering {
    #[inline]
    fn from(order: MemoryOrder) -> Self {
        order.to_std()
    }
}

impl TryFrom<i32> for MemoryOrder {
    type Error = OrderCodeError;

    #[inline]
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        MemoryOrder::from_code(code)
    }
}

impl fmt::Display for MemoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemoryOrder::Relaxed => "relaxed",
            MemoryOrder::Acquire => "acquire",
            MemoryOrder::Release => "release",
            MemoryOrder::AcqRel => "acq_rel",
            MemoryOrder::SeqCst => "seq_cst",
        };
        f.write_str(name)
    }
}
