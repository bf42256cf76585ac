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
//! Ordering-tagged atomic operations over caller-owned memory, dispatched
//! by value width to one of two native primitive families.
//!
//! # Features
//!
//! - One vocabulary for load, store, exchange, fetch-add/sub, xor-fetch
//!   and compare-exchange over 1, 2, 4 and 8 byte values
//! - Explicit [`MemoryOrder`] per operation
//! - Width selection at compile time, unsupported widths fail to build
//! - Two interchangeable backends behind [`AtomicOps`], chosen at build
//!   time, never at run time
//! - A safe owning cell, [`AtomicSlot`]
//!
//! # Author
//!
//! Haixing Hu

pub mod backend;
mod memory_order;
pub mod ops;
mod slot;
mod value;
mod word;

pub use backend::{
    AtomicOps,
    Interlocked,
    Ordered,
    Platform,
};
pub use memory_order::{
    MemoryOrder,
    OrderCodeError,
    DEFAULT_FAILURE_ORDER,
    DEFAULT_ORDER,
    DEFAULT_SUCCESS_ORDER,
};
pub use slot::AtomicSlot;
pub use value::{
    AtomicInteger,
    AtomicValue,
};
pub use word::{
    AtomicWord,
    InterlockedPrimitives,
    OrderedPrimitives,
};
