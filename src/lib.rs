/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-ops
//!
//! Portable ordering-tagged atomic operations over raw memory.
//!
//! This crate gives one vocabulary for atomic `load`, `store`, `exchange`,
//! `fetch_add`, `fetch_sub`, `xor_fetch` and `compare_exchange` on values
//! of 1, 2, 4 or 8 bytes, each taking an explicit [`MemoryOrder`]. It can
//! run on two primitive families that expose different operations:
//!
//! - **Ordered**: every primitive takes an ordering (the default).
//! - **Interlocked**: every primitive is a full barrier without an
//!   ordering parameter and there is no plain load; enabled with the
//!   `interlocked` feature.
//!
//! Both give the same observable semantics for every ordering.
//!
//! ## Features
//!
//! - Free functions in [`atomic::ops`] and a safe [`AtomicSlot`] cell
//! - Backends [`Ordered`] and [`Interlocked`] behind [`AtomicOps`]
//! - GCC builtin call shapes in `compat` (feature `compat`)
//! - Bit probing in [`bits`]: popcount, lowest set bit, log2, power of two
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_ops::{AtomicSlot, MemoryOrder};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = Arc::new(AtomicSlot::<u64>::new(0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     let handle = thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.fetch_add(1, MemoryOrder::SeqCst);
//!         }
//!     });
//!     handles.push(handle);
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.load(MemoryOrder::Acquire), 1000);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod bits;
#[cfg(feature = "compat")]
pub mod compat;

// Re-export the operation vocabulary
pub use atomic::{
    AtomicInteger,
    AtomicOps,
    AtomicSlot,
    AtomicValue,
    Interlocked,
    MemoryOrder,
    Ordered,
    Platform,
};
