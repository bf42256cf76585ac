/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Counter Example
//!
//! Hands out unique tickets from a shared counter and publishes a result
//! with a release store.

use prism3_atomic_ops::{
    AtomicOps,
    AtomicSlot,
    MemoryOrder,
    Platform,
};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Ticket Counter ({} backend) ===\n", Platform::NAME);

    let next_ticket = Arc::new(AtomicSlot::<u64>::new(0));
    let mut handles = vec![];

    for worker in 0..4 {
        let next_ticket = next_ticket.clone();
        let handle = thread::spawn(move || {
            let tickets: Vec<u64> = (0..3)
                .map(|_| next_ticket.fetch_add(1, MemoryOrder::Relaxed))
                .collect();
            println!("worker {} got tickets {:?}", worker, tickets);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!("\ntickets issued: {}", next_ticket.load(MemoryOrder::SeqCst));

    println!("\n=== Publishing a Result ===\n");

    let result = Arc::new(AtomicSlot::<u32>::new(0));
    let ready = Arc::new(AtomicSlot::<bool>::new(false));

    let consumer = {
        let result = result.clone();
        let ready = ready.clone();
        thread::spawn(move || {
            while !ready.load(MemoryOrder::Acquire) {
                std::hint::spin_loop();
            }
            result.load(MemoryOrder::Relaxed)
        })
    };

    result.store(42, MemoryOrder::Relaxed);
    ready.store(true, MemoryOrder::Release);
    println!("consumer observed {}", consumer.join().unwrap());
}
