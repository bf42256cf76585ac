/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_ops::atomic::{
    ops,
    AtomicOps,
    AtomicSlot,
    Interlocked,
    MemoryOrder,
    Ordered,
};
use std::collections::HashSet;
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 8;
const ITERATIONS_PER_THREAD: usize = 1000;

fn fetch_add_hands_out_every_ticket_once<B: AtomicOps + 'static>() {
    let counter = Arc::new(AtomicSlot::<u64, B>::new(0));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            let mut tickets = Vec::with_capacity(ITERATIONS_PER_THREAD);
            for _ in 0..ITERATIONS_PER_THREAD {
                tickets.push(counter.fetch_add(1, MemoryOrder::SeqCst));
            }
            tickets
        });
        handles.push(handle);
    }

    let mut tickets: Vec<u64> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    tickets.sort_unstable();

    let total = (NUM_THREADS * ITERATIONS_PER_THREAD) as u64;
    assert_eq!(counter.load(MemoryOrder::SeqCst), total, "{}", B::NAME);
    assert_eq!(tickets, (0..total).collect::<Vec<_>>(), "{}", B::NAME);
}

#[test]
fn test_concurrent_fetch_add_tickets_ordered() {
    fetch_add_hands_out_every_ticket_once::<Ordered>();
}

#[test]
fn test_concurrent_fetch_add_tickets_interlocked() {
    fetch_add_hands_out_every_ticket_once::<Interlocked>();
}

// Readers issue emulated loads (an `or` with zero on the interlocked
// backend) while writers run compare-exchange loops on the same word.
// No increment may be lost and readers must see a non-decreasing count.
fn loads_do_not_disturb_cas_loops<B: AtomicOps + 'static>() {
    const WRITERS: usize = 4;
    const READERS: usize = 4;

    let counter = Arc::new(AtomicSlot::<u32, B>::new(0));
    let done = Arc::new(AtomicSlot::<bool, B>::new(false));
    let barrier = Arc::new(Barrier::new(WRITERS + READERS));

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let counter = counter.clone();
            let done = done.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                let mut last = 0;
                while !done.load(MemoryOrder::Acquire) {
                    let seen = counter.load(MemoryOrder::Acquire);
                    assert!(seen >= last, "count went backwards: {} < {}", seen, last);
                    last = seen;
                }
            })
        })
        .collect();

    let writers: Vec<_> = (0..WRITERS)
        .map(|_| {
            let counter = counter.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ITERATIONS_PER_THREAD {
                    let mut current = counter.load(MemoryOrder::Relaxed);
                    loop {
                        let next = current + 1;
                        if counter.compare_exchange(
                            &mut current,
                            next,
                            MemoryOrder::AcqRel,
                            MemoryOrder::Relaxed,
                        ) {
                            break;
                        }
                    }
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    done.store(true, MemoryOrder::Release);
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(
        counter.load(MemoryOrder::SeqCst),
        (WRITERS * ITERATIONS_PER_THREAD) as u32
    );
}

#[test]
fn test_loads_do_not_disturb_cas_loops_ordered() {
    loads_do_not_disturb_cas_loops::<Ordered>();
}

#[test]
fn test_loads_do_not_disturb_cas_loops_interlocked() {
    loads_do_not_disturb_cas_loops::<Interlocked>();
}

fn release_acquire_publishes_data<B: AtomicOps + 'static>() {
    for round in 0..100u64 {
        let data = Arc::new(AtomicSlot::<u64, B>::new(0));
        let ready = Arc::new(AtomicSlot::<u8, B>::new(0));

        let consumer = {
            let data = data.clone();
            let ready = ready.clone();
            thread::spawn(move || {
                while ready.load(MemoryOrder::Acquire) == 0 {
                    std::hint::spin_loop();
                }
                data.load(MemoryOrder::Relaxed)
            })
        };

        data.store(round + 1, MemoryOrder::Relaxed);
        ready.store(1, MemoryOrder::Release);

        assert_eq!(consumer.join().unwrap(), round + 1);
    }
}

#[test]
fn test_release_acquire_message_passing_ordered() {
    release_acquire_publishes_data::<Ordered>();
}

#[test]
fn test_release_acquire_message_passing_interlocked() {
    release_acquire_publishes_data::<Interlocked>();
}

fn exchange_chain_loses_nothing<B: AtomicOps + 'static>() {
    let slot = Arc::new(AtomicSlot::<u16, B>::new(0));
    let mut handles = vec![];

    for id in 1..=NUM_THREADS as u16 {
        let slot = slot.clone();
        handles.push(thread::spawn(move || slot.exchange(id, MemoryOrder::AcqRel)));
    }

    let mut seen: HashSet<u16> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    seen.insert(slot.load(MemoryOrder::SeqCst));

    let expected: HashSet<u16> = (0..=NUM_THREADS as u16).collect();
    assert_eq!(seen, expected, "{}", B::NAME);
}

#[test]
fn test_concurrent_exchange_ordered() {
    exchange_chain_loses_nothing::<Ordered>();
}

#[test]
fn test_concurrent_exchange_interlocked() {
    exchange_chain_loses_nothing::<Interlocked>();
}

fn xor_toggles_cancel_out<B: AtomicOps + 'static>() {
    let flags = Arc::new(AtomicSlot::<u8, B>::new(0b1010_0101));
    let mut handles = vec![];

    for bit in 0..NUM_THREADS {
        let flags = flags.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                flags.xor_fetch(1 << bit, MemoryOrder::AcqRel);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // An even number of toggles per bit.
    assert_eq!(flags.load(MemoryOrder::SeqCst), 0b1010_0101);
}

#[test]
fn test_concurrent_xor_ordered() {
    xor_toggles_cancel_out::<Ordered>();
}

#[test]
fn test_concurrent_xor_interlocked() {
    xor_toggles_cancel_out::<Interlocked>();
}

#[test]
fn test_raw_ops_on_caller_owned_memory() {
    let counters: &'static mut [u64] = Box::leak(vec![0u64; 4].into_boxed_slice());
    let base = counters.as_mut_ptr() as usize;
    let mut handles = vec![];

    for t in 0..NUM_THREADS {
        handles.push(thread::spawn(move || {
            let ptr = (base as *mut u64).wrapping_add(t % 4);
            for _ in 0..ITERATIONS_PER_THREAD {
                // SAFETY: `ptr` points into a leaked allocation that is only
                // accessed atomically.
                unsafe {
                    ops::fetch_add(ptr, 2, MemoryOrder::Relaxed);
                    ops::fetch_sub(ptr, 1, MemoryOrder::Relaxed);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..4 {
        // SAFETY: same allocation, all writers have joined.
        let value = unsafe { ops::load((base as *mut u64).add(i), MemoryOrder::SeqCst) };
        assert_eq!(value, (NUM_THREADS / 4 * ITERATIONS_PER_THREAD) as u64);
    }
}
