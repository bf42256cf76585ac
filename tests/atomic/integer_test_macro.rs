/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate tests for an atomic integer value type.
///
/// Every test runs once per backend.
#[macro_export]
macro_rules! test_atomic_integer {
    ($value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use prism3_atomic_ops::atomic::{
                AtomicOps,
                AtomicSlot,
                Interlocked,
                MemoryOrder,
                Ordered,
            };

            type Value = $value_type;

            fn store_load<B: AtomicOps>() {
                let slot = AtomicSlot::<Value, B>::new(0);
                for (i, order) in MemoryOrder::ALL.iter().enumerate() {
                    let value = (i as Value).wrapping_add(40);
                    slot.store(value, *order);
                    for read in MemoryOrder::ALL.iter() {
                        assert_eq!(slot.load(*read), value, "store {} load {}", order, read);
                    }
                }
                slot.store(Value::MAX, MemoryOrder::Release);
                assert_eq!(slot.load(MemoryOrder::Acquire), Value::MAX);
                slot.store(Value::MIN, MemoryOrder::Relaxed);
                assert_eq!(slot.load(MemoryOrder::Relaxed), Value::MIN);
            }

            fn exchange<B: AtomicOps>() {
                let slot = AtomicSlot::<Value, B>::new(10);
                for order in MemoryOrder::ALL.iter() {
                    let old = slot.exchange(20, *order);
                    assert_eq!(old, 10);
                    assert_eq!(slot.exchange(10, *order), 20);
                }
                assert_eq!(slot.get(), 10);
            }

            fn compare_exchange_success<B: AtomicOps>() {
                let slot = AtomicSlot::<Value, B>::new(10);
                let mut expected: Value = 10;
                assert!(slot.compare_exchange(
                    &mut expected,
                    20,
                    MemoryOrder::SeqCst,
                    MemoryOrder::Relaxed,
                ));
                assert_eq!(expected, 10);
                assert_eq!(slot.get(), 20);
            }

            fn compare_exchange_failure<B: AtomicOps>() {
                let slot = AtomicSlot::<Value, B>::new(30);
                for success in MemoryOrder::ALL.iter() {
                    for failure in MemoryOrder::ALL.iter() {
                        let mut expected: Value = 10;
                        assert!(!slot.compare_exchange(&mut expected, 20, *success, *failure));
                        assert_eq!(expected, 30, "success {} failure {}", success, failure);
                        assert_eq!(slot.get(), 30);
                    }
                }
            }

            fn compare_exchange_n<B: AtomicOps>() {
                let slot = AtomicSlot::<Value, B>::new(10);
                assert!(!slot.compare_exchange_n(15, 20, MemoryOrder::AcqRel, MemoryOrder::Acquire));
                assert_eq!(slot.get(), 10);
                assert!(slot.compare_exchange_n(10, 20, MemoryOrder::AcqRel, MemoryOrder::Acquire));
                assert_eq!(slot.get(), 20);
            }

            fn fetch_add<B: AtomicOps>() {
                let slot = AtomicSlot::<Value, B>::new(10);
                assert_eq!(slot.fetch_add(5, MemoryOrder::SeqCst), 10);
                assert_eq!(slot.get(), 15);

                slot.set(Value::MAX);
                assert_eq!(slot.fetch_add(1, MemoryOrder::Relaxed), Value::MAX);
                assert_eq!(slot.get(), Value::MIN);
            }

            fn fetch_sub<B: AtomicOps>() {
                let slot = AtomicSlot::<Value, B>::new(10);
                assert_eq!(slot.fetch_sub(3, MemoryOrder::AcqRel), 10);
                assert_eq!(slot.get(), 7);

                slot.set(Value::MIN);
                assert_eq!(slot.fetch_sub(1, MemoryOrder::Release), Value::MIN);
                assert_eq!(slot.get(), Value::MAX);
            }

            fn xor_fetch<B: AtomicOps>() {
                let slot = AtomicSlot::<Value, B>::new(0b1100);
                let new = slot.xor_fetch(0b0110, MemoryOrder::SeqCst);
                assert_eq!(new, 0b1010);
                assert_eq!(slot.get(), 0b1010);
                assert_eq!(slot.xor_fetch(0b0110, MemoryOrder::Acquire), 0b1100);
                assert_eq!(slot.get(), 0b1100);
            }

            #[test]
            fn test_store_then_load() {
                store_load::<Ordered>();
                store_load::<Interlocked>();
            }

            #[test]
            fn test_exchange_returns_previous() {
                exchange::<Ordered>();
                exchange::<Interlocked>();
            }

            #[test]
            fn test_compare_exchange_success() {
                compare_exchange_success::<Ordered>();
                compare_exchange_success::<Interlocked>();
            }

            #[test]
            fn test_compare_exchange_failure_reports_actual() {
                compare_exchange_failure::<Ordered>();
                compare_exchange_failure::<Interlocked>();
            }

            #[test]
            fn test_compare_exchange_by_value() {
                compare_exchange_n::<Ordered>();
                compare_exchange_n::<Interlocked>();
            }

            #[test]
            fn test_fetch_add_returns_previous_and_wraps() {
                fetch_add::<Ordered>();
                fetch_add::<Interlocked>();
            }

            #[test]
            fn test_fetch_sub_returns_previous_and_wraps() {
                fetch_sub::<Ordered>();
                fetch_sub::<Interlocked>();
            }

            #[test]
            fn test_xor_fetch_returns_new_value() {
                xor_fetch::<Ordered>();
                xor_fetch::<Interlocked>();
            }
        }
    };
}
