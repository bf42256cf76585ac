/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! Property-based tests checking that both backends are observationally
//! identical: the same operation sequence gives the same results and the
//! same final state.

macro_rules! backend_equivalence {
    ($value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use prism3_atomic_ops::atomic::{
                AtomicOps,
                AtomicSlot,
                Interlocked,
                MemoryOrder,
                Ordered,
            };
            use proptest::prelude::*;

            type Value = $value_type;

            #[derive(Debug, Clone, Copy)]
            enum Op {
                Load(MemoryOrder),
                Store(Value, MemoryOrder),
                Exchange(Value, MemoryOrder),
                FetchAdd(Value, MemoryOrder),
                FetchSub(Value, MemoryOrder),
                XorFetch(Value, MemoryOrder),
                CompareExchange(Value, Value, MemoryOrder, MemoryOrder),
                CompareExchangeN(Value, Value, MemoryOrder, MemoryOrder),
            }

            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            enum Outcome {
                Unit,
                Value(Value),
                Exchanged(bool, Value),
            }

            fn order() -> impl Strategy<Value = MemoryOrder> {
                prop::sample::select(MemoryOrder::ALL.to_vec())
            }

            // Small values make compare-exchange hits likely.
            fn value() -> impl Strategy<Value = Value> {
                prop_oneof![any::<Value>(), (0 as Value)..(4 as Value)]
            }

            fn op() -> impl Strategy<Value = Op> {
                prop_oneof![
                    order().prop_map(Op::Load),
                    (value(), order()).prop_map(|(v, o)| Op::Store(v, o)),
                    (value(), order()).prop_map(|(v, o)| Op::Exchange(v, o)),
                    (value(), order()).prop_map(|(v, o)| Op::FetchAdd(v, o)),
                    (value(), order()).prop_map(|(v, o)| Op::FetchSub(v, o)),
                    (value(), order()).prop_map(|(v, o)| Op::XorFetch(v, o)),
                    (value(), value(), order(), order())
                        .prop_map(|(e, d, s, f)| Op::CompareExchange(e, d, s, f)),
                    (value(), value(), order(), order())
                        .prop_map(|(e, d, s, f)| Op::CompareExchangeN(e, d, s, f)),
                ]
            }

            fn apply<B: AtomicOps>(slot: &AtomicSlot<Value, B>, op: Op) -> Outcome {
                match op {
                    Op::Load(o) => Outcome::Value(slot.load(o)),
                    Op::Store(v, o) => {
                        slot.store(v, o);
                        Outcome::Unit
                    }
                    Op::Exchange(v, o) => Outcome::Value(slot.exchange(v, o)),
                    Op::FetchAdd(v, o) => Outcome::Value(slot.fetch_add(v, o)),
                    Op::FetchSub(v, o) => Outcome::Value(slot.fetch_sub(v, o)),
                    Op::XorFetch(v, o) => Outcome::Value(slot.xor_fetch(v, o)),
                    Op::CompareExchange(mut expected, desired, s, f) => {
                        let exchanged = slot.compare_exchange(&mut expected, desired, s, f);
                        Outcome::Exchanged(exchanged, expected)
                    }
                    Op::CompareExchangeN(expected, desired, s, f) => {
                        let exchanged = slot.compare_exchange_n(expected, desired, s, f);
                        Outcome::Exchanged(exchanged, expected)
                    }
                }
            }

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(256))]

                #[test]
                fn backends_agree(initial in value(), ops in prop::collection::vec(op(), 1..64)) {
                    let ordered = AtomicSlot::<Value, Ordered>::new(initial);
                    let interlocked = AtomicSlot::<Value, Interlocked>::new(initial);

                    for op in ops {
                        let left = apply(&ordered, op);
                        let right = apply(&interlocked, op);
                        prop_assert_eq!(left, right, "diverged on {:?}", op);
                    }

                    prop_assert_eq!(ordered.into_inner(), interlocked.into_inner());
                }

                #[test]
                fn fetch_add_matches_wrapping_add(initial in any::<Value>(), delta in any::<Value>()) {
                    let ordered = AtomicSlot::<Value, Ordered>::new(initial);
                    let interlocked = AtomicSlot::<Value, Interlocked>::new(initial);
                    prop_assert_eq!(ordered.fetch_add(delta, MemoryOrder::SeqCst), initial);
                    prop_assert_eq!(interlocked.fetch_add(delta, MemoryOrder::SeqCst), initial);
                    prop_assert_eq!(ordered.get(), initial.wrapping_add(delta));
                    prop_assert_eq!(interlocked.get(), initial.wrapping_add(delta));
                }

                #[test]
                fn xor_fetch_is_an_involution(initial in any::<Value>(), mask in any::<Value>()) {
                    let slot = AtomicSlot::<Value, Interlocked>::new(initial);
                    prop_assert_eq!(slot.xor_fetch(mask, MemoryOrder::AcqRel), initial ^ mask);
                    prop_assert_eq!(slot.xor_fetch(mask, MemoryOrder::AcqRel), initial);
                }
            }
        }
    };
}

backend_equivalence!(u8, u8_equivalence);
backend_equivalence!(i16, i16_equivalence);
backend_equivalence!(u32, u32_equivalence);
backend_equivalence!(i64, i64_equivalence);
