//! Integration test: the container against a capacity-free reference list.
//!
//! Any op sequence must leave the container with exactly the contents the
//! reference list has after the same sequence, and every reachable state
//! must satisfy `len <= capacity`.

use dynarr::{ArrayConfig, ArrayError, DynamicArray};
use dynarr_test_utils::{arb_ops, op_script, Op, ReferenceList};
use proptest::prelude::*;

/// Apply `op` to both sides and check they agree on the outcome.
fn step(array: &mut DynamicArray, model: &mut ReferenceList, op: Op) {
    match op {
        Op::Push(v) => {
            array.push(v).unwrap();
            model.push(v);
        }
        Op::Pop => {
            let expected = model.pop();
            match array.pop() {
                Ok(v) => assert_eq!(Some(v), expected),
                Err(e) => {
                    assert_eq!(e, ArrayError::EmptyContainer);
                    assert_eq!(expected, None);
                }
            }
        }
        Op::Get(i) => assert_eq!(array.get(i).ok(), model.get(i)),
        Op::Set(i, v) => assert_eq!(array.set(i, v).is_ok(), model.set(i, v)),
        Op::Insert(i, v) => assert_eq!(array.insert(i, v).is_ok(), model.insert(i, v)),
        Op::Erase(i) => assert_eq!(array.erase(i).ok(), model.erase(i)),
        Op::Reserve(n) => {
            let before = array.capacity();
            match array.reserve(n) {
                Ok(()) => assert_eq!(array.capacity(), n),
                Err(e) => {
                    assert!(matches!(e, ArrayError::CapacityNotIncreased { .. }));
                    assert!(n <= before);
                    assert_eq!(array.capacity(), before);
                }
            }
        }
        Op::Clear => {
            let before = array.capacity();
            array.clear();
            model.clear();
            assert_eq!(array.capacity(), before);
        }
    }
    assert_eq!(array.to_vec(), model.as_slice(), "after {op:?}");
    assert_eq!(array.len(), model.len());
    assert!(array.len() <= array.capacity(), "after {op:?}");
}

#[test]
fn seeded_scripts_match_reference() {
    for seed in 0..16 {
        let mut array = DynamicArray::new().unwrap();
        let mut model = ReferenceList::new();
        for op in op_script(seed, 2_000) {
            step(&mut array, &mut model, op);
        }
    }
}

#[test]
fn seeded_scripts_match_reference_without_shrink() {
    let config = ArrayConfig {
        shrink_on_underflow: false,
        ..ArrayConfig::core()
    };
    let mut array = DynamicArray::with_config(config).unwrap();
    let mut model = ReferenceList::new();
    let mut peak_capacity = 0;
    for op in op_script(99, 2_000) {
        step(&mut array, &mut model, op);
        assert!(array.capacity() >= peak_capacity, "capacity decreased");
        peak_capacity = array.capacity();
    }
}

#[test]
fn alternating_push_pop_at_half_does_not_thrash() {
    let mut array = DynamicArray::new().unwrap();
    for v in 0..9 {
        array.push(v).unwrap();
    }
    assert_eq!(array.capacity(), 16);
    for _ in 0..100 {
        array.pop().unwrap();
        assert_eq!(array.capacity(), 16);
        array.push(0).unwrap();
        assert_eq!(array.capacity(), 16);
    }
}

proptest! {
    #[test]
    fn any_script_matches_reference(ops in arb_ops(200)) {
        let mut array = DynamicArray::new().unwrap();
        let mut model = ReferenceList::new();
        for op in ops {
            step(&mut array, &mut model, op);
        }
    }

    #[test]
    fn set_of_get_is_noop(values in proptest::collection::vec(any::<i32>(), 1..64), pick in any::<prop::sample::Index>()) {
        let mut array = DynamicArray::new().unwrap();
        for &v in &values {
            array.push(v).unwrap();
        }
        let i = pick.index(values.len());
        let capacity = array.capacity();
        let v = array.get(i).unwrap();
        array.set(i, v).unwrap();
        prop_assert_eq!(array.to_vec(), values);
        prop_assert_eq!(array.capacity(), capacity);
    }

    #[test]
    fn insert_at_len_equals_push(values in proptest::collection::vec(any::<i32>(), 0..40), extra in any::<i32>()) {
        let mut a = DynamicArray::new().unwrap();
        let mut b = DynamicArray::new().unwrap();
        for &v in &values {
            a.push(v).unwrap();
            b.push(v).unwrap();
        }
        a.insert(a.len(), extra).unwrap();
        b.push(extra).unwrap();
        prop_assert_eq!(a.to_vec(), b.to_vec());
        prop_assert_eq!(a.capacity(), b.capacity());
    }

    #[test]
    fn fill_then_pop_one_keeps_capacity(doublings in 0u32..8) {
        let mut array = DynamicArray::new().unwrap();
        let capacity = 4usize << doublings;
        for v in 0..capacity as i32 {
            array.push(v).unwrap();
        }
        prop_assert_eq!(array.capacity(), capacity);
        array.pop().unwrap();
        prop_assert_eq!(array.capacity(), capacity);
    }
}
