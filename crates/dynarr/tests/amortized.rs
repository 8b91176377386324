//! Integration test: amortized insertion cost under the doubling policy.
//!
//! Checks the aggregate method (total cost over N insertions) and the
//! accounting method (3 credits per insertion never fall behind real cost)
//! against the closed-form totals in `dynarr_test_utils::fixtures`.

use dynarr::{CostLedger, TrackedArray, CREDITS_PER_INSERTION};
use dynarr_test_utils::fixtures::{doubling_copies, doubling_resizes, tracked_cost};
use proptest::prelude::*;

#[test]
fn sixteen_insertions() {
    let mut table = TrackedArray::new().unwrap();
    let mut ledger = CostLedger::new();
    let mut capacities = Vec::new();

    for v in 1..=16 {
        let charge = table.insert(v, &mut ledger).unwrap();
        assert_eq!(charge.credits, 3);
        if charge.resized {
            capacities.push(charge.capacity);
        }
        assert!(
            ledger.total_credits >= ledger.total_cost,
            "credits fell behind after insertion {v}"
        );
    }

    assert_eq!(capacities, vec![2, 4, 8, 16]);
    assert_eq!(ledger.resizes, 4);
    assert_eq!(ledger.elements_copied, 15);
    assert_eq!(ledger.total_cost, 31);
    assert_eq!(ledger.total_credits, 48);
    assert_eq!(ledger.credits_remaining(), 17);
    assert!((ledger.amortized_cost() - 31.0 / 16.0).abs() < 1e-9);
    assert!(ledger.amortized_cost() < CREDITS_PER_INSERTION as f64);
    assert_eq!(table.to_vec(), (1..=16).collect::<Vec<_>>());
    assert_eq!(table.capacity(), 16);
}

#[test]
fn summary_reports_both_methods() {
    let mut table = TrackedArray::new().unwrap();
    let mut ledger = CostLedger::new();
    for v in 1..=16 {
        table.insert(v, &mut ledger).unwrap();
    }
    let summary = ledger.summary();
    assert!(summary.contains("16 insertions"), "{summary}");
    assert!(summary.contains("total cost 31"), "{summary}");
    assert!(summary.contains("amortized 1.94"), "{summary}");
    assert!(summary.contains("17 remaining"), "{summary}");
}

#[test]
fn ledger_shared_across_tables() {
    let mut a = TrackedArray::new().unwrap();
    let mut b = TrackedArray::new().unwrap();
    let mut ledger = CostLedger::new();
    for v in 0..4 {
        a.insert(v, &mut ledger).unwrap();
        b.insert(v, &mut ledger).unwrap();
    }
    assert_eq!(ledger.insertions, 8);
    assert_eq!(ledger.total_cost, 2 * tracked_cost(4));
}

proptest! {
    #[test]
    fn credits_always_cover_cost(n in 1u64..2_000) {
        let mut table = TrackedArray::new().unwrap();
        let mut ledger = CostLedger::new();
        for v in 0..n {
            table.insert(v as i32, &mut ledger).unwrap();
            prop_assert!(ledger.is_sufficient());
        }
        prop_assert_eq!(ledger.total_cost, tracked_cost(n));
        prop_assert_eq!(ledger.elements_copied, doubling_copies(n));
        prop_assert_eq!(ledger.resizes, doubling_resizes(n));
        // Aggregate bound: copies stay below twice the insertion count.
        prop_assert!(ledger.elements_copied < n.max(1) * 2);
    }
}
