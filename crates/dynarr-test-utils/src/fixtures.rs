//! Reusable scenario fixtures.
//!
//! - [`walkthrough_script`]: the full create/push/set/insert/erase/pop/
//!   reserve/clear walkthrough, as an [`Op`] script.
//! - [`doubling_copies`] / [`doubling_resizes`] / [`tracked_cost`]:
//!   closed-form totals for N appends from an empty, seed-1 doubling store.

use crate::Op;

/// The walkthrough exercised against a fresh core container:
///
/// 1. push 0, 10, …, 90
/// 2. set(3, 999), set(7, 888)
/// 3. insert(0, 111), insert(5, 555), insert(len, 999)
/// 4. erase(0), erase(4)
/// 5. pop, pop
/// 6. reserve(50)
/// 7. clear
/// 8. push 5, 4, 3, 2, 1
pub fn walkthrough_script() -> Vec<Op> {
    let mut ops: Vec<Op> = (0..10).map(|i| Op::Push(i * 10)).collect();
    ops.extend([
        Op::Set(3, 999),
        Op::Set(7, 888),
        Op::Insert(0, 111),
        Op::Insert(5, 555),
        Op::Insert(12, 999),
        Op::Erase(0),
        Op::Erase(4),
        Op::Pop,
        Op::Pop,
        Op::Reserve(50),
        Op::Clear,
    ]);
    ops.extend((1..=5).rev().map(Op::Push));
    ops
}

/// Contents after step 5 of [`walkthrough_script`] (before reserve/clear).
pub const WALKTHROUGH_BEFORE_RESERVE: [i32; 9] = [0, 10, 20, 999, 40, 50, 60, 888, 80];

/// Number of trailing ops in [`walkthrough_script`] from `reserve(50)` on.
pub const WALKTHROUGH_TAIL_LEN: usize = 7;

/// Contents at the end of [`walkthrough_script`].
pub const WALKTHROUGH_FINAL: [i32; 5] = [5, 4, 3, 2, 1];

/// Elements copied by all doublings while appending `n` elements to an
/// empty store seeded with one slot.
pub fn doubling_copies(n: u64) -> u64 {
    let mut copies = 0;
    let mut capacity = 1;
    while capacity < n {
        copies += capacity;
        capacity *= 2;
    }
    copies
}

/// Number of doublings while appending `n` elements to an empty store
/// seeded with one slot.
pub fn doubling_resizes(n: u64) -> u64 {
    let mut resizes = 0;
    let mut capacity = 1;
    while capacity < n {
        resizes += 1;
        capacity *= 2;
    }
    resizes
}

/// Total real cost of `n` tracked appends: one write each plus every copy.
pub fn tracked_cost(n: u64) -> u64 {
    n + doubling_copies(n)
}
