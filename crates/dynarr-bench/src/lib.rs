//! Benchmark workloads for the dynarr container.
//!
//! - [`churn_profile`]: seeded mixed push/insert/pop/erase script
//! - [`run_script`]: applies a script, counting accepted ops
//! - [`tracked_fill`]: N tracked insertions, returning the ledger

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::{ArrayError, CostLedger, DynamicArray, TrackedArray};
use dynarr_test_utils::{op_script, Op};

/// Seeded churn workload of `len` ops.
pub fn churn_profile(seed: u64, len: usize) -> Vec<Op> {
    op_script(seed, len)
}

/// Apply every op in `ops` to `array`, returning how many succeeded.
///
/// Rejected ops (bad index, empty pop, non-growing reserve) are counted
/// out but do not stop the run.
pub fn run_script(array: &mut DynamicArray, ops: &[Op]) -> usize {
    ops.iter()
        .filter(|&&op| apply(array, op).is_ok())
        .count()
}

fn apply(array: &mut DynamicArray, op: Op) -> Result<(), ArrayError> {
    match op {
        Op::Push(v) => array.push(v),
        Op::Pop => array.pop().map(drop),
        Op::Get(i) => array.get(i).map(drop),
        Op::Set(i, v) => array.set(i, v),
        Op::Insert(i, v) => array.insert(i, v),
        Op::Erase(i) => array.erase(i).map(drop),
        Op::Reserve(n) => array.reserve(n),
        Op::Clear => {
            array.clear();
            Ok(())
        }
    }
}

/// Insert `0..n` into a fresh tracked array and return the ledger.
pub fn tracked_fill(n: i32) -> Result<CostLedger, ArrayError> {
    let mut table = TrackedArray::new()?;
    let mut ledger = CostLedger::new();
    for v in 0..n {
        table.insert(v, &mut ledger)?;
    }
    Ok(ledger)
}
