//! Cost and credit bookkeeping for amortized-cost analysis.
//!
//! [`CostLedger`] accumulates the real work performed by tracked
//! insertions (aggregate method) alongside a fixed per-insertion credit
//! charge (accounting method). With [`CREDITS_PER_INSERTION`] = 3 under
//! the doubling policy, banked credits always cover the real cost.

use std::fmt;

/// Credits charged to every tracked insertion. Enough to pre-pay every
/// copy made by later doublings.
pub const CREDITS_PER_INSERTION: u64 = 3;

/// Cost report for a single tracked insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertionCost {
    /// Real work: one write plus one unit per element copied by a resize.
    pub cost: u64,
    /// Credits charged under the accounting method.
    pub credits: u64,
    /// Elements copied by the resize this insertion triggered.
    pub copied: usize,
    /// Whether a full store was doubled. The initial single-slot
    /// allocation from an empty store does not count.
    pub resized: bool,
    /// Capacity after the insertion.
    pub capacity: usize,
}

/// Running totals across tracked insertions.
///
/// Owned by the caller and passed into each
/// [`TrackedArray::insert`](crate::TrackedArray::insert). Every counter is
/// monotonically non-decreasing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CostLedger {
    /// Sum of real work units performed.
    pub total_cost: u64,
    /// Sum of credits charged.
    pub total_credits: u64,
    /// Number of insertions recorded.
    pub insertions: u64,
    /// Number of doublings of a full store.
    pub resizes: u64,
    /// Total elements copied across all resizes.
    pub elements_copied: u64,
}

impl CostLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, charge: &InsertionCost) {
        self.total_cost += charge.cost;
        self.total_credits += charge.credits;
        self.insertions += 1;
        self.elements_copied += charge.copied as u64;
        if charge.resized {
            self.resizes += 1;
        }
    }

    /// Credits banked but not yet spent on real work. Negative means the
    /// charge was insufficient.
    pub fn credits_remaining(&self) -> i64 {
        self.total_credits as i64 - self.total_cost as i64
    }

    /// Returns `true` if accumulated credits cover accumulated cost.
    pub fn is_sufficient(&self) -> bool {
        self.total_credits >= self.total_cost
    }

    /// Aggregate-method amortized cost per insertion.
    ///
    /// Returns `0.0` if nothing has been recorded.
    pub fn amortized_cost(&self) -> f64 {
        if self.insertions == 0 {
            return 0.0;
        }
        self.total_cost as f64 / self.insertions as f64
    }

    /// Returns a human-readable summary of both methods.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CostLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} insertions, total cost {} (amortized {:.2}/op), \
             {} resizes copying {} elements, credits {} ({} per op), ",
            self.insertions,
            self.total_cost,
            self.amortized_cost(),
            self.resizes,
            self.elements_copied,
            self.total_credits,
            CREDITS_PER_INSERTION,
        )?;
        let remaining = self.credits_remaining();
        if remaining >= 0 {
            write!(f, "{remaining} remaining")
        } else {
            write!(f, "deficit {}", -remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge(cost: u64, copied: usize, resized: bool) -> InsertionCost {
        InsertionCost {
            cost,
            credits: CREDITS_PER_INSERTION,
            copied,
            resized,
            capacity: 0,
        }
    }

    #[test]
    fn default_is_zero() {
        let l = CostLedger::new();
        assert_eq!(l.total_cost, 0);
        assert_eq!(l.total_credits, 0);
        assert_eq!(l.amortized_cost(), 0.0);
        assert!(l.is_sufficient());
    }

    #[test]
    fn record_accumulates() {
        let mut l = CostLedger::new();
        l.record(&charge(1, 0, false));
        l.record(&charge(2, 1, true));
        l.record(&charge(3, 2, true));
        assert_eq!(l.total_cost, 6);
        assert_eq!(l.total_credits, 9);
        assert_eq!(l.insertions, 3);
        assert_eq!(l.resizes, 2);
        assert_eq!(l.elements_copied, 3);
        assert_eq!(l.credits_remaining(), 3);
        assert!((l.amortized_cost() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn deficit_reported() {
        let mut l = CostLedger::new();
        l.record(&charge(10, 9, true));
        assert!(!l.is_sufficient());
        assert_eq!(l.credits_remaining(), -7);
        assert!(l.summary().contains("deficit 7"));
    }

    #[test]
    fn summary_mentions_totals() {
        let mut l = CostLedger::new();
        l.record(&charge(1, 0, false));
        let s = l.summary();
        assert!(s.contains("1 insertions"));
        assert!(s.contains("total cost 1"));
        assert!(s.contains("2 remaining"));
    }
}
