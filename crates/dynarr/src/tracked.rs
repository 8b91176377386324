//! Cost-tracking insertion.
//!
//! [`TrackedArray`] is a [`DynamicArray`] running the tracked
//! configuration (empty start, seed 1, no shrink). Its only mutation is
//! an append that reports what it cost:
//!
//! ```text
//!  empty ──insert──▶ allocated(1)        cost 1
//!  allocated, room ──insert──▶ same      cost 1
//!  allocated, full ──insert──▶ cap * 2   cost 1 + len
//! ```
//!
//! Growth goes through the same path as [`DynamicArray::push`], so the
//! amortized bound measured here is the bound of the core container.

use tracing::trace;

use crate::array::DynamicArray;
use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::ledger::{CostLedger, InsertionCost, CREDITS_PER_INSERTION};
use crate::Element;

/// Append-only array that charges each insertion to a [`CostLedger`].
#[derive(Debug)]
pub struct TrackedArray {
    inner: DynamicArray,
}

impl TrackedArray {
    /// Create an unallocated tracked array ([`ArrayConfig::tracked`]).
    pub fn new() -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::tracked())
    }

    /// Create a tracked array with a custom configuration, e.g. a lower
    /// `max_capacity`.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        Ok(Self {
            inner: DynamicArray::with_config(config)?,
        })
    }

    /// Append `value` and charge its cost to `ledger`.
    ///
    /// On error nothing is appended and the ledger is left unchanged.
    pub fn insert(
        &mut self,
        value: Element,
        ledger: &mut CostLedger,
    ) -> Result<InsertionCost, ArrayError> {
        let growth = self.inner.grow_for_insert()?;
        self.inner.push(value)?;

        let copied = growth.map_or(0, |g| g.copied);
        let charge = InsertionCost {
            cost: 1 + copied as u64,
            credits: CREDITS_PER_INSERTION,
            copied,
            resized: growth.is_some_and(|g| g.from > 0),
            capacity: self.inner.capacity(),
        };
        ledger.record(&charge);
        trace!(
            value,
            cost = charge.cost,
            copied,
            capacity = charge.capacity,
            total_cost = ledger.total_cost,
            total_credits = ledger.total_credits,
            "tracked insert"
        );
        Ok(charge)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Copy of the element at `index`.
    pub fn get(&self, index: usize) -> Result<Element, ArrayError> {
        self.inner.get(index)
    }

    /// Copy the elements out, in order.
    pub fn to_vec(&self) -> Vec<Element> {
        self.inner.to_vec()
    }
}
