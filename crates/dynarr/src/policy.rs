//! Growth and shrink decisions.
//!
//! These are pure functions of the container's current shape so the
//! thresholds can be tested without touching storage. The container
//! applies them through a single reallocation path
//! ([`Storage::reallocate`](crate::storage::Storage::reallocate)).
//!
//! ```text
//!  grow:    len == capacity        → max(seed, capacity * 2)
//!  shrink:  len <  capacity / 3
//!           and capacity > floor   → capacity / 2
//! ```
//!
//! The shrink threshold sits at one third rather than one half so that
//! alternating push/pop around `capacity / 2` never oscillates between
//! two allocations.

/// Multiplier applied to capacity when a full container must grow.
pub const GROWTH_FACTOR: usize = 2;

/// A removal may shrink storage once fewer than `capacity / SHRINK_DIVISOR`
/// elements remain.
pub const SHRINK_DIVISOR: usize = 3;

/// Why a reallocation happened. Carried into diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeCause {
    /// An insertion found the container full.
    Grow,
    /// A removal left the container under the shrink threshold.
    Shrink,
    /// The caller asked for an explicit capacity.
    Reserve,
    /// Storage allocated at creation.
    Create,
}

/// Capacity to grow to when an insertion finds the container full.
///
/// From an empty store this is the seed; otherwise double the current
/// capacity, never dropping below the seed. Returns `None` if doubling
/// overflows `usize`.
pub fn grow_target(capacity: usize, seed: usize) -> Option<usize> {
    if capacity == 0 {
        return Some(seed);
    }
    capacity.checked_mul(GROWTH_FACTOR).map(|doubled| doubled.max(seed))
}

/// Capacity to shrink to after a removal, or `None` to keep the current
/// storage.
///
/// `floor` is the seed capacity: containers at or below it never shrink.
pub fn shrink_target(len: usize, capacity: usize, floor: usize) -> Option<usize> {
    if capacity > floor && len < capacity / SHRINK_DIVISOR {
        Some(capacity / GROWTH_FACTOR)
    } else {
        None
    }
}
