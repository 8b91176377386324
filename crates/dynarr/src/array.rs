//! The growable array.
//!
//! [`DynamicArray`] owns a [`Storage`] and a logical length. All capacity
//! changes go through one private path, `resize_to`, which asks the
//! [`policy`](crate::policy) functions for a target and reallocates.
//! Every mutating operation gives the strong guarantee: on `Err` the
//! length, capacity and contents are exactly what they were before.

use tracing::{debug, warn};

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::policy::{grow_target, shrink_target, ResizeCause};
use crate::storage::Storage;
use crate::Element;

/// One growth step taken to make room for an insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Growth {
    /// Capacity before the step. Zero for the initial allocation.
    pub from: usize,
    /// Capacity after the step.
    pub to: usize,
    /// Elements moved into the new storage.
    pub copied: usize,
}

/// A contiguous, index-addressable sequence of [`Element`]s with automatic
/// capacity management.
///
/// # Invariants
///
/// - `len <= capacity` at all times.
/// - Indices `[0, len)` hold valid elements in insertion order.
/// - Storage holds no allocation while `capacity == 0`.
#[derive(Debug)]
pub struct DynamicArray {
    storage: Storage,
    len: usize,
    config: ArrayConfig,
}

impl DynamicArray {
    /// Create an empty container with the core configuration (seed
    /// capacity 4, shrink-on-underflow).
    pub fn new() -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::core())
    }

    /// Create an empty container with the given configuration.
    ///
    /// Allocates `config.initial_capacity` slots up front.
    ///
    /// # Errors
    ///
    /// [`ArrayError::InvalidConfig`] if the config fails validation,
    /// [`ArrayError::AllocationFailure`] if the initial storage cannot be
    /// obtained.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let storage = Storage::allocate(config.initial_capacity, config.max_capacity)?;
        debug!(
            capacity = storage.capacity(),
            cause = ?ResizeCause::Create,
            "array created"
        );
        Ok(Self {
            storage,
            len: 0,
            config,
        })
    }

    /// Number of valid elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// The configuration this container was created with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Append `value`, growing first if the container is full.
    pub fn push(&mut self, value: Element) -> Result<(), ArrayError> {
        self.grow_for_insert()?;
        self.storage.write(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element, then apply the shrink policy.
    pub fn pop(&mut self) -> Result<Element, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::EmptyContainer);
        }
        self.len -= 1;
        let value = self.storage.read(self.len);
        self.shrink_after_removal();
        Ok(value)
    }

    /// Copy of the element at `index`.
    pub fn get(&self, index: usize) -> Result<Element, ArrayError> {
        self.check_index(index)?;
        Ok(self.storage.read(index))
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: Element) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.storage.write(index, value);
        Ok(())
    }

    /// Insert `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == len` appends, exactly like [`push`](Self::push).
    pub fn insert(&mut self, index: usize, value: Element) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.grow_for_insert()?;
        self.storage.shift_right(index, self.len);
        self.storage.write(index, value);
        self.len += 1;
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements one slot
    /// left, then apply the shrink policy. Returns the removed element.
    pub fn erase(&mut self, index: usize) -> Result<Element, ArrayError> {
        self.check_index(index)?;
        let value = self.storage.read(index);
        self.storage.shift_left(index, self.len);
        self.len -= 1;
        self.shrink_after_removal();
        Ok(value)
    }

    /// Reallocate to exactly `capacity` slots, bypassing the doubling
    /// policy.
    ///
    /// # Errors
    ///
    /// [`ArrayError::CapacityNotIncreased`] if `capacity` does not exceed
    /// the current capacity; [`ArrayError::AllocationFailure`] if the
    /// storage cannot be obtained.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), ArrayError> {
        if capacity <= self.capacity() {
            return Err(ArrayError::CapacityNotIncreased {
                requested: capacity,
                capacity: self.capacity(),
            });
        }
        self.resize_to(capacity, ResizeCause::Reserve)?;
        Ok(())
    }

    /// Drop all elements. Capacity and storage are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Copy the valid elements out, in order.
    pub fn to_vec(&self) -> Vec<Element> {
        self.storage.prefix(self.len).to_vec()
    }

    /// Make room for one more element.
    ///
    /// Returns the growth step taken, or `None` if there was already room.
    /// This is the single growth path shared by [`push`](Self::push),
    /// [`insert`](Self::insert) and the cost-tracking variant.
    pub(crate) fn grow_for_insert(&mut self) -> Result<Option<Growth>, ArrayError> {
        let from = self.capacity();
        if self.len < from {
            return Ok(None);
        }
        let to = grow_target(from, self.config.seed_capacity)
            .ok_or(ArrayError::AllocationFailure { requested: usize::MAX })?;
        let copied = self.resize_to(to, ResizeCause::Grow)?;
        Ok(Some(Growth { from, to, copied }))
    }

    fn shrink_after_removal(&mut self) {
        if !self.config.shrink_on_underflow {
            return;
        }
        if let Some(target) = shrink_target(self.len, self.capacity(), self.config.seed_capacity) {
            // The removal has already happened; a refused shrink only
            // means the container keeps its larger storage.
            if let Err(e) = self.resize_to(target, ResizeCause::Shrink) {
                warn!(error = %e, len = self.len, "shrink skipped");
            }
        }
    }

    fn resize_to(&mut self, new_capacity: usize, cause: ResizeCause) -> Result<usize, ArrayError> {
        let old_capacity = self.capacity();
        match self
            .storage
            .reallocate(new_capacity, self.len, self.config.max_capacity)
        {
            Ok(copied) => {
                self.len = self.len.min(new_capacity);
                debug!(old_capacity, new_capacity, copied, ?cause, "array reallocated");
                Ok(copied)
            }
            Err(e) => {
                warn!(old_capacity, new_capacity, ?cause, error = %e, "array reallocation failed");
                Err(e)
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }
}
