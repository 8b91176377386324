//! Owned backing store for a [`DynamicArray`](crate::DynamicArray).
//!
//! A [`Storage`] is a boxed slice whose length *is* the capacity. Slots
//! past the container's logical length hold unspecified (zeroed or stale)
//! values. Allocation goes through `Vec::try_reserve_exact`, so running
//! out of memory surfaces as [`ArrayError::AllocationFailure`] instead of
//! aborting the process.

use crate::error::ArrayError;
use crate::Element;

/// Exclusively-owned contiguous block of `capacity` elements.
///
/// Holds no allocation while the capacity is zero.
#[derive(Debug, Default)]
pub struct Storage {
    slots: Box<[Element]>,
}

impl Storage {
    /// An unallocated store with zero capacity.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Allocate a zero-filled store of exactly `capacity` slots.
    ///
    /// Fails without allocating if `capacity > max_capacity` or the
    /// allocator refuses the request.
    pub fn allocate(capacity: usize, max_capacity: usize) -> Result<Self, ArrayError> {
        if capacity > max_capacity {
            return Err(ArrayError::AllocationFailure {
                requested: capacity,
            });
        }
        if capacity == 0 {
            return Ok(Self::empty());
        }
        let mut buf: Vec<Element> = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailure {
                requested: capacity,
            })?;
        buf.resize(capacity, 0);
        Ok(Self {
            slots: buf.into_boxed_slice(),
        })
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Move the first `min(len, new_capacity)` elements into a freshly
    /// allocated store of `new_capacity` slots and release the old one.
    ///
    /// Returns the number of elements copied. On failure `self` is
    /// untouched.
    pub fn reallocate(
        &mut self,
        new_capacity: usize,
        len: usize,
        max_capacity: usize,
    ) -> Result<usize, ArrayError> {
        let mut next = Self::allocate(new_capacity, max_capacity)?;
        let copied = len.min(new_capacity);
        next.slots[..copied].copy_from_slice(&self.slots[..copied]);
        *self = next;
        Ok(copied)
    }

    /// Read the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn read(&self, index: usize) -> Element {
        self.slots[index]
    }

    /// Overwrite the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn write(&mut self, index: usize, value: Element) {
        self.slots[index] = value;
    }

    /// Move `[index, len)` one slot to the right, opening a gap at `index`.
    ///
    /// Requires `len < capacity`.
    pub fn shift_right(&mut self, index: usize, len: usize) {
        self.slots.copy_within(index..len, index + 1);
    }

    /// Move `(index, len)` one slot to the left, overwriting `index`.
    pub fn shift_left(&mut self, index: usize, len: usize) {
        self.slots.copy_within(index + 1..len, index);
    }

    /// The first `len` slots.
    pub fn prefix(&self, len: usize) -> &[Element] {
        &self.slots[..len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_zero_capacity() {
        let s = Storage::empty();
        assert_eq!(s.capacity(), 0);
        assert!(s.prefix(0).is_empty());
    }

    #[test]
    fn allocate_exact_capacity() {
        let s = Storage::allocate(7, usize::MAX).unwrap();
        assert_eq!(s.capacity(), 7);
    }

    #[test]
    fn allocate_over_ceiling_fails() {
        let result = Storage::allocate(9, 8);
        assert_eq!(result.unwrap_err(), ArrayError::AllocationFailure { requested: 9 });
    }

    #[test]
    fn reallocate_preserves_prefix() {
        let mut s = Storage::allocate(4, usize::MAX).unwrap();
        for i in 0..3 {
            s.write(i, (i as Element + 1) * 10);
        }
        let copied = s.reallocate(8, 3, usize::MAX).unwrap();
        assert_eq!(copied, 3);
        assert_eq!(s.capacity(), 8);
        assert_eq!(s.prefix(3), &[10, 20, 30]);
    }

    #[test]
    fn reallocate_to_smaller_copies_what_fits() {
        let mut s = Storage::allocate(4, usize::MAX).unwrap();
        for i in 0..4 {
            s.write(i, i as Element);
        }
        let copied = s.reallocate(2, 4, usize::MAX).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(s.prefix(2), &[0, 1]);
    }

    #[test]
    fn failed_reallocate_leaves_store_untouched() {
        let mut s = Storage::allocate(4, 4).unwrap();
        s.write(0, 42);
        assert!(s.reallocate(8, 1, 4).is_err());
        assert_eq!(s.capacity(), 4);
        assert_eq!(s.read(0), 42);
    }

    #[test]
    fn shifts_move_in_order() {
        let mut s = Storage::allocate(5, usize::MAX).unwrap();
        for i in 0..4 {
            s.write(i, i as Element);
        }
        s.shift_right(1, 4);
        s.write(1, 99);
        assert_eq!(s.prefix(5), &[0, 99, 1, 2, 3]);
        s.shift_left(1, 5);
        assert_eq!(s.prefix(4), &[0, 1, 2, 3]);
    }
}
