//! Handle-addressed containers.
//!
//! [`ArrayRegistry`] owns [`DynamicArray`]s behind slot+generation
//! [`ArrayHandle`]s. A handle that was never issued, or whose container
//! has been destroyed, is *absent*: every operation on it fails with
//! [`ArrayError::InvalidHandle`] (or reports zero for `size`/`capacity`)
//! and touches nothing. Destroying an absent handle is a no-op.

use std::fmt;

use tracing::debug;

use crate::array::DynamicArray;
use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::Element;

/// Opaque reference to a container owned by an [`ArrayRegistry`].
///
/// Encoding: upper 32 bits = slot index, lower 32 bits = generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArrayHandle(u64);

impl ArrayHandle {
    fn new(slot: u32, generation: u32) -> Self {
        Self(((slot as u64) << 32) | (generation as u64))
    }

    fn slot(self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn generation(self) -> u32 {
        self.0 as u32
    }

    /// The raw 64-bit encoding.
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Rebuild a handle from its raw encoding. The result may be absent.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ArrayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.slot(), self.generation())
    }
}

struct Slot {
    generation: u32,
    array: Option<DynamicArray>,
}

/// Table of containers addressed by [`ArrayHandle`].
///
/// Reuses slots via a free list. Generation counters increment on
/// destroy, so stale handles are detected instead of aliasing a newer
/// container.
#[derive(Default)]
pub struct ArrayRegistry {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
}

impl ArrayRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live containers.
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.array.is_some()).count()
    }

    /// Create a core-configured container and return its handle.
    pub fn create(&mut self) -> Result<ArrayHandle, ArrayError> {
        self.create_with(ArrayConfig::core())
    }

    /// Create a container with `config` and return its handle.
    ///
    /// On failure no slot is consumed.
    pub fn create_with(&mut self, config: ArrayConfig) -> Result<ArrayHandle, ArrayError> {
        let array = DynamicArray::with_config(config)?;
        let handle = if let Some(slot_idx) = self.free_list.pop() {
            let slot = &mut self.slots[slot_idx as usize];
            slot.array = Some(array);
            ArrayHandle::new(slot_idx, slot.generation)
        } else {
            let slot_idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                array: Some(array),
            });
            ArrayHandle::new(slot_idx, 0)
        };
        debug!(%handle, "array registered");
        Ok(handle)
    }

    /// Release the container behind `handle`. Absent handles are ignored.
    ///
    /// If the slot's generation wraps to zero the slot is retired rather
    /// than recycled, so a handle from the first epoch can never resolve
    /// again.
    pub fn destroy(&mut self, handle: ArrayHandle) {
        let Some(slot) = self.slots.get_mut(handle.slot() as usize) else {
            return;
        };
        if slot.generation != handle.generation() || slot.array.take().is_none() {
            return;
        }
        slot.generation = slot.generation.wrapping_add(1);
        if slot.generation != 0 {
            self.free_list.push(handle.slot());
        }
        debug!(%handle, "array destroyed");
    }

    /// Shared access to the container behind `handle`.
    pub fn array(&self, handle: ArrayHandle) -> Option<&DynamicArray> {
        let slot = self.slots.get(handle.slot() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.array.as_ref()
    }

    /// Exclusive access to the container behind `handle`.
    pub fn array_mut(&mut self, handle: ArrayHandle) -> Option<&mut DynamicArray> {
        let slot = self.slots.get_mut(handle.slot() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.array.as_mut()
    }

    fn resolve(&self, handle: ArrayHandle) -> Result<&DynamicArray, ArrayError> {
        self.array(handle).ok_or(ArrayError::InvalidHandle { handle })
    }

    fn resolve_mut(&mut self, handle: ArrayHandle) -> Result<&mut DynamicArray, ArrayError> {
        self.array_mut(handle)
            .ok_or(ArrayError::InvalidHandle { handle })
    }

    /// [`DynamicArray::push`] on the container behind `handle`.
    pub fn push(&mut self, handle: ArrayHandle, value: Element) -> Result<(), ArrayError> {
        self.resolve_mut(handle)?.push(value)
    }

    /// [`DynamicArray::pop`] on the container behind `handle`.
    pub fn pop(&mut self, handle: ArrayHandle) -> Result<Element, ArrayError> {
        self.resolve_mut(handle)?.pop()
    }

    /// [`DynamicArray::get`] on the container behind `handle`.
    pub fn get(&self, handle: ArrayHandle, index: usize) -> Result<Element, ArrayError> {
        self.resolve(handle)?.get(index)
    }

    /// [`DynamicArray::set`] on the container behind `handle`.
    pub fn set(
        &mut self,
        handle: ArrayHandle,
        index: usize,
        value: Element,
    ) -> Result<(), ArrayError> {
        self.resolve_mut(handle)?.set(index, value)
    }

    /// [`DynamicArray::insert`] on the container behind `handle`.
    pub fn insert(
        &mut self,
        handle: ArrayHandle,
        index: usize,
        value: Element,
    ) -> Result<(), ArrayError> {
        self.resolve_mut(handle)?.insert(index, value)
    }

    /// [`DynamicArray::erase`] on the container behind `handle`.
    pub fn erase(&mut self, handle: ArrayHandle, index: usize) -> Result<Element, ArrayError> {
        self.resolve_mut(handle)?.erase(index)
    }

    /// [`DynamicArray::reserve`] on the container behind `handle`.
    pub fn reserve(&mut self, handle: ArrayHandle, capacity: usize) -> Result<(), ArrayError> {
        self.resolve_mut(handle)?.reserve(capacity)
    }

    /// [`DynamicArray::clear`] on the container behind `handle`.
    pub fn clear(&mut self, handle: ArrayHandle) -> Result<(), ArrayError> {
        self.resolve_mut(handle)?.clear();
        Ok(())
    }

    /// Element count of the container behind `handle`; 0 if absent.
    pub fn size(&self, handle: ArrayHandle) -> usize {
        self.array(handle).map_or(0, DynamicArray::len)
    }

    /// Capacity of the container behind `handle`; 0 if absent.
    pub fn capacity(&self, handle: ArrayHandle) -> usize {
        self.array(handle).map_or(0, DynamicArray::capacity)
    }
}
