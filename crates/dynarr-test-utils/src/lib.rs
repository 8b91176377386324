//! Test utilities for dynarr development.
//!
//! Provides a capacity-free [`ReferenceList`] model, the [`Op`] script
//! vocabulary shared by property tests, integration tests and benches,
//! deterministic scripts from a seeded RNG ([`op_script`]), and proptest
//! strategies ([`arb_op`], [`arb_ops`]).
//!
//! This crate does not depend on `dynarr`: callers apply an
//! [`Op`] to both the model and the container and compare.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One container operation, expressed without reference to any container.
///
/// Indices are raw so scripts can exercise out-of-range paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Push(i32),
    Pop,
    Get(usize),
    Set(usize, i32),
    Insert(usize, i32),
    Erase(usize),
    Reserve(usize),
    Clear,
}

/// Ordered sequence with no capacity concept: the oracle for order
/// preservation.
///
/// Every operation mirrors the container's bounds rules and reports
/// failure the same way (`None` / `false`) without mutating.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceList {
    items: Vec<i32>,
}

impl ReferenceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.items
    }

    pub fn push(&mut self, value: i32) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<i32> {
        self.items.pop()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.items.get(index).copied()
    }

    /// Returns `false` (no mutation) if `index >= len`.
    pub fn set(&mut self, index: usize, value: i32) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Returns `false` (no mutation) if `index > len`.
    pub fn insert(&mut self, index: usize, value: i32) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.items.insert(index, value);
        true
    }

    pub fn erase(&mut self, index: usize) -> Option<i32> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Apply `op`. Returns whether the op succeeded under the container's
    /// rules. `Reserve` has no observable effect on contents and always
    /// reports success here; callers compare capacity separately.
    pub fn apply(&mut self, op: Op) -> bool {
        match op {
            Op::Push(v) => {
                self.push(v);
                true
            }
            Op::Pop => self.pop().is_some(),
            Op::Get(i) => self.get(i).is_some(),
            Op::Set(i, v) => self.set(i, v),
            Op::Insert(i, v) => self.insert(i, v),
            Op::Erase(i) => self.erase(i).is_some(),
            Op::Reserve(_) => true,
            Op::Clear => {
                self.clear();
                true
            }
        }
    }
}

/// Deterministic op script of `len` steps, seeded through ChaCha8.
///
/// Pushes and inserts outweigh removals so the container grows through
/// several doublings; indices occasionally land one past the end to hit
/// boundary paths.
pub fn op_script(seed: u64, len: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut model_len = 0usize;
    let mut ops = Vec::with_capacity(len);
    for _ in 0..len {
        let index = rng.random_range(0..=model_len + 1);
        let value: i32 = rng.random_range(-1000..1000);
        let op = match rng.random_range(0..40u32) {
            0..=14 => Op::Push(value),
            15..=20 => Op::Insert(index, value),
            21..=26 => Op::Pop,
            27..=30 => Op::Erase(index),
            31..=34 => Op::Set(index, value),
            35..=36 => Op::Get(index),
            37..=38 => Op::Reserve(rng.random_range(0..=2 * model_len + 8)),
            _ => Op::Clear,
        };
        model_len = match op {
            Op::Push(_) => model_len + 1,
            Op::Insert(i, _) if i <= model_len => model_len + 1,
            Op::Pop => model_len.saturating_sub(1),
            Op::Erase(i) if i < model_len => model_len - 1,
            Op::Clear => 0,
            _ => model_len,
        };
        ops.push(op);
    }
    ops
}

/// Strategy for a single op with small indices and values.
pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => (0usize..40).prop_map(Op::Get),
        1 => (0usize..40, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (0usize..40, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0usize..40).prop_map(Op::Erase),
        1 => (0usize..128).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

/// Strategy for scripts of up to `max_len` ops.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(arb_op(), 0..max_len)
}
