//! A growable contiguous array of `i32` with an explicit capacity policy
//! and amortized-cost accounting.
//!
//! # Architecture
//!
//! ```text
//! ArrayRegistry (handle → container, stale-handle detection)
//! └── DynamicArray (len + config)
//!     ├── policy::{grow_target, shrink_target}   pure decisions
//!     └── Storage (owned Box<[i32]>, fallible reallocate)
//!
//! TrackedArray (DynamicArray under ArrayConfig::tracked())
//! └── CostLedger (caller-owned cost/credit totals)
//! ```
//!
//! # Configurations
//!
//! - **Core** ([`ArrayConfig::core`]): seed capacity 4 allocated at
//!   creation; doubles when full; halves once fewer than a third of the
//!   slots are in use.
//! - **Tracked** ([`ArrayConfig::tracked`]): starts unallocated; the first
//!   insertion seeds one slot; doubles when full; never shrinks.
//!
//! Both run the same growth path, so the cost reported by
//! [`TrackedArray::insert`] is the cost the core container pays.
//!
//! # Example
//!
//! ```
//! use dynarr::{CostLedger, DynamicArray, TrackedArray};
//!
//! let mut a = DynamicArray::new().unwrap();
//! for v in [10, 20, 30] {
//!     a.push(v).unwrap();
//! }
//! a.insert(0, 5).unwrap();
//! assert_eq!(a.to_vec(), vec![5, 10, 20, 30]);
//!
//! let mut t = TrackedArray::new().unwrap();
//! let mut ledger = CostLedger::new();
//! for v in 1..=16 {
//!     t.insert(v, &mut ledger).unwrap();
//! }
//! assert_eq!(ledger.total_cost, 31);
//! assert!(ledger.is_sufficient());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod handle;
pub mod ledger;
pub mod policy;
pub mod storage;
pub mod tracked;

/// The fixed element type stored by every container in this crate.
pub type Element = i32;

// Public re-exports for the primary API surface.
pub use array::{DynamicArray, Growth};
pub use config::{ArrayConfig, ConfigError};
pub use error::ArrayError;
pub use handle::{ArrayHandle, ArrayRegistry};
pub use ledger::{CostLedger, InsertionCost, CREDITS_PER_INSERTION};
pub use tracked::TrackedArray;
