//! Container configuration parameters.
//!
//! The core container and the cost-tracking variant run the same growth
//! algorithm under two different configurations; see
//! [`ArrayConfig::core`] and [`ArrayConfig::tracked`].

use std::error::Error;
use std::fmt;

use crate::Element;

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Controls the seed capacity, the capacity allocated at creation,
/// whether removals may shrink the storage, and a hard capacity ceiling.
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Minimum capacity established by the first growth from an empty
    /// store. Also the floor below which shrinking never starts.
    ///
    /// Default: 4. Must be at least 1.
    pub seed_capacity: usize,

    /// Number of slots allocated when the container is created.
    ///
    /// Default: 4 (the seed). The tracked configuration uses 0 so the
    /// first insertion performs the initial allocation.
    pub initial_capacity: usize,

    /// Halve capacity after a removal that leaves `len < capacity / 3`.
    ///
    /// Default: true. The tracked configuration only ever grows.
    pub shrink_on_underflow: bool,

    /// Largest capacity (in elements) the container may request.
    /// Exceeding it is reported as an allocation failure.
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Default seed capacity for the core container.
    pub const DEFAULT_SEED_CAPACITY: usize = 4;

    /// Seed capacity for the cost-tracking variant.
    pub const TRACKED_SEED_CAPACITY: usize = 1;

    /// Default capacity ceiling: the largest element count whose byte size
    /// fits in `isize`.
    pub const DEFAULT_MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<Element>();

    /// Configuration of the core container: seed 4, allocated eagerly,
    /// shrink-on-underflow enabled.
    pub fn core() -> Self {
        Self {
            seed_capacity: Self::DEFAULT_SEED_CAPACITY,
            initial_capacity: Self::DEFAULT_SEED_CAPACITY,
            shrink_on_underflow: true,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Configuration of the cost-tracking variant: starts unallocated,
    /// seeds a single slot on first insertion, never shrinks.
    pub fn tracked() -> Self {
        Self {
            seed_capacity: Self::TRACKED_SEED_CAPACITY,
            initial_capacity: 0,
            shrink_on_underflow: false,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Return this config with a different capacity ceiling.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed_capacity == 0 {
            return Err(ConfigError::ZeroSeedCapacity);
        }
        if self.seed_capacity > self.max_capacity {
            return Err(ConfigError::SeedExceedsMax {
                seed_capacity: self.seed_capacity,
                max_capacity: self.max_capacity,
            });
        }
        if self.initial_capacity > self.max_capacity {
            return Err(ConfigError::InitialExceedsMax {
                initial_capacity: self.initial_capacity,
                max_capacity: self.max_capacity,
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::core()
    }
}

/// Errors detected by [`ArrayConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `seed_capacity` is zero, so doubling from it would never grow.
    ZeroSeedCapacity,
    /// `seed_capacity` is larger than `max_capacity`.
    SeedExceedsMax {
        /// Configured seed.
        seed_capacity: usize,
        /// Configured ceiling.
        max_capacity: usize,
    },
    /// `initial_capacity` is larger than `max_capacity`.
    InitialExceedsMax {
        /// Configured initial capacity.
        initial_capacity: usize,
        /// Configured ceiling.
        max_capacity: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSeedCapacity => write!(f, "seed_capacity must be at least 1"),
            Self::SeedExceedsMax {
                seed_capacity,
                max_capacity,
            } => write!(
                f,
                "seed_capacity {seed_capacity} exceeds max_capacity {max_capacity}"
            ),
            Self::InitialExceedsMax {
                initial_capacity,
                max_capacity,
            } => write!(
                f,
                "initial_capacity {initial_capacity} exceeds max_capacity {max_capacity}"
            ),
        }
    }
}

impl Error for ConfigError {}
