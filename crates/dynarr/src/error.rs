//! Error types for container operations.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;
use crate::handle::ArrayHandle;

/// Errors that can occur during container operations.
///
/// Every variant is recoverable: the container is left exactly as it was
/// before the failing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The handle does not refer to a live container (never issued, or
    /// already destroyed).
    InvalidHandle {
        /// The rejected handle.
        handle: ArrayHandle,
    },
    /// An index outside the operation's valid range.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of valid elements at the time of the call.
        len: usize,
    },
    /// Storage for the requested capacity could not be obtained: the
    /// allocator refused, the configured ceiling was exceeded, or the
    /// capacity computation overflowed.
    AllocationFailure {
        /// Capacity (in elements) that was requested.
        requested: usize,
    },
    /// `pop` on a container with no elements.
    EmptyContainer,
    /// `reserve` asked for a capacity that does not exceed the current one.
    CapacityNotIncreased {
        /// Capacity (in elements) that was requested.
        requested: usize,
        /// Capacity at the time of the call.
        capacity: usize,
    },
    /// The container could not be created because its configuration
    /// failed validation.
    InvalidConfig(ConfigError),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHandle { handle } => write!(f, "invalid array handle: {handle}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::AllocationFailure { requested } => {
                write!(f, "allocation failed: could not obtain {requested} slots")
            }
            Self::EmptyContainer => write!(f, "container is empty"),
            Self::CapacityNotIncreased {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "reserve of {requested} slots does not exceed current capacity {capacity}"
                )
            }
            Self::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<ConfigError> for ArrayError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}
