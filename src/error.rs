use std::collections::TryReserveError;

use thiserror::Error;

/// Storage for a bitset could not be allocated.
#[derive(Debug, Error)]
#[error("failed to allocate storage for a bitset of capacity {capacity}")]
pub struct AllocError {
    pub(crate) capacity: usize,
    #[source]
    pub(crate) source: TryReserveError,
}

impl AllocError {
    /// The capacity whose storage could not be obtained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
