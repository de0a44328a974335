use serde::{Deserialize, Serialize};

use crate::INITIAL_CAPACITY;

/// Tunables of [`WholeReader`](crate::WholeReader).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadOptions {
    /// Capacity of the first buffer, in bytes. Must not be zero.
    pub initial_capacity: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY,
        }
    }
}

impl ReadOptions {
    /// Parse options from a JSON document. Missing fields keep their
    /// defaults.
    pub fn from_json(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}
