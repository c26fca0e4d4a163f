//! Logical clock used throughout the engine.
//!
//! The execution environment supplies a monotonically non-decreasing block
//! height. Deadlines are compared against it, never waited on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A block height (logical time).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockHeight(u64);

impl BlockHeight {
    pub fn new(height: u64) -> Self {
        Self(height)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whether `self` is strictly past `deadline`.
    pub fn is_past(&self, deadline: BlockHeight) -> bool {
        self.0 > deadline.0
    }

    /// Blocks remaining until `deadline` (zero once reached).
    pub fn blocks_until(&self, deadline: BlockHeight) -> u64 {
        deadline.0.saturating_sub(self.0)
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
