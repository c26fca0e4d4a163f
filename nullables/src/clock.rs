//! Nullable clock: deterministic block height for testing.

use sealbid_types::BlockHeight;
use std::cell::Cell;

/// A deterministic block-height source.
///
/// Height only advances when you tell it to, and never goes backwards.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial: u64) -> Self {
        Self {
            current: Cell::new(initial),
        }
    }

    /// Get the current height.
    pub fn now(&self) -> BlockHeight {
        BlockHeight::new(self.current.get())
    }

    /// Advance by a number of blocks.
    pub fn advance(&self, blocks: u64) {
        self.current.set(self.current.get().saturating_add(blocks));
    }

    /// Jump to a specific height. Heights below the current one are ignored.
    pub fn set(&self, height: u64) {
        if height > self.current.get() {
            self.current.set(height);
        }
    }
}

impl Default for NullClock {
    fn default() -> Self {
        Self::new(0)
    }
}
