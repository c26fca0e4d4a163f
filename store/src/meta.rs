//! Monotonic counters owned by the store.

use crate::StoreError;
use serde::{Deserialize, Serialize};

/// Identifier sequences. Each starts at zero; the first allocated id is 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Counter {
    Rfp,
    Badge,
}

pub trait MetaStore {
    /// Last allocated value of a counter (0 if nothing allocated yet).
    fn get_counter(&self, counter: Counter) -> Result<u64, StoreError>;
}
