//! Nullable infrastructure for deterministic testing.
//!
//! Every external collaborator of the engine (clock, record store, payout)
//! is abstracted behind a trait. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or a real ledger
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod payout;
pub mod store;

pub use clock::NullClock;
pub use payout::{NullDisburser, PayoutRecord};
pub use store::NullStore;
