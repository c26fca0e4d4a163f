//! Hashing for the sealbid engine.
//!
//! - **Blake2b-256** for every digest in the system
//! - **Identity digest** binding an account into a commitment
//! - **Bid seal** `H(rfp_id ‖ digest(vendor) ‖ uri ‖ deposit ‖ salt)`

pub mod hash;
pub mod seal;

pub use hash::{blake2b_256, blake2b_256_multi, hash_deliverable};
pub use seal::{identity_digest, seal_bid, BidOpening, SALT_LEN};
