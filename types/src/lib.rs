//! Fundamental types for the sealbid resolution engine.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! account identifiers, content hashes, record identifiers, block heights, the RFP
//! lifecycle state machine and the tunable auction parameters.

pub mod address;
pub mod hash;
pub mod ids;
pub mod params;
pub mod state;
pub mod time;

pub use address::AccountId;
pub use hash::{ContentHash, HashParseError};
pub use ids::{BadgeId, RfpId};
pub use params::{AuctionParams, ParamsError};
pub use state::RfpStatus;
pub use time::BlockHeight;
