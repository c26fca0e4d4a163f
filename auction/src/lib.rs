//! Sealed-bid procurement resolution engine.
//!
//! A requester publishes an RFP with three deadlines. Vendors seal bids
//! (commit), open them (reveal), approved evaluators score revealed bids with
//! reputation-weighted votes, and the requester finalizes to a single winner
//! chosen by a strict tie-break chain. After award, milestone and final
//! deliverables are released only against matching hashes.
//!
//! The engine never touches storage or funds directly: records go through an
//! [`sealbid_store::AuctionStore`] and payouts through a
//! [`sealbid_payout::Disburse`] collaborator.

pub mod award;
pub mod commit_reveal;
pub mod config;
pub mod deliverable;
pub mod engine;
pub mod error;
pub mod events;
pub mod journal;
pub mod lifecycle;
pub mod resolver;
pub mod tally;
pub mod weighting;

pub use config::{AuctionConfig, ConfigError};
pub use engine::{AuctionEngine, Award};
pub use error::AuctionError;
pub use events::AuctionEvent;
pub use journal::{Journal, JournalEntry, JournalError, Operation, Outcome};
pub use lifecycle::RfpDraft;
pub use resolver::{select_winner, Standing};
