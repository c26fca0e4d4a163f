//! Record types and abstract storage traits for the sealbid engine.
//!
//! Every storage backend implements these traits. The engine depends only on
//! the traits: it reads through the per-family stores and writes exclusively
//! through [`WriteBatch`], committed all-or-nothing by [`BatchStore`].

pub mod badge;
pub mod batch;
pub mod bid;
pub mod error;
pub mod evaluation;
pub mod meta;
pub mod milestone;
pub mod reputation;
pub mod rfp;

pub use badge::{Badge, BadgeMetadata, BadgeStore};
pub use batch::{BatchStore, StoreOp, WriteBatch};
pub use bid::{BidStore, Commitment, Proposal};
pub use error::StoreError;
pub use evaluation::{EvaluationStore, EvaluatorApproval, Tally, VoteRecord};
pub use meta::{Counter, MetaStore};
pub use milestone::{Milestone, MilestoneStore};
pub use reputation::ReputationStore;
pub use rfp::{RfpRecord, RfpStore};

/// Everything the engine needs from a backend.
pub trait AuctionStore:
    RfpStore
    + BidStore
    + EvaluationStore
    + MilestoneStore
    + ReputationStore
    + BadgeStore
    + MetaStore
    + BatchStore
{
}

impl<T> AuctionStore for T where
    T: RfpStore
        + BidStore
        + EvaluationStore
        + MilestoneStore
        + ReputationStore
        + BadgeStore
        + MetaStore
        + BatchStore
{
}
