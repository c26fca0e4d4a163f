//! Events emitted after every accepted mutation.

use sealbid_types::{AccountId, BadgeId, BlockHeight, ContentHash, RfpId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionEvent {
    RfpCreated {
        rfp: RfpId,
        requester: AccountId,
    },
    BidSealed {
        rfp: RfpId,
        vendor: AccountId,
        at: BlockHeight,
    },
    BidRevealed {
        rfp: RfpId,
        vendor: AccountId,
        at: BlockHeight,
    },
    EvaluationStarted {
        rfp: RfpId,
    },
    EvaluatorApproved {
        rfp: RfpId,
        evaluator: AccountId,
        weight: u64,
    },
    ScoreCast {
        rfp: RfpId,
        evaluator: AccountId,
        vendor: AccountId,
        score: u32,
        weight: u64,
    },
    Awarded {
        rfp: RfpId,
        winner: AccountId,
        badge: BadgeId,
    },
    MilestonePosted {
        rfp: RfpId,
        vendor: AccountId,
        index: u32,
        hash: ContentHash,
    },
    /// The payout collaborator confirmed a milestone transfer.
    PayoutAuthorized {
        rfp: RfpId,
        vendor: AccountId,
        index: u32,
        amount: u128,
    },
    FinalPosted {
        rfp: RfpId,
        hash: ContentHash,
    },
    Completed {
        rfp: RfpId,
        winner: AccountId,
        reputation: u64,
    },
    ReputationSet {
        vendor: AccountId,
        reputation: u64,
    },
}
