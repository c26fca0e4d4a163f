use sealbid_store::StoreError;
use sealbid_types::{ParamsError, RfpStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuctionError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} is not authorized for this operation")]
    NotAuthorized(String),

    #[error("outside permitted window: {0}")]
    BadTiming(String),

    #[error("vendor {0} has already committed a bid")]
    AlreadyCommitted(String),

    #[error("vendor {0} has already revealed a bid")]
    AlreadyRevealed(String),

    #[error("evaluator {evaluator} has already scored vendor {vendor}")]
    AlreadyVoted { evaluator: String, vendor: String },

    #[error("vendor {0} has no sealed bid to reveal")]
    NoCommitment(String),

    #[error("revealed contents do not match the stored hash")]
    HashMismatch,

    #[error("RFP is not in evaluation (status: {0})")]
    NotInEvaluationPhase(RfpStatus),

    #[error("evaluator {0} is not approved for this RFP")]
    NotApprovedEvaluator(String),

    #[error("no candidate carries a tally")]
    NoReveals,

    #[error("{0} is not the recorded winner")]
    NotWinner(String),

    #[error("bad argument: {0}")]
    BadArgument(String),

    #[error("milestone {0} deliverable does not match the expected hash")]
    MilestoneMismatch(u32),

    #[error("RFP must be {expected}, is {actual}")]
    WrongStatus {
        expected: RfpStatus,
        actual: RfpStatus,
    },

    #[error("milestone {0} has already been released")]
    AlreadyReleased(u32),

    #[error("arithmetic overflow")]
    Overflow,

    #[error("payout failed: {0}")]
    PayoutFailed(String),

    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] ParamsError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
