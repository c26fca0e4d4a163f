//! Evaluator approvals, votes and running tallies.

use crate::StoreError;
use sealbid_types::{AccountId, BlockHeight, RfpId};
use serde::{Deserialize, Serialize};

/// Per-(RFP, evaluator) approval, set by the requester.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorApproval {
    pub approved: bool,
    pub reputation: u64,
}

/// One accepted score for (RFP, evaluator, vendor). Never revised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub score: u32,
    /// Weight applied when the vote was accepted.
    pub weight: u64,
    pub cast_at: BlockHeight,
}

/// Running weighted sum and total weight for (RFP, vendor).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub weighted_sum: u64,
    pub weighted_total: u64,
}

pub trait EvaluationStore {
    fn get_approval(
        &self,
        rfp: RfpId,
        evaluator: &AccountId,
    ) -> Result<Option<EvaluatorApproval>, StoreError>;

    fn get_vote(
        &self,
        rfp: RfpId,
        evaluator: &AccountId,
        vendor: &AccountId,
    ) -> Result<Option<VoteRecord>, StoreError>;

    fn get_tally(&self, rfp: RfpId, vendor: &AccountId) -> Result<Option<Tally>, StoreError>;
}
