//! Write batching: groups every write of one engine operation so the
//! backend can apply them as a single indivisible unit.
//!
//! # Usage
//!
//! ```ignore
//! let mut batch = WriteBatch::new();
//! batch.put_tally(rfp, &vendor, tally);
//! batch.put_vote(rfp, &evaluator, &vendor, vote);
//! store.commit_batch(batch)?;
//! ```
//!
//! A batch that is never committed has no effect.

use crate::badge::Badge;
use crate::bid::{Commitment, Proposal};
use crate::evaluation::{EvaluatorApproval, Tally, VoteRecord};
use crate::meta::Counter;
use crate::milestone::Milestone;
use crate::rfp::RfpRecord;
use crate::StoreError;
use sealbid_types::{AccountId, RfpId};
use serde::{Deserialize, Serialize};

/// A single staged write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreOp {
    PutRfp(RfpRecord),
    PutCommitment(Commitment),
    PutProposal(Proposal),
    PutApproval {
        rfp: RfpId,
        evaluator: AccountId,
        approval: EvaluatorApproval,
    },
    PutVote {
        rfp: RfpId,
        evaluator: AccountId,
        vendor: AccountId,
        vote: VoteRecord,
    },
    PutTally {
        rfp: RfpId,
        vendor: AccountId,
        tally: Tally,
    },
    PutMilestone(Milestone),
    PutReputation {
        vendor: AccountId,
        reputation: u64,
    },
    PutBadge(Badge),
    SetCounter {
        counter: Counter,
        value: u64,
    },
}

/// An ordered list of writes, applied in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteBatch {
    ops: Vec<StoreOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_rfp(&mut self, record: RfpRecord) {
        self.ops.push(StoreOp::PutRfp(record));
    }

    pub fn put_commitment(&mut self, commitment: Commitment) {
        self.ops.push(StoreOp::PutCommitment(commitment));
    }

    pub fn put_proposal(&mut self, proposal: Proposal) {
        self.ops.push(StoreOp::PutProposal(proposal));
    }

    pub fn put_approval(&mut self, rfp: RfpId, evaluator: &AccountId, approval: EvaluatorApproval) {
        self.ops.push(StoreOp::PutApproval {
            rfp,
            evaluator: evaluator.clone(),
            approval,
        });
    }

    pub fn put_vote(
        &mut self,
        rfp: RfpId,
        evaluator: &AccountId,
        vendor: &AccountId,
        vote: VoteRecord,
    ) {
        self.ops.push(StoreOp::PutVote {
            rfp,
            evaluator: evaluator.clone(),
            vendor: vendor.clone(),
            vote,
        });
    }

    pub fn put_tally(&mut self, rfp: RfpId, vendor: &AccountId, tally: Tally) {
        self.ops.push(StoreOp::PutTally {
            rfp,
            vendor: vendor.clone(),
            tally,
        });
    }

    pub fn put_milestone(&mut self, milestone: Milestone) {
        self.ops.push(StoreOp::PutMilestone(milestone));
    }

    pub fn put_reputation(&mut self, vendor: &AccountId, reputation: u64) {
        self.ops.push(StoreOp::PutReputation {
            vendor: vendor.clone(),
            reputation,
        });
    }

    pub fn put_badge(&mut self, badge: Badge) {
        self.ops.push(StoreOp::PutBadge(badge));
    }

    pub fn set_counter(&mut self, counter: Counter, value: u64) {
        self.ops.push(StoreOp::SetCounter { counter, value });
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[StoreOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<StoreOp> {
        self.ops
    }
}

/// Backends apply a batch all-or-nothing: on error, none of its writes are visible.
pub trait BatchStore {
    fn commit_batch(&self, batch: WriteBatch) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut batch = WriteBatch::new();
        let vendor = AccountId::new("v");
        batch.set_counter(Counter::Badge, 1);
        batch.put_reputation(&vendor, 10);
        batch.put_tally(RfpId::new(1), &vendor, Tally::default());
        assert_eq!(batch.len(), 3);
        assert!(matches!(batch.ops()[0], StoreOp::SetCounter { .. }));
        assert!(matches!(batch.ops()[2], StoreOp::PutTally { .. }));
    }

    #[test]
    fn empty_batch() {
        let batch = WriteBatch::new();
        assert!(batch.is_empty());
        assert!(batch.into_ops().is_empty());
    }
}
