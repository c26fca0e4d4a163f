//! Nullable store: thread-safe in-memory storage for testing.

use sealbid_store::{
    Badge, BadgeStore, BatchStore, BidStore, Commitment, Counter, EvaluationStore,
    EvaluatorApproval, MetaStore, Milestone, MilestoneStore, Proposal, ReputationStore,
    RfpRecord, RfpStore, StoreError, StoreOp, Tally, VoteRecord, WriteBatch,
};
use sealbid_types::{AccountId, BadgeId, RfpId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// All tables, kept behind one lock so a batch applies as one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Tables {
    rfps: BTreeMap<RfpId, RfpRecord>,
    commitments: BTreeMap<(RfpId, AccountId), Commitment>,
    proposals: BTreeMap<(RfpId, AccountId), Proposal>,
    approvals: BTreeMap<(RfpId, AccountId), EvaluatorApproval>,
    votes: BTreeMap<(RfpId, AccountId, AccountId), VoteRecord>,
    tallies: BTreeMap<(RfpId, AccountId), Tally>,
    milestones: BTreeMap<(RfpId, AccountId, u32), Milestone>,
    reputations: BTreeMap<AccountId, u64>,
    badges: BTreeMap<BadgeId, Badge>,
    rfp_counter: u64,
    badge_counter: u64,
}

impl Tables {
    fn apply(&mut self, op: StoreOp) {
        match op {
            StoreOp::PutRfp(record) => {
                self.rfps.insert(record.id, record);
            }
            StoreOp::PutCommitment(c) => {
                self.commitments.insert((c.rfp, c.vendor.clone()), c);
            }
            StoreOp::PutProposal(p) => {
                self.proposals.insert((p.rfp, p.vendor.clone()), p);
            }
            StoreOp::PutApproval {
                rfp,
                evaluator,
                approval,
            } => {
                self.approvals.insert((rfp, evaluator), approval);
            }
            StoreOp::PutVote {
                rfp,
                evaluator,
                vendor,
                vote,
            } => {
                self.votes.insert((rfp, evaluator, vendor), vote);
            }
            StoreOp::PutTally { rfp, vendor, tally } => {
                self.tallies.insert((rfp, vendor), tally);
            }
            StoreOp::PutMilestone(m) => {
                self.milestones.insert((m.rfp, m.vendor.clone(), m.index), m);
            }
            StoreOp::PutReputation { vendor, reputation } => {
                self.reputations.insert(vendor, reputation);
            }
            StoreOp::PutBadge(badge) => {
                self.badges.insert(badge.id, badge);
            }
            StoreOp::SetCounter { counter, value } => match counter {
                Counter::Rfp => self.rfp_counter = value,
                Counter::Badge => self.badge_counter = value,
            },
        }
    }
}

/// An in-memory record store for testing.
/// Thread-safe; every read and every batch takes the same lock.
pub struct NullStore {
    tables: Mutex<Tables>,
    /// When set, the next `commit_batch` fails without applying anything.
    fail_next_commit: Mutex<bool>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            fail_next_commit: Mutex::new(false),
        }
    }

    /// Make the next batch commit fail (backend error injection).
    pub fn fail_next_commit(&self) {
        if let Ok(mut flag) = self.fail_next_commit.lock() {
            *flag = true;
        }
    }

    /// Serialize every table for audit comparison or later restore.
    pub fn snapshot(&self) -> Result<Vec<u8>, StoreError> {
        let tables = self.tables()?;
        bincode::serialize(&*tables).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Rebuild a store from [`Self::snapshot`] bytes.
    pub fn restore(data: &[u8]) -> Result<Self, StoreError> {
        let tables: Tables =
            bincode::deserialize(data).map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(Self {
            tables: Mutex::new(tables),
            fail_next_commit: Mutex::new(false),
        })
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables
            .lock()
            .map_err(|e| StoreError::Backend(format!("store lock poisoned: {e}")))
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RfpStore for NullStore {
    fn get_rfp(&self, id: RfpId) -> Result<Option<RfpRecord>, StoreError> {
        Ok(self.tables()?.rfps.get(&id).cloned())
    }

    fn list_rfps(&self) -> Result<Vec<RfpId>, StoreError> {
        Ok(self.tables()?.rfps.keys().copied().collect())
    }
}

impl BidStore for NullStore {
    fn get_commitment(
        &self,
        rfp: RfpId,
        vendor: &AccountId,
    ) -> Result<Option<Commitment>, StoreError> {
        Ok(self
            .tables()?
            .commitments
            .get(&(rfp, vendor.clone()))
            .cloned())
    }

    fn get_proposal(&self, rfp: RfpId, vendor: &AccountId) -> Result<Option<Proposal>, StoreError> {
        Ok(self.tables()?.proposals.get(&(rfp, vendor.clone())).cloned())
    }

    fn proposals_for(&self, rfp: RfpId) -> Result<Vec<Proposal>, StoreError> {
        Ok(self
            .tables()?
            .proposals
            .iter()
            .filter(|((id, _), _)| *id == rfp)
            .map(|(_, p)| p.clone())
            .collect())
    }
}

impl EvaluationStore for NullStore {
    fn get_approval(
        &self,
        rfp: RfpId,
        evaluator: &AccountId,
    ) -> Result<Option<EvaluatorApproval>, StoreError> {
        Ok(self
            .tables()?
            .approvals
            .get(&(rfp, evaluator.clone()))
            .copied())
    }

    fn get_vote(
        &self,
        rfp: RfpId,
        evaluator: &AccountId,
        vendor: &AccountId,
    ) -> Result<Option<VoteRecord>, StoreError> {
        Ok(self
            .tables()?
            .votes
            .get(&(rfp, evaluator.clone(), vendor.clone()))
            .copied())
    }

    fn get_tally(&self, rfp: RfpId, vendor: &AccountId) -> Result<Option<Tally>, StoreError> {
        Ok(self.tables()?.tallies.get(&(rfp, vendor.clone())).copied())
    }
}

impl MilestoneStore for NullStore {
    fn get_milestone(
        &self,
        rfp: RfpId,
        vendor: &AccountId,
        index: u32,
    ) -> Result<Option<Milestone>, StoreError> {
        Ok(self
            .tables()?
            .milestones
            .get(&(rfp, vendor.clone(), index))
            .cloned())
    }

    fn milestones_for(
        &self,
        rfp: RfpId,
        vendor: &AccountId,
    ) -> Result<Vec<Milestone>, StoreError> {
        Ok(self
            .tables()?
            .milestones
            .values()
            .filter(|m| m.rfp == rfp && &m.vendor == vendor)
            .cloned()
            .collect())
    }
}

impl ReputationStore for NullStore {
    fn get_reputation(&self, vendor: &AccountId) -> Result<Option<u64>, StoreError> {
        Ok(self.tables()?.reputations.get(vendor).copied())
    }
}

impl BadgeStore for NullStore {
    fn get_badge(&self, id: BadgeId) -> Result<Option<Badge>, StoreError> {
        Ok(self.tables()?.badges.get(&id).cloned())
    }

    fn badges_of(&self, owner: &AccountId) -> Result<Vec<Badge>, StoreError> {
        Ok(self
            .tables()?
            .badges
            .values()
            .filter(|b| &b.owner == owner)
            .cloned()
            .collect())
    }
}

impl MetaStore for NullStore {
    fn get_counter(&self, counter: Counter) -> Result<u64, StoreError> {
        let tables = self.tables()?;
        Ok(match counter {
            Counter::Rfp => tables.rfp_counter,
            Counter::Badge => tables.badge_counter,
        })
    }
}

impl BatchStore for NullStore {
    fn commit_batch(&self, batch: WriteBatch) -> Result<(), StoreError> {
        {
            let mut fail = self
                .fail_next_commit
                .lock()
                .map_err(|e| StoreError::Backend(format!("flag lock poisoned: {e}")))?;
            if *fail {
                *fail = false;
                return Err(StoreError::Backend("injected commit failure".into()));
            }
        }
        let mut tables = self.tables()?;
        // Stage on a copy; the live tables change only at the swap.
        let mut next = tables.clone();
        for op in batch.into_ops() {
            next.apply(op);
        }
        *tables = next;
        Ok(())
    }
}
