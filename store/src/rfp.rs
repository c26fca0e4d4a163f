//! RFP records.

use crate::StoreError;
use sealbid_types::{AccountId, BadgeId, BlockHeight, RfpId, RfpStatus};
use serde::{Deserialize, Serialize};

/// A Request-for-Proposal. Only its requester may trigger state transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfpRecord {
    pub id: RfpId,
    pub requester: AccountId,
    pub title: String,
    pub summary: String,
    /// Declared at creation; not enforced on reveal.
    pub min_deposit: u128,
    pub commit_deadline: BlockHeight,
    pub reveal_deadline: BlockHeight,
    pub eval_deadline: BlockHeight,
    pub status: RfpStatus,
    pub winner: Option<AccountId>,
    pub badge: Option<BadgeId>,
    pub created_at: BlockHeight,
}

impl RfpRecord {
    pub fn is_requester(&self, account: &AccountId) -> bool {
        &self.requester == account
    }

    pub fn is_winner(&self, account: &AccountId) -> bool {
        self.winner.as_ref() == Some(account)
    }
}

pub trait RfpStore {
    fn get_rfp(&self, id: RfpId) -> Result<Option<RfpRecord>, StoreError>;

    /// All RFP ids in ascending order.
    fn list_rfps(&self) -> Result<Vec<RfpId>, StoreError>;
}
