//! Milestone deliverables.

use crate::StoreError;
use sealbid_types::{AccountId, BlockHeight, ContentHash, RfpId};
use serde::{Deserialize, Serialize};

/// An intermediate deliverable for (RFP, vendor, index).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub rfp: RfpId,
    pub vendor: AccountId,
    pub index: u32,
    pub deliverable: Option<ContentHash>,
    pub released: bool,
    pub posted_at: BlockHeight,
}

pub trait MilestoneStore {
    fn get_milestone(
        &self,
        rfp: RfpId,
        vendor: &AccountId,
        index: u32,
    ) -> Result<Option<Milestone>, StoreError>;

    /// All milestones of one vendor on one RFP, ordered by index.
    fn milestones_for(&self, rfp: RfpId, vendor: &AccountId)
        -> Result<Vec<Milestone>, StoreError>;
}
