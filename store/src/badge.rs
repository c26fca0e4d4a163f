//! Award badges: immutable proof that a vendor won an RFP.

use crate::StoreError;
use sealbid_types::{AccountId, BadgeId, BlockHeight, RfpId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeMetadata {
    pub rfp: RfpId,
    pub title: String,
    pub awarded_at: BlockHeight,
    pub weighted_sum: u64,
    pub weighted_total: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub owner: AccountId,
    pub metadata: BadgeMetadata,
}

pub trait BadgeStore {
    fn get_badge(&self, id: BadgeId) -> Result<Option<Badge>, StoreError>;

    /// Badges held by an account, in mint order.
    fn badges_of(&self, owner: &AccountId) -> Result<Vec<Badge>, StoreError>;
}
