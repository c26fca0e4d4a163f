//! Sealed bids and their revealed proposals.

use crate::StoreError;
use sealbid_types::{AccountId, BlockHeight, ContentHash, RfpId};
use serde::{Deserialize, Serialize};

/// A vendor's sealed bid. Immutable once stored; kept after reveal for audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub rfp: RfpId,
    pub vendor: AccountId,
    pub hash: ContentHash,
    pub sealed_at: BlockHeight,
}

/// A revealed bid whose opening matched its commitment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub rfp: RfpId,
    pub vendor: AccountId,
    pub uri: String,
    pub deposit: u128,
    pub salt: [u8; 32],
    pub revealed_at: BlockHeight,
    /// Final deliverable hash, posted by the winner after award.
    pub deliverable: Option<ContentHash>,
}

pub trait BidStore {
    fn get_commitment(
        &self,
        rfp: RfpId,
        vendor: &AccountId,
    ) -> Result<Option<Commitment>, StoreError>;

    fn get_proposal(&self, rfp: RfpId, vendor: &AccountId) -> Result<Option<Proposal>, StoreError>;

    /// All revealed proposals for an RFP, ordered by vendor.
    fn proposals_for(&self, rfp: RfpId) -> Result<Vec<Proposal>, StoreError>;
}
