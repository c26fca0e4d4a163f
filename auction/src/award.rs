//! Badge minting and reputation bumps.

use crate::error::AuctionError;
use sealbid_store::{Badge, BadgeMetadata, RfpRecord, Tally};
use sealbid_types::{AccountId, BadgeId, BlockHeight};

/// Next id from a store counter whose current value is `current`. Ids start at 1.
pub fn next_id(current: u64) -> Result<u64, AuctionError> {
    current.checked_add(1).ok_or(AuctionError::Overflow)
}

/// The immutable award record for `winner` of `rfp`.
pub fn mint_badge(
    id: BadgeId,
    rfp: &RfpRecord,
    winner: &AccountId,
    tally: Tally,
    now: BlockHeight,
) -> Badge {
    Badge {
        id,
        owner: winner.clone(),
        metadata: BadgeMetadata {
            rfp: rfp.id,
            title: rfp.title.clone(),
            awarded_at: now,
            weighted_sum: tally.weighted_sum,
            weighted_total: tally.weighted_total,
        },
    }
}

pub fn bump_reputation(current: u64, bump: u64) -> Result<u64, AuctionError> {
    current.checked_add(bump).ok_or(AuctionError::Overflow)
}
