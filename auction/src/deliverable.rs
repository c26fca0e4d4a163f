//! Hash-gated deliverable checks.

use crate::error::AuctionError;
use sealbid_store::Milestone;
use sealbid_types::ContentHash;

/// Reject the all-zero hash, which stands for "nothing posted".
pub fn require_posted_hash(hash: &ContentHash) -> Result<(), AuctionError> {
    if hash.is_zero() {
        return Err(AuctionError::BadArgument(
            "deliverable hash must be non-zero".into(),
        ));
    }
    Ok(())
}

/// A milestone may be released iff it is unreleased and carries exactly `expected`.
pub fn check_milestone(milestone: &Milestone, expected: &ContentHash) -> Result<(), AuctionError> {
    if milestone.released {
        return Err(AuctionError::AlreadyReleased(milestone.index));
    }
    match &milestone.deliverable {
        Some(stored) if stored == expected => Ok(()),
        _ => Err(AuctionError::MilestoneMismatch(milestone.index)),
    }
}

/// The final deliverable must be posted and equal `expected`.
pub fn check_final(
    posted: Option<&ContentHash>,
    expected: &ContentHash,
) -> Result<(), AuctionError> {
    match posted {
        Some(stored) if stored == expected => Ok(()),
        Some(_) => Err(AuctionError::HashMismatch),
        None => Err(AuctionError::NotFound("final deliverable".into())),
    }
}
