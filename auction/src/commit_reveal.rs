//! Commit-reveal bid sealing.
//!
//! Window rules, against the RFP deadlines:
//! - commit: `now <= commit_deadline`
//! - reveal: `commit_deadline < now <= reveal_deadline`
//!
//! A reveal is accepted iff the recomputed seal equals the stored commitment
//! byte-for-byte.

use crate::error::AuctionError;
use sealbid_crypto::{seal_bid, BidOpening};
use sealbid_store::{Commitment, RfpRecord};
use sealbid_types::{AccountId, BlockHeight};

pub fn check_commit_window(rfp: &RfpRecord, now: BlockHeight) -> Result<(), AuctionError> {
    if now.is_past(rfp.commit_deadline) {
        return Err(AuctionError::BadTiming(format!(
            "commit closed at {}, now {}",
            rfp.commit_deadline, now
        )));
    }
    Ok(())
}

pub fn check_reveal_window(rfp: &RfpRecord, now: BlockHeight) -> Result<(), AuctionError> {
    if !now.is_past(rfp.commit_deadline) || now.is_past(rfp.reveal_deadline) {
        return Err(AuctionError::BadTiming(format!(
            "reveal open in ({}, {}], now {}",
            rfp.commit_deadline, rfp.reveal_deadline, now
        )));
    }
    Ok(())
}

/// Recompute the seal for `vendor`'s opening and compare with the stored commitment.
pub fn verify_opening(
    commitment: &Commitment,
    rfp: &RfpRecord,
    vendor: &AccountId,
    opening: &BidOpening<'_>,
) -> Result<(), AuctionError> {
    let recomputed = seal_bid(rfp.id, vendor, opening);
    if recomputed != commitment.hash {
        return Err(AuctionError::HashMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::RfpDraft;
    use sealbid_crypto::SALT_LEN;
    use sealbid_types::RfpId;

    fn rfp() -> RfpRecord {
        RfpDraft {
            title: "t".into(),
            summary: String::new(),
            min_deposit: 0,
            commit_deadline: BlockHeight::new(10),
            reveal_deadline: BlockHeight::new(20),
            eval_deadline: BlockHeight::new(30),
        }
        .into_record(RfpId::new(1), AccountId::new("req"), BlockHeight::new(0))
    }

    #[test]
    fn commit_window_inclusive_of_deadline() {
        let r = rfp();
        assert!(check_commit_window(&r, BlockHeight::new(0)).is_ok());
        assert!(check_commit_window(&r, BlockHeight::new(10)).is_ok());
        assert!(check_commit_window(&r, BlockHeight::new(11)).is_err());
    }

    #[test]
    fn reveal_window_is_half_open() {
        let r = rfp();
        assert!(check_reveal_window(&r, BlockHeight::new(10)).is_err());
        assert!(check_reveal_window(&r, BlockHeight::new(11)).is_ok());
        assert!(check_reveal_window(&r, BlockHeight::new(20)).is_ok());
        assert!(check_reveal_window(&r, BlockHeight::new(21)).is_err());
    }

    #[test]
    fn matching_opening_verifies() {
        let r = rfp();
        let vendor = AccountId::new("v");
        let opening = BidOpening {
            uri: "ipfs://x",
            deposit: 50,
            salt: [1u8; SALT_LEN],
        };
        let commitment = Commitment {
            rfp: r.id,
            vendor: vendor.clone(),
            hash: seal_bid(r.id, &vendor, &opening),
            sealed_at: BlockHeight::new(5),
        };
        assert!(verify_opening(&commitment, &r, &vendor, &opening).is_ok());

        let other = AccountId::new("copycat");
        assert!(matches!(
            verify_opening(&commitment, &r, &other, &opening),
            Err(AuctionError::HashMismatch)
        ));
    }
}
