//! Bid sealing.
//!
//! A seal binds the RFP id and the vendor identity into the hash so that an
//! identical `(uri, deposit, salt)` opening cannot be replayed across RFPs or
//! vendors. Every field except `uri` is fixed width, which keeps the
//! concatenation unambiguous.

use crate::hash::{blake2b_256, blake2b_256_multi};
use sealbid_types::{AccountId, ContentHash, RfpId};

/// Salt width in bytes.
pub const SALT_LEN: usize = 32;

/// The contents a vendor discloses at reveal time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BidOpening<'a> {
    pub uri: &'a str,
    pub deposit: u128,
    pub salt: [u8; SALT_LEN],
}

/// Blake2b-256 of the account identifier.
pub fn identity_digest(account: &AccountId) -> [u8; 32] {
    blake2b_256(account.as_bytes())
}

/// `H(rfp_id_be ‖ digest(vendor) ‖ uri ‖ deposit_be ‖ salt)`.
pub fn seal_bid(rfp: RfpId, vendor: &AccountId, opening: &BidOpening<'_>) -> ContentHash {
    let digest = identity_digest(vendor);
    ContentHash::new(blake2b_256_multi(&[
        &rfp.to_be_bytes(),
        &digest,
        opening.uri.as_bytes(),
        &opening.deposit.to_be_bytes(),
        &opening.salt,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening(uri: &str) -> BidOpening<'_> {
        BidOpening {
            uri,
            deposit: 50,
            salt: [7u8; SALT_LEN],
        }
    }

    #[test]
    fn seal_is_deterministic() {
        let v = AccountId::new("vendor-v");
        let a = seal_bid(RfpId::new(1), &v, &opening("ipfs://x"));
        let b = seal_bid(RfpId::new(1), &v, &opening("ipfs://x"));
        assert_eq!(a, b);
    }

    #[test]
    fn seal_binds_rfp_id() {
        let v = AccountId::new("vendor-v");
        assert_ne!(
            seal_bid(RfpId::new(1), &v, &opening("ipfs://x")),
            seal_bid(RfpId::new(2), &v, &opening("ipfs://x"))
        );
    }

    #[test]
    fn seal_binds_vendor() {
        assert_ne!(
            seal_bid(RfpId::new(1), &AccountId::new("a"), &opening("ipfs://x")),
            seal_bid(RfpId::new(1), &AccountId::new("b"), &opening("ipfs://x"))
        );
    }

    #[test]
    fn seal_matches_manual_concatenation() {
        let v = AccountId::new("vendor-v");
        let mut buf = Vec::new();
        buf.extend_from_slice(&1u64.to_be_bytes());
        buf.extend_from_slice(&identity_digest(&v));
        buf.extend_from_slice(b"ipfs://x");
        buf.extend_from_slice(&50u128.to_be_bytes());
        buf.extend_from_slice(&[7u8; SALT_LEN]);
        assert_eq!(
            seal_bid(RfpId::new(1), &v, &opening("ipfs://x")).as_bytes(),
            &blake2b_256(&buf)
        );
    }
}
