use proptest::prelude::*;

use sealbid_crypto::{seal_bid, BidOpening, SALT_LEN};
use sealbid_types::{AccountId, RfpId};

proptest! {
    /// Flipping any single bit of the salt changes the seal.
    #[test]
    fn salt_bit_flip_changes_seal(
        salt in prop::array::uniform32(0u8..),
        byte in 0usize..SALT_LEN,
        bit in 0u8..8,
    ) {
        let vendor = AccountId::new("vendor");
        let original = BidOpening { uri: "ipfs://x", deposit: 50, salt };
        let mut flipped = salt;
        flipped[byte] ^= 1 << bit;
        let tampered = BidOpening { salt: flipped, ..original.clone() };
        prop_assert_ne!(
            seal_bid(RfpId::new(1), &vendor, &original),
            seal_bid(RfpId::new(1), &vendor, &tampered)
        );
    }

    /// Flipping any single bit of the deposit changes the seal.
    #[test]
    fn deposit_bit_flip_changes_seal(deposit in any::<u128>(), bit in 0u32..128) {
        let vendor = AccountId::new("vendor");
        let salt = [3u8; SALT_LEN];
        let a = BidOpening { uri: "ipfs://x", deposit, salt };
        let b = BidOpening { uri: "ipfs://x", deposit: deposit ^ (1u128 << bit), salt };
        prop_assert_ne!(
            seal_bid(RfpId::new(1), &vendor, &a),
            seal_bid(RfpId::new(1), &vendor, &b)
        );
    }
}
