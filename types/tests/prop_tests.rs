use proptest::prelude::*;

use sealbid_types::{BlockHeight, ContentHash, RfpId, RfpStatus};

proptest! {
    /// ContentHash roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn content_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = ContentHash::new(bytes);
        prop_assert_eq!(hash.as_bytes(), &bytes);
    }

    /// ContentHash::is_zero is true only for all-zero bytes.
    #[test]
    fn content_hash_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let hash = ContentHash::new(bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// Display hex parses back to the same hash.
    #[test]
    fn content_hash_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = ContentHash::new(bytes);
        prop_assert_eq!(ContentHash::from_hex(&hash.to_string()).unwrap(), hash);
    }

    /// ContentHash bincode serialization roundtrip.
    #[test]
    fn content_hash_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = ContentHash::new(bytes);
        let encoded = bincode::serialize(&hash).unwrap();
        let decoded: ContentHash = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, hash);
    }

    /// BlockHeight ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn block_height_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ha = BlockHeight::new(a);
        let hb = BlockHeight::new(b);
        prop_assert_eq!(ha <= hb, a <= b);
        prop_assert_eq!(ha.is_past(hb), a > b);
    }

    /// blocks_until saturates to zero at and past the deadline.
    #[test]
    fn blocks_until_saturates(base in 0u64..1_000_000, offset in 0u64..1_000_000) {
        let now = BlockHeight::new(base + offset);
        prop_assert_eq!(now.blocks_until(BlockHeight::new(base)), 0);
        prop_assert_eq!(BlockHeight::new(base).blocks_until(now), offset);
    }

    /// RFP id commitment encoding is big-endian.
    #[test]
    fn rfp_id_big_endian(id in 0u64..u64::MAX) {
        prop_assert_eq!(RfpId::new(id).to_be_bytes(), id.to_be_bytes());
    }
}

#[test]
fn status_path_is_linear() {
    let path = [
        RfpStatus::Commit,
        RfpStatus::Reveal,
        RfpStatus::Evaluate,
        RfpStatus::Awarded,
        RfpStatus::Completed,
    ];
    for pair in path.windows(2) {
        assert!(pair[0].can_advance_to(pair[1]));
        assert!(!pair[1].can_advance_to(pair[0]));
    }
}
