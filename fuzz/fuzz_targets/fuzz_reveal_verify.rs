#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use sealbid_auction::{AuctionConfig, AuctionEngine, AuctionError, RfpDraft};
use sealbid_crypto::{seal_bid, BidOpening};
use sealbid_nullables::{NullDisburser, NullStore};
use sealbid_types::{AccountId, BlockHeight};

#[derive(Debug, Arbitrary)]
struct Input {
    uri: String,
    deposit: u128,
    salt: [u8; 32],
    reveal_uri: String,
    reveal_deposit: u128,
    reveal_salt: [u8; 32],
    reveal_at: u8,
}

// A reveal is accepted exactly when its opening reproduces the sealed hash.
fuzz_target!(|input: Input| {
    let Ok(mut engine) = AuctionEngine::new(
        NullStore::new(),
        NullDisburser::new(),
        AuctionConfig::default(),
    ) else {
        return;
    };
    let draft = RfpDraft {
        title: "fuzz".into(),
        summary: String::new(),
        min_deposit: 0,
        commit_deadline: BlockHeight::new(10),
        reveal_deadline: BlockHeight::new(20),
        eval_deadline: BlockHeight::new(30),
    };
    let Ok(rfp) = engine.create(&AccountId::new("req"), BlockHeight::new(0), draft) else {
        return;
    };
    let vendor = AccountId::new("vendor");
    let sealed = BidOpening {
        uri: input.uri.as_str(),
        deposit: input.deposit,
        salt: input.salt,
    };
    let commitment = seal_bid(rfp, &vendor, &sealed);
    if engine
        .commit(&vendor, BlockHeight::new(5), rfp, commitment)
        .is_err()
    {
        return;
    }

    let opened = BidOpening {
        uri: input.reveal_uri.as_str(),
        deposit: input.reveal_deposit,
        salt: input.reveal_salt,
    };
    let at = BlockHeight::new(u64::from(input.reveal_at));
    let in_window = at.as_u64() > 10 && at.as_u64() <= 20;
    let fits = opened.uri.len() <= engine.config().params.max_uri_len;
    let matches = seal_bid(rfp, &vendor, &opened) == commitment;

    match engine.reveal(&vendor, at, rfp, &opened) {
        Ok(()) => assert!(in_window && fits && matches),
        Err(AuctionError::HashMismatch) => assert!(in_window && fits && !matches),
        Err(_) => assert!(!in_window || !fits),
    }
});
