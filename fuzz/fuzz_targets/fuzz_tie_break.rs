#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;

use sealbid_auction::resolver::compare;
use sealbid_auction::{select_winner, Standing};
use sealbid_types::{AccountId, BlockHeight};

#[derive(Debug, Arbitrary)]
struct Candidate {
    weighted_sum: u64,
    weighted_total: u64,
    reputation: u64,
    revealed_at: u64,
}

// Winner selection never panics, never picks an ineligible candidate and is
// never outranked.
fuzz_target!(|candidates: Vec<Candidate>| {
    let standings: Vec<Standing> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| Standing {
            vendor: AccountId::new(format!("v{i}")),
            weighted_sum: c.weighted_sum,
            weighted_total: c.weighted_total,
            reputation: c.reputation,
            revealed_at: BlockHeight::new(c.revealed_at),
        })
        .collect();

    match select_winner(standings.clone()) {
        Some(winner) => {
            assert!(winner.weighted_total > 0);
            for s in standings.iter().filter(|s| s.weighted_total > 0) {
                assert_ne!(compare(s, &winner), Ordering::Greater);
            }
        }
        None => assert!(standings.iter().all(|s| s.weighted_total == 0)),
    }
});
