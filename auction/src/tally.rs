//! Incremental weighted tally.
//!
//! A tally is only ever advanced by one accepted vote at a time and never
//! recomputed; the weighted sum is not idempotent, so the order of
//! application is the order of acceptance.

use crate::error::AuctionError;
use sealbid_store::Tally;

/// Reject scores outside `0..=max_score`.
pub fn check_score(score: u32, max_score: u32) -> Result<(), AuctionError> {
    if score > max_score {
        return Err(AuctionError::BadArgument(format!(
            "score {score} outside 0..={max_score}"
        )));
    }
    Ok(())
}

/// `{ sum += score * weight, total += weight }`, starting from zero when absent.
pub fn accumulate(current: Option<Tally>, score: u32, weight: u64) -> Result<Tally, AuctionError> {
    let base = current.unwrap_or_default();
    let contribution = u64::from(score)
        .checked_mul(weight)
        .ok_or(AuctionError::Overflow)?;
    Ok(Tally {
        weighted_sum: base
            .weighted_sum
            .checked_add(contribution)
            .ok_or(AuctionError::Overflow)?,
        weighted_total: base
            .weighted_total
            .checked_add(weight)
            .ok_or(AuctionError::Overflow)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_vote_initializes() {
        let t = accumulate(None, 80, 3).unwrap();
        assert_eq!(
            t,
            Tally {
                weighted_sum: 240,
                weighted_total: 3
            }
        );
    }

    #[test]
    fn subsequent_votes_add() {
        let t = accumulate(None, 80, 3).unwrap();
        let t = accumulate(Some(t), 50, 1).unwrap();
        assert_eq!(t.weighted_sum, 290);
        assert_eq!(t.weighted_total, 4);
    }

    #[test]
    fn zero_score_still_adds_weight() {
        let t = accumulate(None, 0, 2).unwrap();
        assert_eq!(t.weighted_sum, 0);
        assert_eq!(t.weighted_total, 2);
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(matches!(
            accumulate(None, 100, u64::MAX),
            Err(AuctionError::Overflow)
        ));
    }

    #[test]
    fn score_bounds() {
        assert!(check_score(0, 100).is_ok());
        assert!(check_score(100, 100).is_ok());
        assert!(matches!(
            check_score(101, 100),
            Err(AuctionError::BadArgument(_))
        ));
    }
}
