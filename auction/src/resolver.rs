//! Winner selection over a caller-supplied candidate list.
//!
//! Candidates are ranked by a strict three-level chain:
//! 1. weighted average, descending, compared by cross-multiplication
//! 2. vendor reputation, descending
//! 3. reveal height, ascending
//!
//! A full tie keeps the incumbent, so the order of the candidate list is the
//! last tie-break and is controlled by the caller.

use sealbid_types::{AccountId, BlockHeight};
use std::cmp::Ordering;

/// Everything the resolver needs to know about one candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub vendor: AccountId,
    pub weighted_sum: u64,
    pub weighted_total: u64,
    pub reputation: u64,
    pub revealed_at: BlockHeight,
}

/// Compare weighted averages `a.sum / a.total` and `b.sum / b.total` without dividing.
///
/// Both totals must be non-zero. The products are formed in `u128`, which
/// cannot overflow for `u64` operands.
pub fn compare_average(a: &Standing, b: &Standing) -> Ordering {
    let lhs = u128::from(a.weighted_sum) * u128::from(b.weighted_total);
    let rhs = u128::from(b.weighted_sum) * u128::from(a.weighted_total);
    lhs.cmp(&rhs)
}

/// `Greater` means `a` ranks ahead of `b`.
pub fn compare(a: &Standing, b: &Standing) -> Ordering {
    compare_average(a, b)
        .then_with(|| a.reputation.cmp(&b.reputation))
        .then_with(|| b.revealed_at.cmp(&a.revealed_at))
}

/// Fold over `standings` left to right, replacing the incumbent only when a
/// challenger ranks strictly ahead. Standings with zero total weight are
/// skipped. Returns `None` when nothing is eligible.
pub fn select_winner<I>(standings: I) -> Option<Standing>
where
    I: IntoIterator<Item = Standing>,
{
    standings
        .into_iter()
        .filter(|s| s.weighted_total > 0)
        .fold(None, |best: Option<Standing>, challenger| match best {
            None => Some(challenger),
            Some(incumbent) => {
                if compare(&challenger, &incumbent) == Ordering::Greater {
                    Some(challenger)
                } else {
                    Some(incumbent)
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(name: &str, sum: u64, total: u64, rep: u64, at: u64) -> Standing {
        Standing {
            vendor: AccountId::new(name),
            weighted_sum: sum,
            weighted_total: total,
            reputation: rep,
            revealed_at: BlockHeight::new(at),
        }
    }

    #[test]
    fn higher_average_wins_by_cross_product() {
        // 180/2 = 90 against 350/4 = 87.5: 720 > 700
        let a = standing("a", 180, 2, 0, 15);
        let b = standing("b", 350, 4, 0, 11);
        assert_eq!(compare_average(&a, &b), Ordering::Greater);
        let winner = select_winner(vec![b.clone(), a.clone()]).unwrap();
        assert_eq!(winner.vendor, a.vendor);
        let winner = select_winner(vec![a.clone(), b]).unwrap();
        assert_eq!(winner.vendor, a.vendor);
    }

    #[test]
    fn equal_averages_fall_through_to_reputation() {
        // 160/2 == 240/3
        let low = standing("low", 160, 2, 10, 11);
        let high = standing("high", 240, 3, 20, 19);
        assert_eq!(compare_average(&low, &high), Ordering::Equal);
        assert_eq!(
            select_winner(vec![low, high.clone()]).unwrap().vendor,
            high.vendor
        );
    }

    #[test]
    fn earlier_reveal_breaks_reputation_tie() {
        let early = standing("early", 80, 1, 5, 11);
        let late = standing("late", 80, 1, 5, 14);
        assert_eq!(
            select_winner(vec![late.clone(), early.clone()]).unwrap().vendor,
            early.vendor
        );
        assert_eq!(
            select_winner(vec![early.clone(), late]).unwrap().vendor,
            early.vendor
        );
    }

    #[test]
    fn full_tie_keeps_first_seen() {
        let first = standing("first", 50, 1, 0, 12);
        let second = standing("second", 50, 1, 0, 12);
        assert_eq!(
            select_winner(vec![first.clone(), second.clone()])
                .unwrap()
                .vendor,
            first.vendor
        );
        assert_eq!(
            select_winner(vec![second.clone(), first]).unwrap().vendor,
            second.vendor
        );
    }

    #[test]
    fn zero_total_is_ineligible() {
        assert!(select_winner(vec![standing("x", 0, 0, 100, 11)]).is_none());
        assert!(select_winner(Vec::new()).is_none());
    }

    #[test]
    fn zero_scores_still_win_alone() {
        let only = standing("only", 0, 3, 0, 11);
        assert_eq!(select_winner(vec![only.clone()]), Some(only));
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let a = standing("a", u64::MAX, u64::MAX, 0, 11);
        let b = standing("b", u64::MAX - 1, u64::MAX, 0, 11);
        assert_eq!(compare_average(&a, &b), Ordering::Greater);
    }
}
