//! Evaluator vote weight.

use sealbid_store::EvaluatorApproval;

/// `1 + floor(reputation / step)`; an unknown evaluator weighs 1.
///
/// `step` is validated non-zero by `AuctionParams::validate`; a zero step is
/// treated as "no reputation bonus".
pub fn weight_of(approval: Option<&EvaluatorApproval>, step: u64) -> u64 {
    let reputation = approval.map(|a| a.reputation).unwrap_or(0);
    let bonus = reputation.checked_div(step).unwrap_or(0);
    bonus.saturating_add(1)
}
