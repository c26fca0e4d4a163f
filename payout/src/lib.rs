//! Payout collaborator for milestone and final releases.
//!
//! The resolution engine only decides *that* a release happens and *to whom*.
//! Moving value is delegated to an implementor of [`Disburse`]; if it fails,
//! the release fails with it and no engine state changes.
//!
//! The engine pays before it persists the release, so a store failure after
//! a confirmed payout leaves the release unrecorded and the caller retries
//! with the same [`PayoutContext`]. Implementors key every transfer on that
//! context and recipient, and must treat a repeat as already done.

pub mod error;

pub use error::PayoutError;

use sealbid_types::{AccountId, RfpId};
use serde::{Deserialize, Serialize};

/// Who is paying, and on whose authority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutContext {
    pub rfp: RfpId,
    /// The requester authorizing the release.
    pub payer: AccountId,
    /// Milestone index, `None` for the final settlement.
    pub milestone: Option<u32>,
}

/// Trait for releasing escrowed funds.
///
/// Both calls are idempotent per [`PayoutContext`] and recipient: repeating
/// a completed release returns `Ok` without moving value again. A repeat
/// with a different amount is refused with [`PayoutError::Rejected`].
pub trait Disburse: Send + Sync {
    /// Transfer `amount` to `to` for a verified milestone.
    fn disburse(&self, ctx: &PayoutContext, to: &AccountId, amount: u128)
        -> Result<(), PayoutError>;

    /// Release whatever custody remains to the winner once the final
    /// deliverable is verified.
    fn settle(&self, ctx: &PayoutContext, to: &AccountId) -> Result<(), PayoutError>;

    /// Human-readable name of this collaborator.
    fn name(&self) -> &str;
}
