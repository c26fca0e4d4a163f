//! RFP creation rules and status transitions.

use crate::error::AuctionError;
use sealbid_store::RfpRecord;
use sealbid_types::{AccountId, AuctionParams, BlockHeight, RfpId, RfpStatus};
use serde::{Deserialize, Serialize};

/// Requester-supplied fields of a new RFP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfpDraft {
    pub title: String,
    pub summary: String,
    pub min_deposit: u128,
    pub commit_deadline: BlockHeight,
    pub reveal_deadline: BlockHeight,
    pub eval_deadline: BlockHeight,
}

impl RfpDraft {
    /// Check text bounds and `now <= commit < reveal < eval`.
    pub fn validate(&self, params: &AuctionParams, now: BlockHeight) -> Result<(), AuctionError> {
        if self.title.trim().is_empty() || self.title.len() > params.max_title_len {
            return Err(AuctionError::BadArgument(format!(
                "title must be 1..={} bytes",
                params.max_title_len
            )));
        }
        if self.summary.len() > params.max_summary_len {
            return Err(AuctionError::BadArgument(format!(
                "summary exceeds {} bytes",
                params.max_summary_len
            )));
        }
        if self.commit_deadline < now {
            return Err(AuctionError::BadArgument(format!(
                "commit deadline {} precedes creation {}",
                self.commit_deadline, now
            )));
        }
        if !(self.commit_deadline < self.reveal_deadline
            && self.reveal_deadline < self.eval_deadline)
        {
            return Err(AuctionError::BadArgument(format!(
                "deadlines must strictly increase: commit {} reveal {} eval {}",
                self.commit_deadline, self.reveal_deadline, self.eval_deadline
            )));
        }
        Ok(())
    }

    /// Build the initial record. Call [`Self::validate`] first.
    pub fn into_record(self, id: RfpId, requester: AccountId, now: BlockHeight) -> RfpRecord {
        RfpRecord {
            id,
            requester,
            title: self.title,
            summary: self.summary,
            min_deposit: self.min_deposit,
            commit_deadline: self.commit_deadline,
            reveal_deadline: self.reveal_deadline,
            eval_deadline: self.eval_deadline,
            status: RfpStatus::Commit,
            winner: None,
            badge: None,
            created_at: now,
        }
    }
}

/// Move `record` forward to `next`, rejecting anything the state machine forbids.
pub fn advance(record: &mut RfpRecord, next: RfpStatus) -> Result<(), AuctionError> {
    if !record.status.can_advance_to(next) {
        return Err(AuctionError::WrongStatus {
            expected: next,
            actual: record.status,
        });
    }
    record.status = next;
    Ok(())
}

/// Requester-only guard.
pub fn require_requester(record: &RfpRecord, caller: &AccountId) -> Result<(), AuctionError> {
    if record.is_requester(caller) {
        Ok(())
    } else {
        Err(AuctionError::NotAuthorized(caller.to_string()))
    }
}
