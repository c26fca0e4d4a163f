//! Operation journal: an auditable, replayable log of accepted calls.
//!
//! Each public mutating call has an [`Operation`] form. A [`JournalEntry`]
//! adds the resolved caller and the block height it executed at, which is
//! everything the engine needs to reproduce the call. Entries serialize as
//! JSON lines.

use crate::engine::{AuctionEngine, Award};
use crate::error::AuctionError;
use crate::lifecycle::RfpDraft;
use sealbid_crypto::BidOpening;
use sealbid_payout::Disburse;
use sealbid_store::AuctionStore;
use sealbid_types::{AccountId, BlockHeight, ContentHash, RfpId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create(RfpDraft),
    ApproveEvaluator {
        rfp: RfpId,
        evaluator: AccountId,
        reputation: u64,
    },
    SetVendorReputation {
        vendor: AccountId,
        reputation: u64,
    },
    Commit {
        rfp: RfpId,
        hash: ContentHash,
    },
    Reveal {
        rfp: RfpId,
        uri: String,
        deposit: u128,
        salt: [u8; 32],
    },
    StartEvaluation {
        rfp: RfpId,
    },
    CastScore {
        rfp: RfpId,
        vendor: AccountId,
        score: u32,
    },
    Finalize {
        rfp: RfpId,
        candidates: Vec<AccountId>,
    },
    PostMilestone {
        rfp: RfpId,
        index: u32,
        hash: ContentHash,
    },
    VerifyAndRelease {
        rfp: RfpId,
        vendor: AccountId,
        index: u32,
        expected: ContentHash,
        amount: u128,
    },
    PostFinal {
        rfp: RfpId,
        hash: ContentHash,
    },
    VerifyFinal {
        rfp: RfpId,
        expected: ContentHash,
        rep_bump: u64,
    },
}

/// One call as the environment delivered it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub caller: AccountId,
    pub at: BlockHeight,
    pub op: Operation,
}

/// What an executed operation returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Created(RfpId),
    Awarded(Award),
}

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("journal line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode journal entry: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("replay of entry {index} failed: {source}")]
    Replay {
        index: usize,
        #[source]
        source: AuctionError,
    },
}

impl<S: AuctionStore, D: Disburse> AuctionEngine<S, D> {
    /// Dispatch a journaled call to the matching engine operation.
    pub fn execute(&mut self, entry: &JournalEntry) -> Result<Outcome, AuctionError> {
        let caller = &entry.caller;
        let now = entry.at;
        match &entry.op {
            Operation::Create(draft) => self
                .create(caller, now, draft.clone())
                .map(Outcome::Created),
            Operation::ApproveEvaluator {
                rfp,
                evaluator,
                reputation,
            } => self
                .approve_evaluator(caller, *rfp, evaluator, *reputation)
                .map(|_| Outcome::Done),
            Operation::SetVendorReputation { vendor, reputation } => self
                .set_vendor_reputation(caller, vendor, *reputation)
                .map(|_| Outcome::Done),
            Operation::Commit { rfp, hash } => {
                self.commit(caller, now, *rfp, *hash).map(|_| Outcome::Done)
            }
            Operation::Reveal {
                rfp,
                uri,
                deposit,
                salt,
            } => {
                let opening = BidOpening {
                    uri: uri.as_str(),
                    deposit: *deposit,
                    salt: *salt,
                };
                self.reveal(caller, now, *rfp, &opening)
                    .map(|_| Outcome::Done)
            }
            Operation::StartEvaluation { rfp } => self
                .start_evaluation(caller, now, *rfp)
                .map(|_| Outcome::Done),
            Operation::CastScore { rfp, vendor, score } => self
                .cast_score(caller, now, *rfp, vendor, *score)
                .map(|_| Outcome::Done),
            Operation::Finalize { rfp, candidates } => self
                .finalize(caller, now, *rfp, candidates)
                .map(Outcome::Awarded),
            Operation::PostMilestone { rfp, index, hash } => self
                .post_milestone(caller, now, *rfp, *index, *hash)
                .map(|_| Outcome::Done),
            Operation::VerifyAndRelease {
                rfp,
                vendor,
                index,
                expected,
                amount,
            } => self
                .verify_and_release(caller, *rfp, vendor, *index, *expected, *amount)
                .map(|_| Outcome::Done),
            Operation::PostFinal { rfp, hash } => {
                self.post_final(caller, *rfp, *hash).map(|_| Outcome::Done)
            }
            Operation::VerifyFinal {
                rfp,
                expected,
                rep_bump,
            } => self
                .verify_final(caller, *rfp, *expected, *rep_bump)
                .map(|_| Outcome::Done),
        }
    }
}

/// Accepted entries in execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `entry` and keep it only if the engine accepted it.
    pub fn submit<S: AuctionStore, D: Disburse>(
        &mut self,
        engine: &mut AuctionEngine<S, D>,
        entry: JournalEntry,
    ) -> Result<Outcome, AuctionError> {
        let outcome = engine.execute(&entry)?;
        self.entries.push(entry);
        Ok(outcome)
    }

    /// Re-run every entry against `engine`, stopping at the first failure.
    ///
    /// Releases reach `engine`'s disburser exactly as they did live, so an
    /// audit replica must be built with a collaborator that only records
    /// (such as the nullable one), never one that moves funds.
    pub fn replay<S: AuctionStore, D: Disburse>(
        &self,
        engine: &mut AuctionEngine<S, D>,
    ) -> Result<Vec<Outcome>, JournalError> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                engine
                    .execute(entry)
                    .map_err(|source| JournalError::Replay { index, source })
            })
            .collect()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One JSON object per line.
    pub fn to_json_lines(&self) -> Result<String, JournalError> {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&serde_json::to_string(entry)?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Parse [`Self::to_json_lines`] output. Blank lines are ignored.
    pub fn from_json_lines(input: &str) -> Result<Self, JournalError> {
        let mut entries = Vec::new();
        for (i, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(line).map_err(|source| JournalError::Decode {
                line: i + 1,
                source,
            })?;
            entries.push(entry);
        }
        Ok(Self { entries })
    }
}
