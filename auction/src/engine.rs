//! Auction engine: connects commit-reveal, weighting, tallying, resolution
//! and deliverable release into one end-to-end procurement workflow.
//!
//! Every mutating operation follows the same shape: read and validate against
//! the store, stage all writes into one [`WriteBatch`], commit it, then emit an
//! [`AuctionEvent`]. An error at any point leaves the store untouched.

use crate::award::{bump_reputation, mint_badge, next_id};
use crate::commit_reveal::{check_commit_window, check_reveal_window, verify_opening};
use crate::config::AuctionConfig;
use crate::deliverable::{check_final, check_milestone, require_posted_hash};
use crate::error::AuctionError;
use crate::events::AuctionEvent;
use crate::lifecycle::{advance, require_requester, RfpDraft};
use crate::resolver::{select_winner, Standing};
use crate::tally::{accumulate, check_score};
use crate::weighting::weight_of;
use sealbid_crypto::BidOpening;
use sealbid_payout::{Disburse, PayoutContext};
use sealbid_store::{
    AuctionStore, Badge, Commitment, Counter, EvaluatorApproval, Milestone, Proposal, RfpRecord,
    Tally, VoteRecord, WriteBatch,
};
use sealbid_types::{AccountId, BadgeId, BlockHeight, ContentHash, RfpId, RfpStatus};
use sealbid_utils::StatsCounter;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

const STAT_NAMES: &[&str] = &[
    "create",
    "approve_evaluator",
    "set_vendor_reputation",
    "commit",
    "reveal",
    "start_evaluation",
    "cast_score",
    "finalize",
    "post_milestone",
    "verify_and_release",
    "post_final",
    "verify_final",
    "rejected",
];

/// Result of a successful [`AuctionEngine::finalize`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub winner: AccountId,
    pub badge: BadgeId,
    pub weighted_sum: u64,
    pub weighted_total: u64,
}

/// The sealed-bid resolution engine over a record store and a payout collaborator.
pub struct AuctionEngine<S, D> {
    store: S,
    disburser: D,
    config: AuctionConfig,
    stats: StatsCounter,
    /// Pending events for the embedding environment to process.
    pending_events: Vec<AuctionEvent>,
}

impl<S: AuctionStore, D: Disburse> AuctionEngine<S, D> {
    pub fn new(store: S, disburser: D, config: AuctionConfig) -> Result<Self, AuctionError> {
        config.params.validate()?;
        Ok(Self {
            store,
            disburser,
            config,
            stats: StatsCounter::new(STAT_NAMES),
            pending_events: Vec::new(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn disburser(&self) -> &D {
        &self.disburser
    }

    pub fn config(&self) -> &AuctionConfig {
        &self.config
    }

    /// Accepted operations by name, plus `rejected`.
    pub fn stats(&self) -> &StatsCounter {
        &self.stats
    }

    /// Drain all pending events.
    pub fn drain_events(&mut self) -> Vec<AuctionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Publish a new RFP owned by `requester`. Returns its id.
    pub fn create(
        &mut self,
        requester: &AccountId,
        now: BlockHeight,
        draft: RfpDraft,
    ) -> Result<RfpId, AuctionError> {
        self.tracked("create", |engine| {
            if !requester.is_valid() {
                return Err(AuctionError::BadArgument(format!(
                    "invalid requester id {requester:?}"
                )));
            }
            draft.validate(&engine.config.params, now)?;

            let value = next_id(engine.store.get_counter(Counter::Rfp)?)?;
            let id = RfpId::new(value);
            let record = draft.into_record(id, requester.clone(), now);

            let mut batch = WriteBatch::new();
            batch.put_rfp(record);
            batch.set_counter(Counter::Rfp, value);
            engine.apply(
                batch,
                AuctionEvent::RfpCreated {
                    rfp: id,
                    requester: requester.clone(),
                },
            )?;

            info!(rfp = %id, requester = %requester, "rfp created");
            Ok(id)
        })
    }

    /// Upsert an evaluator approval. Requester only, before award.
    pub fn approve_evaluator(
        &mut self,
        caller: &AccountId,
        rfp: RfpId,
        evaluator: &AccountId,
        reputation: u64,
    ) -> Result<(), AuctionError> {
        self.tracked("approve_evaluator", |engine| {
            let record = engine.load_rfp(rfp)?;
            require_requester(&record, caller)?;
            if record.status.is_awarded() {
                return Err(AuctionError::WrongStatus {
                    expected: RfpStatus::Evaluate,
                    actual: record.status,
                });
            }

            let approval = EvaluatorApproval {
                approved: true,
                reputation,
            };
            let weight = weight_of(Some(&approval), engine.config.params.weight_step);

            let mut batch = WriteBatch::new();
            batch.put_approval(rfp, evaluator, approval);
            engine.apply(
                batch,
                AuctionEvent::EvaluatorApproved {
                    rfp,
                    evaluator: evaluator.clone(),
                    weight,
                },
            )?;

            debug!(rfp = %rfp, evaluator = %evaluator, reputation, weight, "evaluator approved");
            Ok(())
        })
    }

    /// Set a vendor's global reputation directly. Admin only.
    pub fn set_vendor_reputation(
        &mut self,
        caller: &AccountId,
        vendor: &AccountId,
        reputation: u64,
    ) -> Result<(), AuctionError> {
        self.tracked("set_vendor_reputation", |engine| {
            if engine.config.admin.as_ref() != Some(caller) {
                return Err(AuctionError::NotAuthorized(caller.to_string()));
            }

            let mut batch = WriteBatch::new();
            batch.put_reputation(vendor, reputation);
            engine.apply(
                batch,
                AuctionEvent::ReputationSet {
                    vendor: vendor.clone(),
                    reputation,
                },
            )?;

            info!(vendor = %vendor, reputation, "vendor reputation set");
            Ok(())
        })
    }

    /// Close bidding and open scoring. Requester only, after the reveal deadline.
    pub fn start_evaluation(
        &mut self,
        caller: &AccountId,
        now: BlockHeight,
        rfp: RfpId,
    ) -> Result<(), AuctionError> {
        self.tracked("start_evaluation", |engine| {
            let mut record = engine.load_rfp(rfp)?;
            require_requester(&record, caller)?;
            if !record.status.accepts_bids() {
                return Err(AuctionError::WrongStatus {
                    expected: RfpStatus::Reveal,
                    actual: record.status,
                });
            }
            if !now.is_past(record.reveal_deadline) {
                return Err(AuctionError::BadTiming(format!(
                    "reveal window open until {}, now {}",
                    record.reveal_deadline, now
                )));
            }
            advance(&mut record, RfpStatus::Evaluate)?;

            let mut batch = WriteBatch::new();
            batch.put_rfp(record);
            engine.apply(batch, AuctionEvent::EvaluationStarted { rfp })?;

            info!(rfp = %rfp, "evaluation started");
            Ok(())
        })
    }

    // ── Commit-reveal ──────────────────────────────────────────────────

    /// Seal a bid. One commitment per vendor per RFP, never replaced.
    pub fn commit(
        &mut self,
        vendor: &AccountId,
        now: BlockHeight,
        rfp: RfpId,
        hash: ContentHash,
    ) -> Result<(), AuctionError> {
        self.tracked("commit", |engine| {
            let record = engine.load_rfp(rfp)?;
            check_commit_window(&record, now)?;
            if record.status != RfpStatus::Commit {
                return Err(AuctionError::WrongStatus {
                    expected: RfpStatus::Commit,
                    actual: record.status,
                });
            }
            if engine.store.get_commitment(rfp, vendor)?.is_some() {
                return Err(AuctionError::AlreadyCommitted(vendor.to_string()));
            }

            let mut batch = WriteBatch::new();
            batch.put_commitment(Commitment {
                rfp,
                vendor: vendor.clone(),
                hash,
                sealed_at: now,
            });
            engine.apply(
                batch,
                AuctionEvent::BidSealed {
                    rfp,
                    vendor: vendor.clone(),
                    at: now,
                },
            )?;

            debug!(rfp = %rfp, vendor = %vendor, at = %now, "bid sealed");
            Ok(())
        })
    }

    /// Open a sealed bid. The first reveal moves the RFP from Commit to Reveal.
    pub fn reveal(
        &mut self,
        vendor: &AccountId,
        now: BlockHeight,
        rfp: RfpId,
        opening: &BidOpening<'_>,
    ) -> Result<(), AuctionError> {
        self.tracked("reveal", |engine| {
            let mut record = engine.load_rfp(rfp)?;
            check_reveal_window(&record, now)?;
            if !record.status.accepts_bids() {
                return Err(AuctionError::WrongStatus {
                    expected: RfpStatus::Reveal,
                    actual: record.status,
                });
            }
            if opening.uri.len() > engine.config.params.max_uri_len {
                return Err(AuctionError::BadArgument(format!(
                    "uri exceeds {} bytes",
                    engine.config.params.max_uri_len
                )));
            }
            if engine.store.get_proposal(rfp, vendor)?.is_some() {
                return Err(AuctionError::AlreadyRevealed(vendor.to_string()));
            }
            let commitment = engine
                .store
                .get_commitment(rfp, vendor)?
                .ok_or_else(|| AuctionError::NoCommitment(vendor.to_string()))?;
            if let Err(e) = verify_opening(&commitment, &record, vendor, opening) {
                warn!(rfp = %rfp, vendor = %vendor, "reveal does not match commitment");
                return Err(e);
            }

            let mut batch = WriteBatch::new();
            batch.put_proposal(Proposal {
                rfp,
                vendor: vendor.clone(),
                uri: opening.uri.to_string(),
                deposit: opening.deposit,
                salt: opening.salt,
                revealed_at: now,
                deliverable: None,
            });
            if record.status == RfpStatus::Commit {
                advance(&mut record, RfpStatus::Reveal)?;
                batch.put_rfp(record);
            }
            engine.apply(
                batch,
                AuctionEvent::BidRevealed {
                    rfp,
                    vendor: vendor.clone(),
                    at: now,
                },
            )?;

            debug!(rfp = %rfp, vendor = %vendor, deposit = opening.deposit, "bid revealed");
            Ok(())
        })
    }

    // ── Scoring ────────────────────────────────────────────────────────

    /// Record one weighted score and advance the vendor's tally.
    pub fn cast_score(
        &mut self,
        evaluator: &AccountId,
        now: BlockHeight,
        rfp: RfpId,
        vendor: &AccountId,
        score: u32,
    ) -> Result<(), AuctionError> {
        self.tracked("cast_score", |engine| {
            let record = engine.load_rfp(rfp)?;
            if record.status != RfpStatus::Evaluate {
                return Err(AuctionError::NotInEvaluationPhase(record.status));
            }
            if now.is_past(record.eval_deadline) {
                return Err(AuctionError::BadTiming(format!(
                    "evaluation closed at {}, now {}",
                    record.eval_deadline, now
                )));
            }
            let approval = engine
                .store
                .get_approval(rfp, evaluator)?
                .filter(|a| a.approved)
                .ok_or_else(|| AuctionError::NotApprovedEvaluator(evaluator.to_string()))?;
            check_score(score, engine.config.params.max_score)?;
            if engine.store.get_proposal(rfp, vendor)?.is_none() {
                return Err(AuctionError::NotFound(format!(
                    "proposal of {vendor} on {rfp}"
                )));
            }
            if engine.store.get_vote(rfp, evaluator, vendor)?.is_some() {
                return Err(AuctionError::AlreadyVoted {
                    evaluator: evaluator.to_string(),
                    vendor: vendor.to_string(),
                });
            }

            let weight = weight_of(Some(&approval), engine.config.params.weight_step);
            let tally = accumulate(engine.store.get_tally(rfp, vendor)?, score, weight)?;

            let mut batch = WriteBatch::new();
            batch.put_vote(
                rfp,
                evaluator,
                vendor,
                VoteRecord {
                    score,
                    weight,
                    cast_at: now,
                },
            );
            batch.put_tally(rfp, vendor, tally);
            engine.apply(
                batch,
                AuctionEvent::ScoreCast {
                    rfp,
                    evaluator: evaluator.clone(),
                    vendor: vendor.clone(),
                    score,
                    weight,
                },
            )?;

            debug!(
                rfp = %rfp,
                evaluator = %evaluator,
                vendor = %vendor,
                score,
                weight,
                weighted_sum = tally.weighted_sum,
                weighted_total = tally.weighted_total,
                "score cast"
            );
            Ok(())
        })
    }

    // ── Finalization ───────────────────────────────────────────────────

    /// Pick the winner among `candidates` and mint their badge.
    ///
    /// Candidates without a tally are skipped. On a complete tie the candidate
    /// listed first wins, so list order is the caller's last tie-break.
    pub fn finalize(
        &mut self,
        caller: &AccountId,
        now: BlockHeight,
        rfp: RfpId,
        candidates: &[AccountId],
    ) -> Result<Award, AuctionError> {
        self.tracked("finalize", |engine| {
            let mut record = engine.load_rfp(rfp)?;
            require_requester(&record, caller)?;
            if record.status != RfpStatus::Evaluate {
                return Err(AuctionError::NotInEvaluationPhase(record.status));
            }
            if !now.is_past(record.eval_deadline) {
                return Err(AuctionError::BadTiming(format!(
                    "evaluation open until {}, now {}",
                    record.eval_deadline, now
                )));
            }
            if candidates.len() > engine.config.params.max_candidates {
                return Err(AuctionError::BadArgument(format!(
                    "{} candidates exceeds limit {}",
                    candidates.len(),
                    engine.config.params.max_candidates
                )));
            }

            let standings = engine.standings(rfp, candidates)?;
            let best = select_winner(standings).ok_or(AuctionError::NoReveals)?;

            let badge_value = next_id(engine.store.get_counter(Counter::Badge)?)?;
            let badge_id = BadgeId::new(badge_value);
            let tally = Tally {
                weighted_sum: best.weighted_sum,
                weighted_total: best.weighted_total,
            };
            let badge: Badge = mint_badge(badge_id, &record, &best.vendor, tally, now);

            advance(&mut record, RfpStatus::Awarded)?;
            record.winner = Some(best.vendor.clone());
            record.badge = Some(badge_id);

            let mut batch = WriteBatch::new();
            batch.put_badge(badge);
            batch.set_counter(Counter::Badge, badge_value);
            batch.put_rfp(record);
            engine.apply(
                batch,
                AuctionEvent::Awarded {
                    rfp,
                    winner: best.vendor.clone(),
                    badge: badge_id,
                },
            )?;

            info!(
                rfp = %rfp,
                winner = %best.vendor,
                badge = badge_value,
                weighted_sum = best.weighted_sum,
                weighted_total = best.weighted_total,
                "rfp awarded"
            );
            Ok(Award {
                winner: best.vendor,
                badge: badge_id,
                weighted_sum: best.weighted_sum,
                weighted_total: best.weighted_total,
            })
        })
    }

    /// Resolver input for every candidate that carries a tally, in list order.
    fn standings(
        &self,
        rfp: RfpId,
        candidates: &[AccountId],
    ) -> Result<Vec<Standing>, AuctionError> {
        let mut standings = Vec::with_capacity(candidates.len());
        for vendor in candidates {
            let Some(tally) = self.store.get_tally(rfp, vendor)? else {
                continue;
            };
            let Some(proposal) = self.store.get_proposal(rfp, vendor)? else {
                continue;
            };
            standings.push(Standing {
                vendor: vendor.clone(),
                weighted_sum: tally.weighted_sum,
                weighted_total: tally.weighted_total,
                reputation: self.store.get_reputation(vendor)?.unwrap_or(0),
                revealed_at: proposal.revealed_at,
            });
        }
        Ok(standings)
    }

    // ── Deliverables ───────────────────────────────────────────────────

    /// Post (or replace) an unreleased milestone deliverable.
    pub fn post_milestone(
        &mut self,
        vendor: &AccountId,
        now: BlockHeight,
        rfp: RfpId,
        index: u32,
        hash: ContentHash,
    ) -> Result<(), AuctionError> {
        self.tracked("post_milestone", |engine| {
            engine.load_rfp(rfp)?;
            require_posted_hash(&hash)?;
            if engine.store.get_proposal(rfp, vendor)?.is_none() {
                return Err(AuctionError::NotAuthorized(vendor.to_string()));
            }
            if let Some(existing) = engine.store.get_milestone(rfp, vendor, index)? {
                if existing.released {
                    return Err(AuctionError::AlreadyReleased(index));
                }
            }

            let mut batch = WriteBatch::new();
            batch.put_milestone(Milestone {
                rfp,
                vendor: vendor.clone(),
                index,
                deliverable: Some(hash),
                released: false,
                posted_at: now,
            });
            engine.apply(
                batch,
                AuctionEvent::MilestonePosted {
                    rfp,
                    vendor: vendor.clone(),
                    index,
                    hash,
                },
            )?;

            debug!(rfp = %rfp, vendor = %vendor, index, hash = %hash, "milestone posted");
            Ok(())
        })
    }

    /// Release a milestone whose deliverable equals `expected` and pay `amount`.
    ///
    /// The payout collaborator is called before anything is written; if it
    /// refuses, the milestone stays unreleased. If the write then fails, a
    /// retry presents the same [`PayoutContext`] and the collaborator does
    /// not pay twice.
    pub fn verify_and_release(
        &mut self,
        caller: &AccountId,
        rfp: RfpId,
        vendor: &AccountId,
        index: u32,
        expected: ContentHash,
        amount: u128,
    ) -> Result<(), AuctionError> {
        self.tracked("verify_and_release", |engine| {
            let record = engine.load_rfp(rfp)?;
            require_requester(&record, caller)?;
            let mut milestone = engine
                .store
                .get_milestone(rfp, vendor, index)?
                .ok_or_else(|| {
                    AuctionError::NotFound(format!("milestone {index} of {vendor} on {rfp}"))
                })?;
            if let Err(e) = check_milestone(&milestone, &expected) {
                warn!(rfp = %rfp, vendor = %vendor, index, error = %e, "milestone not released");
                return Err(e);
            }

            let ctx = PayoutContext {
                rfp,
                payer: record.requester.clone(),
                milestone: Some(index),
            };
            if let Err(e) = engine.disburser.disburse(&ctx, vendor, amount) {
                warn!(
                    rfp = %rfp,
                    vendor = %vendor,
                    index,
                    payout = engine.disburser.name(),
                    error = %e,
                    "milestone payout failed"
                );
                return Err(AuctionError::PayoutFailed(e.to_string()));
            }

            milestone.released = true;
            let mut batch = WriteBatch::new();
            batch.put_milestone(milestone);
            engine.apply(
                batch,
                AuctionEvent::PayoutAuthorized {
                    rfp,
                    vendor: vendor.clone(),
                    index,
                    amount,
                },
            )?;

            info!(rfp = %rfp, vendor = %vendor, index, amount, "milestone released");
            Ok(())
        })
    }

    /// Record the winner's final deliverable hash.
    pub fn post_final(
        &mut self,
        caller: &AccountId,
        rfp: RfpId,
        hash: ContentHash,
    ) -> Result<(), AuctionError> {
        self.tracked("post_final", |engine| {
            let record = engine.load_rfp(rfp)?;
            if !record.is_winner(caller) {
                return Err(AuctionError::NotWinner(caller.to_string()));
            }
            if record.status != RfpStatus::Awarded {
                return Err(AuctionError::WrongStatus {
                    expected: RfpStatus::Awarded,
                    actual: record.status,
                });
            }
            require_posted_hash(&hash)?;
            let mut proposal = engine
                .store
                .get_proposal(rfp, caller)?
                .ok_or_else(|| AuctionError::NotFound(format!("proposal of {caller} on {rfp}")))?;
            proposal.deliverable = Some(hash);

            let mut batch = WriteBatch::new();
            batch.put_proposal(proposal);
            engine.apply(batch, AuctionEvent::FinalPosted { rfp, hash })?;

            debug!(rfp = %rfp, winner = %caller, hash = %hash, "final deliverable posted");
            Ok(())
        })
    }

    /// Accept the final deliverable: settle custody, bump the winner's
    /// reputation and complete the RFP.
    ///
    /// Settlement precedes the write, so a retry after a store failure
    /// settles the same context again.
    pub fn verify_final(
        &mut self,
        caller: &AccountId,
        rfp: RfpId,
        expected: ContentHash,
        rep_bump: u64,
    ) -> Result<(), AuctionError> {
        self.tracked("verify_final", |engine| {
            let mut record = engine.load_rfp(rfp)?;
            require_requester(&record, caller)?;
            if record.status != RfpStatus::Awarded {
                return Err(AuctionError::WrongStatus {
                    expected: RfpStatus::Awarded,
                    actual: record.status,
                });
            }
            let winner = record
                .winner
                .clone()
                .ok_or_else(|| AuctionError::NotFound(format!("winner of {rfp}")))?;
            let proposal = engine
                .store
                .get_proposal(rfp, &winner)?
                .ok_or_else(|| AuctionError::NotFound(format!("proposal of {winner} on {rfp}")))?;
            if let Err(e) = check_final(proposal.deliverable.as_ref(), &expected) {
                warn!(rfp = %rfp, winner = %winner, error = %e, "final deliverable rejected");
                return Err(e);
            }
            let current = engine.store.get_reputation(&winner)?.unwrap_or(0);
            let reputation = bump_reputation(current, rep_bump)?;
            advance(&mut record, RfpStatus::Completed)?;

            let ctx = PayoutContext {
                rfp,
                payer: record.requester.clone(),
                milestone: None,
            };
            if let Err(e) = engine.disburser.settle(&ctx, &winner) {
                warn!(
                    rfp = %rfp,
                    winner = %winner,
                    payout = engine.disburser.name(),
                    error = %e,
                    "final settlement failed"
                );
                return Err(AuctionError::PayoutFailed(e.to_string()));
            }

            let mut batch = WriteBatch::new();
            batch.put_reputation(&winner, reputation);
            batch.put_rfp(record);
            engine.apply(
                batch,
                AuctionEvent::Completed {
                    rfp,
                    winner: winner.clone(),
                    reputation,
                },
            )?;

            info!(rfp = %rfp, winner = %winner, reputation, "rfp completed");
            Ok(())
        })
    }

    // ── Queries ────────────────────────────────────────────────────────

    pub fn get_rfp(&self, rfp: RfpId) -> Result<Option<RfpRecord>, AuctionError> {
        Ok(self.store.get_rfp(rfp)?)
    }

    /// A vendor's reputation, zero when never set.
    pub fn get_vendor_reputation(&self, vendor: &AccountId) -> Result<u64, AuctionError> {
        Ok(self.store.get_reputation(vendor)?.unwrap_or(0))
    }

    pub fn get_badge(&self, badge: BadgeId) -> Result<Option<Badge>, AuctionError> {
        Ok(self.store.get_badge(badge)?)
    }

    pub fn get_winner(&self, rfp: RfpId) -> Result<Option<AccountId>, AuctionError> {
        Ok(self.load_rfp(rfp)?.winner)
    }

    pub fn get_commitment(
        &self,
        rfp: RfpId,
        vendor: &AccountId,
    ) -> Result<Option<Commitment>, AuctionError> {
        Ok(self.store.get_commitment(rfp, vendor)?)
    }

    pub fn get_proposal(
        &self,
        rfp: RfpId,
        vendor: &AccountId,
    ) -> Result<Option<Proposal>, AuctionError> {
        Ok(self.store.get_proposal(rfp, vendor)?)
    }

    pub fn get_tally(&self, rfp: RfpId, vendor: &AccountId) -> Result<Option<Tally>, AuctionError> {
        Ok(self.store.get_tally(rfp, vendor)?)
    }

    pub fn get_milestone(
        &self,
        rfp: RfpId,
        vendor: &AccountId,
        index: u32,
    ) -> Result<Option<Milestone>, AuctionError> {
        Ok(self.store.get_milestone(rfp, vendor, index)?)
    }

    /// Every revealed proposal on `rfp`, ordered by vendor.
    pub fn proposals(&self, rfp: RfpId) -> Result<Vec<Proposal>, AuctionError> {
        Ok(self.store.proposals_for(rfp)?)
    }

    pub fn milestones(
        &self,
        rfp: RfpId,
        vendor: &AccountId,
    ) -> Result<Vec<Milestone>, AuctionError> {
        Ok(self.store.milestones_for(rfp, vendor)?)
    }

    /// Badges held by `owner`, in mint order.
    pub fn badges_of(&self, owner: &AccountId) -> Result<Vec<Badge>, AuctionError> {
        Ok(self.store.badges_of(owner)?)
    }

    pub fn list_rfps(&self) -> Result<Vec<RfpId>, AuctionError> {
        Ok(self.store.list_rfps()?)
    }

    /// Current vote weight of `evaluator` on `rfp` (1 when unapproved).
    pub fn weight_of(&self, rfp: RfpId, evaluator: &AccountId) -> Result<u64, AuctionError> {
        let approval = self.store.get_approval(rfp, evaluator)?;
        Ok(weight_of(approval.as_ref(), self.config.params.weight_step))
    }

    // ── Internals ──────────────────────────────────────────────────────

    fn load_rfp(&self, rfp: RfpId) -> Result<RfpRecord, AuctionError> {
        self.store
            .get_rfp(rfp)?
            .ok_or_else(|| AuctionError::NotFound(rfp.to_string()))
    }

    /// Commit one operation's writes, then queue its event.
    fn apply(&mut self, batch: WriteBatch, event: AuctionEvent) -> Result<(), AuctionError> {
        self.store.commit_batch(batch)?;
        self.pending_events.push(event);
        Ok(())
    }

    fn tracked<T>(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T, AuctionError>,
    ) -> Result<T, AuctionError> {
        let result = f(self);
        match &result {
            Ok(_) => self.stats.increment(op),
            Err(e) => {
                self.stats.increment("rejected");
                debug!(op, error = %e, "operation rejected");
            }
        }
        result
    }
}
