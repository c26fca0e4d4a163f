//! Nullable payout collaborator: records releases instead of moving value.

use sealbid_payout::{Disburse, PayoutContext, PayoutError};
use sealbid_types::AccountId;
use std::sync::Mutex;

/// One authorized release, as observed by the collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoutRecord {
    pub ctx: PayoutContext,
    pub to: AccountId,
    /// `None` for a final settlement.
    pub amount: Option<u128>,
}

/// A test disburser that records every release once and can be told to fail.
pub struct NullDisburser {
    records: Mutex<Vec<PayoutRecord>>,
    failure: Mutex<Option<PayoutError>>,
}

impl NullDisburser {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Make every subsequent call fail with `error` until [`Self::recover`].
    pub fn fail_with(&self, error: PayoutError) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(error);
        }
    }

    pub fn recover(&self) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = None;
        }
    }

    /// All successful releases so far (for assertions).
    pub fn records(&self) -> Vec<PayoutRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn record(&self, entry: PayoutRecord) -> Result<(), PayoutError> {
        let failure = self
            .failure
            .lock()
            .map_err(|e| PayoutError::Unavailable(e.to_string()))?;
        if let Some(err) = failure.as_ref() {
            return Err(err.clone());
        }
        let mut records = self
            .records
            .lock()
            .map_err(|e| PayoutError::Unavailable(e.to_string()))?;
        let done = records
            .iter()
            .find(|r| r.ctx == entry.ctx && r.to == entry.to)
            .cloned();
        match done {
            Some(done) if done == entry => Ok(()),
            Some(done) => Err(PayoutError::Rejected(format!(
                "release {:?} to {} already made",
                done.ctx.milestone, done.to
            ))),
            None => {
                records.push(entry);
                Ok(())
            }
        }
    }
}

impl Default for NullDisburser {
    fn default() -> Self {
        Self::new()
    }
}

impl Disburse for NullDisburser {
    fn disburse(
        &self,
        ctx: &PayoutContext,
        to: &AccountId,
        amount: u128,
    ) -> Result<(), PayoutError> {
        self.record(PayoutRecord {
            ctx: ctx.clone(),
            to: to.clone(),
            amount: Some(amount),
        })
    }

    fn settle(&self, ctx: &PayoutContext, to: &AccountId) -> Result<(), PayoutError> {
        self.record(PayoutRecord {
            ctx: ctx.clone(),
            to: to.clone(),
            amount: None,
        })
    }

    fn name(&self) -> &str {
        "null-disburser"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealbid_types::RfpId;

    fn ctx() -> PayoutContext {
        PayoutContext {
            rfp: RfpId::new(1),
            payer: AccountId::new("requester"),
            milestone: Some(0),
        }
    }

    #[test]
    fn records_disbursements() {
        let d = NullDisburser::new();
        d.disburse(&ctx(), &AccountId::new("v"), 40).unwrap();
        let settlement = PayoutContext {
            milestone: None,
            ..ctx()
        };
        d.settle(&settlement, &AccountId::new("v")).unwrap();
        let records = d.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount, Some(40));
        assert_eq!(records[1].amount, None);
    }

    #[test]
    fn repeated_context_pays_once() {
        let d = NullDisburser::new();
        d.disburse(&ctx(), &AccountId::new("v"), 40).unwrap();
        d.disburse(&ctx(), &AccountId::new("v"), 40).unwrap();
        assert_eq!(d.records().len(), 1);

        assert!(matches!(
            d.disburse(&ctx(), &AccountId::new("v"), 41),
            Err(PayoutError::Rejected(_))
        ));
        assert_eq!(d.records().len(), 1);

        // Milestone indices are per vendor.
        d.disburse(&ctx(), &AccountId::new("w"), 40).unwrap();
        assert_eq!(d.records().len(), 2);
    }

    #[test]
    fn injected_failure_records_nothing() {
        let d = NullDisburser::new();
        d.fail_with(PayoutError::Unavailable("offline".into()));
        assert!(d.disburse(&ctx(), &AccountId::new("v"), 1).is_err());
        assert!(d.records().is_empty());
        d.recover();
        assert!(d.disburse(&ctx(), &AccountId::new("v"), 1).is_ok());
    }
}
