//! Auction parameters: bounds and constants the engine enforces.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("weight_step must be non-zero")]
    ZeroWeightStep,

    #[error("max_candidates must be non-zero")]
    ZeroCandidates,
}

/// Tunable limits for the resolution engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionParams {
    /// Inclusive upper bound for an evaluator score. Lower bound is always 0.
    pub max_score: u32,

    /// Reputation points per extra unit of vote weight:
    /// `weight = 1 + reputation / weight_step`.
    pub weight_step: u64,

    /// Longest candidate list `finalize` accepts.
    pub max_candidates: usize,

    pub max_title_len: usize,
    pub max_summary_len: usize,

    /// Longest proposal URI accepted on reveal (bytes).
    pub max_uri_len: usize,
}

impl AuctionParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.weight_step == 0 {
            return Err(ParamsError::ZeroWeightStep);
        }
        if self.max_candidates == 0 {
            return Err(ParamsError::ZeroCandidates);
        }
        Ok(())
    }
}

impl Default for AuctionParams {
    fn default() -> Self {
        Self {
            max_score: 100,
            weight_step: 100,
            max_candidates: 64,
            max_title_len: 128,
            max_summary_len: 1024,
            max_uri_len: 512,
        }
    }
}
