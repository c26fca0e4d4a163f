use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayoutError {
    #[error("insufficient escrow: needed {needed}, available {available}")]
    InsufficientEscrow { needed: u128, available: u128 },

    #[error("payout collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("transfer rejected: {0}")]
    Rejected(String),
}
