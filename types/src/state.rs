//! RFP lifecycle state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle status of an RFP.
///
/// Commit → Reveal → Evaluate → Awarded → Completed. `Active` is reserved
/// and never entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RfpStatus {
    /// Vendors may seal bids.
    Commit,
    /// At least one sealed bid has been revealed.
    Reveal,
    /// Approved evaluators score revealed bids.
    Evaluate,
    /// A winner was selected and a badge minted.
    Awarded,
    /// Reserved.
    Active,
    /// Final deliverable verified. Terminal.
    Completed,
}

impl RfpStatus {
    fn rank(&self) -> u8 {
        match self {
            Self::Commit => 0,
            Self::Reveal => 1,
            Self::Evaluate => 2,
            Self::Awarded => 3,
            Self::Active => 4,
            Self::Completed => 5,
        }
    }

    /// Whether a transition from `self` to `next` is allowed.
    ///
    /// Only forward moves along the live path are permitted; `Active` is
    /// never a valid target.
    pub fn can_advance_to(&self, next: RfpStatus) -> bool {
        matches!(
            (self, next),
            (Self::Commit, Self::Reveal)
                | (Self::Commit, Self::Evaluate)
                | (Self::Reveal, Self::Evaluate)
                | (Self::Evaluate, Self::Awarded)
                | (Self::Awarded, Self::Completed)
        )
    }

    /// Whether vendors may still reveal (or seal, for `Commit`).
    pub fn accepts_bids(&self) -> bool {
        matches!(self, Self::Commit | Self::Reveal)
    }

    /// Awarded or later: the winner is fixed.
    pub fn is_awarded(&self) -> bool {
        self.rank() >= Self::Awarded.rank()
    }
}

impl fmt::Display for RfpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Commit => "commit",
            Self::Reveal => "reveal",
            Self::Evaluate => "evaluate",
            Self::Awarded => "awarded",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RfpStatus; 6] = [
        RfpStatus::Commit,
        RfpStatus::Reveal,
        RfpStatus::Evaluate,
        RfpStatus::Awarded,
        RfpStatus::Active,
        RfpStatus::Completed,
    ];

    #[test]
    fn never_regresses() {
        for from in ALL {
            for to in ALL {
                if from.can_advance_to(to) {
                    assert!(from.rank() < to.rank(), "{from} -> {to}");
                }
            }
        }
    }

    #[test]
    fn active_is_unreachable() {
        assert!(ALL.iter().all(|s| !s.can_advance_to(RfpStatus::Active)));
    }

    #[test]
    fn completed_is_terminal() {
        assert!(ALL.iter().all(|s| !RfpStatus::Completed.can_advance_to(*s)));
    }

    #[test]
    fn awarded_cannot_go_back_to_evaluate() {
        assert!(!RfpStatus::Awarded.can_advance_to(RfpStatus::Evaluate));
        assert!(!RfpStatus::Awarded.can_advance_to(RfpStatus::Awarded));
    }
}
