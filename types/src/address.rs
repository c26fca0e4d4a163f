//! Account identifier for requesters, vendors and evaluators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable account identifier, resolved by the surrounding environment
/// from whatever authentication scheme it uses.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account identifier from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw bytes fed into identity digests.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// An identifier is usable when it is non-empty and has no surrounding whitespace.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0.trim() == self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(AccountId::new("vendor-1").is_valid());
        assert!(!AccountId::new("").is_valid());
        assert!(!AccountId::new(" padded ").is_valid());
    }

    #[test]
    fn ordering_follows_string() {
        assert!(AccountId::new("a") < AccountId::new("b"));
    }
}
