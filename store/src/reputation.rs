//! Global vendor reputation table.

use crate::StoreError;
use sealbid_types::AccountId;

pub trait ReputationStore {
    /// A vendor's reputation, `None` if never set.
    fn get_reputation(&self, vendor: &AccountId) -> Result<Option<u64>, StoreError>;
}
