//! Helpers for resolving and switching the active ledger.

use miao_domain::Ledger;

use crate::CoreError;

pub struct LedgerService;

impl LedgerService {
    pub fn find<'a>(ledgers: &'a [Ledger], id: &str) -> Option<&'a Ledger> {
        ledgers.iter().find(|ledger| ledger.id == id)
    }

    /// The ledger matching `active_id`, or the first ledger when the id dangles.
    pub fn current<'a>(ledgers: &'a [Ledger], active_id: &str) -> Option<&'a Ledger> {
        Self::find(ledgers, active_id).or_else(|| ledgers.first())
    }

    /// Checks that `id` names a known ledger before it becomes active.
    pub fn ensure_exists(ledgers: &[Ledger], id: &str) -> Result<(), CoreError> {
        if Self::find(ledgers, id).is_some() {
            Ok(())
        } else {
            Err(CoreError::LedgerNotFound(id.to_string()))
        }
    }
}
