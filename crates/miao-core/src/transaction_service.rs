//! Validated add/delete helpers for the transaction collection.

use chrono::{DateTime, Utc};
use miao_domain::{Transaction, TransactionDraft};

use crate::CoreError;

pub const DELETE_PROMPT: &str = "Delete this record?";

/// Asks the user to approve a destructive action.
pub trait Confirmation {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(Transaction),
    Cancelled,
}

pub struct TransactionService;

impl TransactionService {
    /// Rejects drafts whose amount is not a finite, strictly positive number.
    pub fn validate(draft: &TransactionDraft) -> Result<(), CoreError> {
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(CoreError::Validation(format!(
                "amount must be greater than zero (got {})",
                draft.amount
            )));
        }
        Ok(())
    }

    /// Stamps the draft and prepends it. Nothing changes when validation fails.
    pub fn add(
        transactions: &mut Vec<Transaction>,
        draft: TransactionDraft,
        ledger_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Transaction, CoreError> {
        Self::validate(&draft)?;
        let transaction = Transaction::from_draft(draft, ledger_id, now);
        transactions.insert(0, transaction.clone());
        Ok(transaction)
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(transactions: &mut Vec<Transaction>, id: &str) -> Result<Transaction, CoreError> {
        let position = transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound(id.to_string()))?;
        Ok(transactions.remove(position))
    }

    /// Removes `id` only after `confirmation` approves.
    pub fn delete(
        transactions: &mut Vec<Transaction>,
        id: &str,
        confirmation: &mut dyn Confirmation,
    ) -> Result<DeleteOutcome, CoreError> {
        if !transactions.iter().any(|txn| txn.id == id) {
            return Err(CoreError::TransactionNotFound(id.to_string()));
        }
        if !confirmation.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }
        Self::remove(transactions, id).map(DeleteOutcome::Deleted)
    }
}
