//! Domain models for recorded money movements.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single income or expense entry belonging to one ledger.
///
/// Transactions are created through [`Transaction::from_draft`] and are never
/// edited afterwards; the only other lifecycle event is deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
    pub ledger_id: String,
    /// Creation instant in epoch milliseconds. Orders entries sharing a date.
    pub timestamp: i64,
}

impl Transaction {
    /// Materializes a draft, assigning a fresh id, the creation instant and
    /// the owning ledger.
    pub fn from_draft(
        draft: TransactionDraft,
        ledger_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount: draft.amount,
            kind: draft.kind,
            category_id: draft.category_id,
            date: draft.date,
            note: draft.note,
            ledger_id: ledger_id.into(),
            timestamp: created_at.timestamp_millis(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with income positive and expense negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {}{:.2} on {}", self.kind, self.kind.sign(), self.amount, self.date)
    }
}

/// User-supplied portion of a transaction, before the session stamps it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub amount: f64,
    pub kind: TransactionType,
    pub category_id: String,
    pub date: NaiveDate,
    pub note: String,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionType,
        amount: f64,
        category_id: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            kind,
            category_id: category_id.into(),
            date,
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn from_draft_stamps_identity_and_ledger() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let created = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let draft = TransactionDraft::new(TransactionType::Expense, 50.0, "c1", date)
            .with_note("lunch");

        let txn = Transaction::from_draft(draft, "l1", created);

        assert!(!txn.id.is_empty());
        assert_eq!(txn.ledger_id, "l1");
        assert_eq!(txn.timestamp, created.timestamp_millis());
        assert_eq!(txn.note, "lunch");
        assert_eq!(txn.signed_amount(), -50.0);
    }

    #[test]
    fn deserializes_stored_layout() {
        let raw = r#"{
            "id": "1709640000000",
            "amount": 2000,
            "type": "income",
            "categoryId": "c9",
            "date": "2024-03-01",
            "ledgerId": "l1",
            "timestamp": 1709640000000
        }"#;
        let txn: Transaction = serde_json::from_str(raw).expect("parse stored transaction");
        assert_eq!(txn.kind, TransactionType::Income);
        assert_eq!(txn.category_id, "c9");
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(txn.note.is_empty());

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["ledgerId"], "l1");
        assert_eq!(json["type"], "income");
    }
}
