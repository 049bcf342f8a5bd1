//! Derived per-day view over a month of transactions.

use chrono::NaiveDate;

use crate::transaction::Transaction;

/// Same-day transactions with income/expense subtotals. Rebuilt on every
/// aggregation pass and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyGroup {
    pub date: NaiveDate,
    pub total_income: f64,
    pub total_expense: f64,
    pub transactions: Vec<Transaction>,
}

impl DailyGroup {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            total_income: 0.0,
            total_expense: 0.0,
            transactions: Vec::new(),
        }
    }

    /// Appends a transaction and folds its amount into the subtotals.
    pub fn push(&mut self, transaction: Transaction) {
        if transaction.is_income() {
            self.total_income += transaction.amount;
        } else {
            self.total_expense += transaction.amount;
        }
        self.transactions.push(transaction);
    }
}
