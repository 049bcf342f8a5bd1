//! Top-level controller owning the in-memory collections.
//!
//! Storage is read once in [`LedgerSession::open`]; from then on the in-memory
//! copy is authoritative and each mutation flushes its collection wholesale.
//! All mutations take `&mut self`, so a second action always observes the
//! result of the first.

use chrono::{DateTime, NaiveDate, Utc};
use miao_domain::{Category, Ledger, Transaction, TransactionDraft, ViewState};

use crate::{
    entry_form::EntryForm,
    ledger_service::LedgerService,
    month::YearMonth,
    navigation::{NavEvent, Navigation},
    storage::ExpenseRepository,
    summary_service::{MonthlyReport, SummaryService},
    transaction_service::{Confirmation, DeleteOutcome, TransactionService},
    CoreError,
};

pub struct LedgerSession {
    repository: ExpenseRepository,
    transactions: Vec<Transaction>,
    ledgers: Vec<Ledger>,
    categories: Vec<Category>,
    active_ledger_id: String,
    month: YearMonth,
    navigation: Navigation,
}

impl LedgerSession {
    /// Loads every collection and starts on the home screen showing `today`'s month.
    pub fn open(repository: ExpenseRepository, today: NaiveDate) -> Result<Self, CoreError> {
        let transactions = repository.load_transactions()?;
        let ledgers = repository.load_ledgers()?;
        let categories = repository.load_categories()?;
        let mut active_ledger_id = repository.load_active_ledger_id()?;

        if LedgerService::find(&ledgers, &active_ledger_id).is_none() {
            if let Some(first) = ledgers.first() {
                tracing::warn!(
                    stored = %active_ledger_id,
                    fallback = %first.id,
                    "active ledger not found, using first ledger"
                );
                active_ledger_id = first.id.clone();
            }
        }

        tracing::info!(
            transactions = transactions.len(),
            ledgers = ledgers.len(),
            categories = categories.len(),
            active_ledger = %active_ledger_id,
            "session opened"
        );

        Ok(Self {
            repository,
            transactions,
            ledgers,
            categories,
            active_ledger_id,
            month: YearMonth::from_date(today),
            navigation: Navigation::new(),
        })
    }

    pub fn in_memory(today: NaiveDate) -> Result<Self, CoreError> {
        Self::open(ExpenseRepository::in_memory(), today)
    }

    pub fn repository(&self) -> &ExpenseRepository {
        &self.repository
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn ledgers(&self) -> &[Ledger] {
        &self.ledgers
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active_ledger_id(&self) -> &str {
        &self.active_ledger_id
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn navigation(&self) -> Navigation {
        self.navigation
    }

    pub fn view(&self) -> ViewState {
        self.navigation.view
    }

    pub fn current_ledger(&self) -> Option<&Ledger> {
        LedgerService::current(&self.ledgers, &self.active_ledger_id)
    }

    pub fn find_transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Recomputes every derived view for the active ledger and displayed month.
    pub fn report(&self) -> MonthlyReport {
        SummaryService::report(
            &self.transactions,
            &self.categories,
            &self.active_ledger_id,
            self.month,
        )
    }

    /// A blank entry form bound to this session's categories.
    pub fn entry_form(&self, today: NaiveDate) -> EntryForm {
        EntryForm::new(&self.categories, today)
    }

    /// Adds a transaction to the active ledger and closes the entry form.
    /// Invalid drafts and failed saves return an error and change nothing.
    pub fn add_transaction(
        &mut self,
        draft: TransactionDraft,
        now: DateTime<Utc>,
    ) -> Result<Transaction, CoreError> {
        let transaction =
            TransactionService::add(&mut self.transactions, draft, &self.active_ledger_id, now)?;
        if let Err(err) = self.repository.save_transactions(&self.transactions) {
            self.transactions.retain(|txn| txn.id != transaction.id);
            return Err(err);
        }
        self.navigation = self.navigation.apply(NavEvent::EntrySaved);
        tracing::info!(id = %transaction.id, ledger = %transaction.ledger_id, "transaction added");
        Ok(transaction)
    }

    /// Deletes after confirmation. An empty list is persisted like any other.
    /// A failed save puts the record back at its old position.
    pub fn delete_transaction(
        &mut self,
        id: &str,
        confirmation: &mut dyn Confirmation,
    ) -> Result<DeleteOutcome, CoreError> {
        let position = self.transactions.iter().position(|txn| txn.id == id);
        let outcome = TransactionService::delete(&mut self.transactions, id, confirmation)?;
        match &outcome {
            DeleteOutcome::Deleted(removed) => {
                if let Err(err) = self.repository.save_transactions(&self.transactions) {
                    let index = position.unwrap_or(0).min(self.transactions.len());
                    self.transactions.insert(index, removed.clone());
                    return Err(err);
                }
                tracing::info!(id = %removed.id, "transaction deleted");
            }
            DeleteOutcome::Cancelled => tracing::debug!(id, "deletion cancelled"),
        }
        Ok(outcome)
    }

    /// Makes `id` the active ledger and persists the choice. The displayed
    /// month is left alone.
    pub fn switch_ledger(&mut self, id: &str) -> Result<(), CoreError> {
        LedgerService::ensure_exists(&self.ledgers, id)?;
        self.repository.save_active_ledger_id(id)?;
        self.active_ledger_id = id.to_string();
        self.navigation = self.navigation.apply(NavEvent::LedgerSelected);
        tracing::info!(ledger = id, "active ledger switched");
        Ok(())
    }

    pub fn change_month(&mut self, delta: i32) -> YearMonth {
        self.month = self.month.shift(delta);
        self.month
    }

    pub fn set_month(&mut self, month: YearMonth) {
        self.month = month;
    }

    pub fn navigate(&mut self, event: NavEvent) -> Navigation {
        self.navigation = self.navigation.apply(event);
        self.navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use miao_domain::TransactionType;
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn expense(amount: f64, day: u32) -> TransactionDraft {
        TransactionDraft::new(
            TransactionType::Expense,
            amount,
            "c1",
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        )
    }

    /// Memory store whose writes start failing once `fail_writes` is set.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: Arc<AtomicBool>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(CoreError::Storage("disk full".into()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), CoreError> {
            self.inner.remove(key)
        }
    }

    fn flaky_session() -> (LedgerSession, Arc<AtomicBool>) {
        let store = FlakyStore::default();
        let switch = Arc::clone(&store.fail_writes);
        let session =
            LedgerSession::open(ExpenseRepository::new(Box::new(store)), today()).unwrap();
        (session, switch)
    }

    #[test]
    fn opens_with_defaults_on_empty_store() {
        let session = LedgerSession::in_memory(today()).unwrap();
        assert_eq!(session.active_ledger_id(), "l1");
        assert_eq!(session.month(), YearMonth::new(2024, 3).unwrap());
        assert_eq!(session.view(), ViewState::Home);
        assert_eq!(session.current_ledger().unwrap().id, "l1");
    }

    #[test]
    fn dangling_active_ledger_falls_back_to_first() {
        let store = MemoryStore::new();
        store.set("miao_active_ledger", "l404").unwrap();
        let session =
            LedgerSession::open(ExpenseRepository::new(Box::new(store)), today()).unwrap();
        assert_eq!(session.active_ledger_id(), "l1");
    }

    #[test]
    fn add_persists_and_closes_entry_form() {
        let mut session = LedgerSession::in_memory(today()).unwrap();
        session.navigate(NavEvent::OpenEntry);
        let txn = session.add_transaction(expense(9.5, 3), Utc::now()).unwrap();

        assert!(!session.navigation().entry_open);
        assert_eq!(txn.ledger_id, "l1");
        let stored = session.repository().load_transactions().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, txn.id);
    }

    #[test]
    fn rejected_add_keeps_form_open() {
        let mut session = LedgerSession::in_memory(today()).unwrap();
        session.navigate(NavEvent::OpenEntry);
        assert!(session.add_transaction(expense(0.0, 3), Utc::now()).is_err());
        assert!(session.navigation().entry_open);
        assert!(session.transactions().is_empty());
    }

    #[test]
    fn deleting_last_transaction_persists_empty_list() {
        let mut session = LedgerSession::in_memory(today()).unwrap();
        let txn = session.add_transaction(expense(4.0, 3), Utc::now()).unwrap();
        let mut accept = |_: &str| true;
        session.delete_transaction(&txn.id, &mut accept).unwrap();

        assert!(session.repository().load_transactions().unwrap().is_empty());
        assert_eq!(
            session
                .repository()
                .store()
                .get("miao_transactions")
                .unwrap()
                .as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn switching_ledger_keeps_month_and_persists() {
        let mut session = LedgerSession::in_memory(today()).unwrap();
        session.change_month(-2);
        session.navigate(NavEvent::OpenLedgers);
        session.switch_ledger("l2").unwrap();

        assert_eq!(session.month(), YearMonth::new(2024, 1).unwrap());
        assert_eq!(session.view(), ViewState::Home);
        assert_eq!(session.repository().load_active_ledger_id().unwrap(), "l2");
        assert!(session.switch_ledger("nope").is_err());
        assert_eq!(session.active_ledger_id(), "l2");
    }

    #[test]
    fn failed_add_save_leaves_memory_untouched() {
        let (mut session, fail_writes) = flaky_session();
        session.add_transaction(expense(42.0, 3), Utc::now()).unwrap();
        session.navigate(NavEvent::OpenEntry);

        fail_writes.store(true, Ordering::SeqCst);
        assert!(session.add_transaction(expense(99.0, 4), Utc::now()).is_err());

        assert_eq!(session.transactions().len(), 1);
        assert_eq!(session.report().totals.expense, 42.0);
        assert!(session.navigation().entry_open);
    }

    #[test]
    fn failed_delete_save_restores_record_in_place() {
        let (mut session, fail_writes) = flaky_session();
        let older = session.add_transaction(expense(1.0, 3), Utc::now()).unwrap();
        let newer = session.add_transaction(expense(2.0, 4), Utc::now()).unwrap();

        fail_writes.store(true, Ordering::SeqCst);
        let mut accept = |_: &str| true;
        assert!(session.delete_transaction(&older.id, &mut accept).is_err());

        let ids: Vec<&str> = session.transactions().iter().map(|txn| txn.id.as_str()).collect();
        assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);
    }

    #[test]
    fn failed_switch_save_keeps_previous_ledger() {
        let (mut session, fail_writes) = flaky_session();
        fail_writes.store(true, Ordering::SeqCst);
        session.navigate(NavEvent::OpenLedgers);

        assert!(session.switch_ledger("l2").is_err());
        assert_eq!(session.active_ledger_id(), "l1");
        assert_eq!(session.view(), ViewState::Ledgers);
    }
}
