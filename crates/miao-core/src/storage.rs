//! Whole-collection persistence over a pluggable key-value store.

use std::{collections::HashMap, fmt, sync::RwLock};

use miao_domain::{
    seed::{default_categories, default_ledgers, DEFAULT_LEDGER_ID},
    Category, Ledger, Transaction,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::CoreError;

/// String slots addressed by key. Implementations overwrite on `set`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// The four persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Transactions,
    Ledgers,
    Categories,
    ActiveLedger,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Transactions,
        StorageKey::Ledgers,
        StorageKey::Categories,
        StorageKey::ActiveLedger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Transactions => "miao_transactions",
            StorageKey::Ledgers => "miao_ledgers",
            StorageKey::Categories => "miao_categories",
            StorageKey::ActiveLedger => "miao_active_ledger",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-local store backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Loads and saves entity collections, one slot per collection.
///
/// Absent slots yield the built-in defaults. Slots holding malformed JSON are
/// logged and also fall back to defaults instead of failing the load.
pub struct ExpenseRepository {
    store: Box<dyn KeyValueStore>,
}

impl ExpenseRepository {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn load_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.load_collection(StorageKey::Transactions, Vec::new)
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        self.save_collection(StorageKey::Transactions, transactions)
    }

    pub fn load_ledgers(&self) -> Result<Vec<Ledger>, CoreError> {
        self.load_collection(StorageKey::Ledgers, default_ledgers)
    }

    pub fn save_ledgers(&self, ledgers: &[Ledger]) -> Result<(), CoreError> {
        self.save_collection(StorageKey::Ledgers, ledgers)
    }

    pub fn load_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.load_collection(StorageKey::Categories, default_categories)
    }

    pub fn save_categories(&self, categories: &[Category]) -> Result<(), CoreError> {
        self.save_collection(StorageKey::Categories, categories)
    }

    /// The active ledger id is stored as a bare string, not JSON.
    pub fn load_active_ledger_id(&self) -> Result<String, CoreError> {
        let stored = self.store.get(StorageKey::ActiveLedger.as_str())?;
        Ok(stored
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LEDGER_ID.to_string()))
    }

    pub fn save_active_ledger_id(&self, id: &str) -> Result<(), CoreError> {
        self.store.set(StorageKey::ActiveLedger.as_str(), id)
    }

    fn load_collection<T, F>(&self, key: StorageKey, default: F) -> Result<Vec<T>, CoreError>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let Some(raw) = self.store.get(key.as_str())? else {
            return Ok(default());
        };
        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "malformed stored data, using defaults");
                Ok(default())
            }
        }
    }

    fn save_collection<T: Serialize>(&self, key: StorageKey, items: &[T]) -> Result<(), CoreError> {
        let json = serde_json::to_string(items)?;
        self.store.set(key.as_str(), &json)?;
        tracing::debug!(key = %key, count = items.len(), "collection saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use miao_domain::TransactionType;

    fn sample_transaction() -> Transaction {
        Transaction {
            id: "t1".into(),
            amount: 12.5,
            kind: TransactionType::Expense,
            category_id: "c1".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            note: String::new(),
            ledger_id: "l1".into(),
            timestamp: 1,
        }
    }

    #[test]
    fn absent_slots_yield_defaults() {
        let repo = ExpenseRepository::in_memory();
        assert!(repo.load_transactions().unwrap().is_empty());
        assert_eq!(repo.load_ledgers().unwrap(), default_ledgers());
        assert_eq!(repo.load_categories().unwrap(), default_categories());
        assert_eq!(repo.load_active_ledger_id().unwrap(), DEFAULT_LEDGER_ID);
    }

    #[test]
    fn save_overwrites_whole_collection() {
        let repo = ExpenseRepository::in_memory();
        repo.save_transactions(&[sample_transaction()]).unwrap();
        assert_eq!(repo.load_transactions().unwrap().len(), 1);

        repo.save_transactions(&[]).unwrap();
        assert!(repo.load_transactions().unwrap().is_empty());
        assert_eq!(
            repo.store().get("miao_transactions").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn malformed_slots_fall_back_to_defaults() {
        let store = MemoryStore::new();
        store.set("miao_transactions", "{not json").unwrap();
        store.set("miao_ledgers", "42").unwrap();
        let repo = ExpenseRepository::new(Box::new(store));

        assert!(repo.load_transactions().unwrap().is_empty());
        assert_eq!(repo.load_ledgers().unwrap(), default_ledgers());
    }

    #[test]
    fn active_ledger_is_raw_string() {
        let repo = ExpenseRepository::in_memory();
        repo.save_active_ledger_id("l2").unwrap();
        assert_eq!(
            repo.store().get("miao_active_ledger").unwrap().as_deref(),
            Some("l2")
        );
        assert_eq!(repo.load_active_ledger_id().unwrap(), "l2");

        repo.save_active_ledger_id("   ").unwrap();
        assert_eq!(repo.load_active_ledger_id().unwrap(), DEFAULT_LEDGER_ID);
    }
}
