use chrono::{NaiveDate, TimeZone, Utc};
use miao_core::{
    storage::{ExpenseRepository, KeyValueStore},
    LedgerSession,
};
use miao_domain::{TransactionDraft, TransactionType};
use miao_storage_json::JsonFileStore;
use std::fs;
use tempfile::tempdir;

#[test]
fn json_store_round_trips_raw_values() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data")).expect("create store");

    assert_eq!(store.get("miao_active_ledger").expect("get"), None);
    store.set("miao_active_ledger", "l2").expect("set");
    assert_eq!(
        store.get("miao_active_ledger").expect("get").as_deref(),
        Some("l2")
    );

    let path = store.path_for("miao_active_ledger");
    assert!(path.exists());
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    assert!(!path.with_extension("json.tmp").exists());

    store.remove("miao_active_ledger").expect("remove");
    assert_eq!(store.get("miao_active_ledger").expect("get"), None);
    store.remove("miao_active_ledger").expect("remove twice");
}

#[test]
fn json_store_lists_written_keys() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path()).expect("create store");
    store.set("miao_ledgers", "[]").expect("set ledgers");
    store.set("miao_categories", "[]").expect("set categories");
    fs::write(dir.path().join("notes.txt"), "ignored").expect("write stray file");

    let keys = store.list_keys().expect("list keys");
    assert_eq!(keys, vec!["miao_categories", "miao_ledgers"]);
}

#[test]
fn session_state_survives_restart() {
    let dir = tempdir().expect("tempdir");
    let today = NaiveDate::from_ymd_opt(2024, 3, 20).expect("date");
    let created = Utc.with_ymd_and_hms(2024, 3, 20, 8, 30, 0).unwrap();

    let added_id = {
        let store = JsonFileStore::new(dir.path()).expect("create store");
        let mut session =
            LedgerSession::open(ExpenseRepository::new(Box::new(store)), today).expect("open");
        session.switch_ledger("l2").expect("switch");
        let draft = TransactionDraft::new(
            TransactionType::Expense,
            320.0,
            "c2",
            NaiveDate::from_ymd_opt(2024, 3, 18).expect("date"),
        )
        .with_note("train tickets");
        session.add_transaction(draft, created).expect("add").id
    };

    let store = JsonFileStore::new(dir.path()).expect("reopen store");
    let session =
        LedgerSession::open(ExpenseRepository::new(Box::new(store)), today).expect("reopen");

    assert_eq!(session.active_ledger_id(), "l2");
    let report = session.report();
    assert_eq!(report.transactions.len(), 1);
    assert_eq!(report.transactions[0].id, added_id);
    assert_eq!(report.transactions[0].note, "train tickets");
    assert_eq!(report.transactions[0].timestamp, created.timestamp_millis());
    assert_eq!(report.totals.expense, 320.0);
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path()).expect("create store");
    fs::write(store.path_for("miao_categories"), "[{\"id\":").expect("corrupt file");

    let repository = ExpenseRepository::new(Box::new(store));
    let categories = repository.load_categories().expect("load categories");
    assert_eq!(categories.len(), 12);
    assert_eq!(categories[0].id, "c1");
}
