//! Integration tests for the file-backed account store.
//!
//! Verifies that mutations written through [`FileStorage`] survive a
//! process restart (a fresh store over the same directory) and that a
//! corrupted file degrades to the seed set instead of failing.

use accbook_core::AccountPatch;
use accbook_store::{AccountStore, FileStorage, STORAGE_KEY};

#[test]
fn mutations_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();

    let added_id = {
        let mut store = AccountStore::new(FileStorage::new(dir.path()));
        let added = store.add_account();
        store.update_account(
            &added.id,
            AccountPatch {
                login: Some("restored".into()),
                ..Default::default()
            },
        );
        store.remove_account("1");
        added.id
    };

    let reopened = AccountStore::new(FileStorage::new(dir.path()));
    // Seed minus the removed record, plus the added one.
    assert_eq!(reopened.accounts().len(), 5);
    assert!(reopened.accounts().iter().all(|a| a.id != "1"));
    let added = reopened
        .accounts()
        .iter()
        .find(|a| a.id == added_id)
        .expect("added account should be persisted");
    assert_eq!(added.login, "restored");
}

#[test]
fn corrupted_file_degrades_to_seed_data() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{STORAGE_KEY}.json")), "not json").unwrap();

    let store = AccountStore::new(FileStorage::new(dir.path()));
    assert_eq!(store.accounts().len(), 5);
    assert_eq!(store.accounts()[0].id, "1");
}

#[test]
fn persisted_file_is_a_json_array_of_records() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = AccountStore::new(FileStorage::new(dir.path()));
    store.add_account();

    let raw = std::fs::read_to_string(dir.path().join(format!("{STORAGE_KEY}.json"))).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = parsed.as_array().expect("payload should be an array");
    assert_eq!(array.len(), 6);
    assert_eq!(array[0]["type"], "local");
    assert_eq!(array[3]["password"], serde_json::Value::Null);
}
