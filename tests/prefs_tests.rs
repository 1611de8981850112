use std::env;
use std::fs;
use std::path::PathBuf;

use logscope::prefs::{PreferenceStore, StoredFlag, keys};

/// Unique prefs file inside the system temp dir, removed up front
fn temp_prefs(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_logscope_prefs.json"));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn missing_key_reads_the_default() {
    let store = PreferenceStore::in_memory();
    assert!(store.read_bool(keys::LOGS_OVERRIDE_TIME, true));
    assert!(!store.read_bool(keys::LOGS_OVERRIDE_TIME, false));
}

#[test]
fn stored_text_is_compared_against_literal_true() {
    let store = PreferenceStore::in_memory();
    store.set_bool("flag", true);
    assert_eq!(store.get("flag").as_deref(), Some("true"));
    assert!(store.read_bool("flag", false));

    store.set_bool("flag", false);
    assert_eq!(store.get("flag").as_deref(), Some("false"));
    assert!(!store.read_bool("flag", true));

    // Anything that is not the literal "true" reads as false.
    store.set("flag", "yes");
    assert!(!store.read_bool("flag", true));
}

#[test]
fn flag_starts_synced_with_the_store() {
    let store = PreferenceStore::in_memory();
    let flag = StoredFlag::new(store.clone(), keys::LOGS_OVERRIDE_TIME, true);
    assert!(flag.value());

    store.set_bool(keys::LOGS_OVERRIDE_TIME, false);
    let flag2 = StoredFlag::new(store, keys::LOGS_OVERRIDE_TIME, true);
    assert!(!flag2.value());
}

#[test]
fn external_write_lands_through_the_notification_path() {
    let store = PreferenceStore::in_memory();
    let mut flag = StoredFlag::new(store.clone(), keys::LOGS_OVERRIDE_TIME, true);

    // Another handle of the same store writes the flag.
    let other = store.clone();
    other.set_bool(keys::LOGS_OVERRIDE_TIME, false);

    assert!(flag.value(), "held value updates only on notification");
    assert!(flag.sync());
    assert!(!flag.value());
}

#[test]
fn local_set_updates_only_via_notification() {
    let store = PreferenceStore::in_memory();
    let mut flag = StoredFlag::new(store, "flag", true);

    flag.set(false);
    assert!(flag.value(), "set writes the store, not the held value");
    assert!(flag.sync());
    assert!(!flag.value());
}

#[test]
fn unchanged_re_read_is_a_no_op() {
    let store = PreferenceStore::in_memory();
    let mut flag = StoredFlag::new(store.clone(), "flag", true);

    store.set_bool("flag", true);
    assert!(!flag.sync(), "same value must not report a change");
    assert!(flag.value());
}

#[test]
fn sync_ignores_writes_to_other_keys() {
    let store = PreferenceStore::in_memory();
    let mut flag = StoredFlag::new(store.clone(), "flag", true);

    store.set_bool("unrelated", false);
    assert!(!flag.sync());
    assert!(flag.value());
}

#[tokio::test]
async fn changed_waits_for_a_write_of_the_bound_key() {
    let store = PreferenceStore::in_memory();
    let mut flag = StoredFlag::new(store.clone(), "flag", true);

    let writer = tokio::spawn(async move {
        store.set_bool("unrelated", true);
        store.set_bool("flag", false);
    });

    assert!(flag.changed().await);
    assert!(!flag.value());
    writer.await.expect("writer task");
}

#[test]
fn custom_reader_replaces_the_default_getter() {
    let store = PreferenceStore::in_memory();
    store.set("flag", "enabled");

    // Treat any non-empty stored text as true, like a truthy getter.
    let mut flag = StoredFlag::with_reader(store.clone(), "flag", false, |store, key| {
        store.get(key).is_some_and(|v| !v.is_empty())
    });
    assert!(flag.value());

    store.set("flag", "");
    assert!(flag.sync());
    assert!(!flag.value());
}

#[test]
fn file_backed_store_survives_reopen() {
    let path = temp_prefs("reopen");

    let store = PreferenceStore::open(&path);
    store.set_bool(keys::LOGS_OVERRIDE_TIME, false);
    drop(store);

    let reopened = PreferenceStore::open(&path);
    assert!(!reopened.read_bool(keys::LOGS_OVERRIDE_TIME, true));
    fs::remove_file(&path).ok();
}

#[test]
fn corrupt_prefs_file_degrades_to_defaults() {
    let path = temp_prefs("corrupt");
    fs::write(&path, "{ not json").expect("write corrupt file");

    let store = PreferenceStore::open(&path);
    assert!(store.read_bool(keys::LOGS_OVERRIDE_TIME, true));
    fs::remove_file(&path).ok();
}
