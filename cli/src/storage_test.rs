use booking::{Id, Identity, SESSION_STORAGE_KEY, SessionStore};

use super::*;

fn storage_in(dir: &tempfile::TempDir) -> FileStorage {
    FileStorage::new(dir.path().join("session.json"))
}

fn identity() -> Identity {
    Identity { id: Id::Int(5), name: "Ada".to_owned(), token: "jwt".to_owned(), email: None }
}

// =============================================================
// FileStorage
// =============================================================

#[test]
fn missing_file_reads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(storage_in(&dir).read("movieUser"), None);
}

#[test]
fn write_then_read_round_trips_and_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage.write("a", "1").unwrap();
    storage.write("b", "2").unwrap();
    assert_eq!(storage.read("a").as_deref(), Some("1"));
    assert_eq!(storage.read("b").as_deref(), Some("2"));
}

#[test]
fn removing_last_key_deletes_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage.write("a", "1").unwrap();
    storage.remove("a").unwrap();
    assert!(!storage.path().exists());
    storage.remove("a").unwrap();
}

#[test]
fn corrupt_file_reads_as_absent_and_is_replaced_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    std::fs::write(storage.path(), "not json").unwrap();
    assert_eq!(storage.read("a"), None);
    storage.write("a", "1").unwrap();
    assert_eq!(storage.read("a").as_deref(), Some("1"));
}

// =============================================================
// SessionStore over FileStorage
// =============================================================

#[test]
fn session_survives_reload_and_clear_removes_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = SessionStore::load(storage_in(&dir));
    assert!(!session.is_authenticated());
    session.save(identity());

    let reloaded = SessionStore::load(storage_in(&dir));
    assert_eq!(reloaded.current(), Some(&identity()));
    assert!(storage_in(&dir).read(SESSION_STORAGE_KEY).is_some());

    let mut reloaded = reloaded;
    reloaded.clear();
    assert!(!SessionStore::load(storage_in(&dir)).is_authenticated());
}
