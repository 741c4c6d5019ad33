use super::*;
use crate::types::Id;

fn ada() -> Identity {
    Identity { id: Id::Int(1), name: "Ada".to_owned(), token: "tok-1".to_owned(), email: None }
}

/// Storage whose writes always fail, to exercise the degraded path.
#[derive(Clone, Default)]
struct BrokenStorage;

impl IdentityStorage for BrokenStorage {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError("quota exceeded".to_owned()))
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_from_empty_storage_has_no_identity() {
    let session = SessionStore::load(MemoryStorage::default());
    assert!(session.current().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn load_ignores_malformed_record() {
    let storage = MemoryStorage::default();
    storage.write(SESSION_STORAGE_KEY, "{not json").unwrap();
    let session = SessionStore::load(storage);
    assert!(session.current().is_none());
}

// =============================================================
// save / clear lifecycle
// =============================================================

#[test]
fn save_survives_reload() {
    let storage = MemoryStorage::default();
    let mut session = SessionStore::load(storage.clone());
    session.save(ada());

    let reloaded = SessionStore::load(storage);
    assert_eq!(reloaded.current(), Some(&ada()));
}

#[test]
fn save_replaces_previous_identity() {
    let mut session = SessionStore::load(MemoryStorage::default());
    session.save(ada());
    let bo = Identity { id: Id::Int(2), name: "Bo".to_owned(), token: "tok-2".to_owned(), email: None };
    session.save(bo.clone());

    assert_eq!(session.current(), Some(&bo));
    let stored = session.storage().read(SESSION_STORAGE_KEY).unwrap();
    assert_eq!(serde_json::from_str::<Identity>(&stored).unwrap(), bo);
}

#[test]
fn clear_removes_from_memory_and_storage() {
    let storage = MemoryStorage::default();
    let mut session = SessionStore::load(storage.clone());
    session.save(ada());
    session.clear();

    assert!(session.current().is_none());
    assert_eq!(storage.read(SESSION_STORAGE_KEY), None);
    assert!(SessionStore::load(storage).current().is_none());
}

#[test]
fn storage_failure_keeps_in_memory_identity() {
    let mut session = SessionStore::load(BrokenStorage);
    session.save(ada());
    assert_eq!(session.current(), Some(&ada()));

    session.clear();
    assert!(session.current().is_none());
}
