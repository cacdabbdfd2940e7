use super::*;
use crate::model::Role;
use crate::storage::{MemoryStore, SNAPSHOT_KEY, StorageError, TOKEN_KEY};

fn user(role: Role) -> User {
    User {
        id: "u-7".to_owned(),
        full_name: "Linus".to_owned(),
        email: "linus@example.com".to_owned(),
        role,
    }
}

/// Backend whose reads and writes always fail.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn fresh_login_persists_token() {
    let backend = MemoryStore::new();
    let mut store = SessionStore::new(backend.clone());
    store.rehydrate();
    store.login(user(Role::User), "abc".to_owned());

    assert!(store.session().is_authenticated());
    assert_eq!(backend.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
    assert!(backend.get(SNAPSHOT_KEY).unwrap().is_some());
}

#[test]
fn logout_removes_token_key() {
    let backend = MemoryStore::new();
    let mut store = SessionStore::new(backend.clone());
    store.rehydrate();
    store.login(user(Role::User), "abc".to_owned());
    store.logout();

    let session = store.session();
    assert_eq!(session.user(), None);
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
    assert_eq!(backend.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn session_survives_restart() {
    let backend = MemoryStore::new();
    let mut first = SessionStore::new(backend.clone());
    first.rehydrate();
    first.login(user(Role::Admin), "tok".to_owned());

    let mut second = SessionStore::new(backend);
    assert!(!second.session().has_hydrated());
    second.rehydrate();
    assert!(second.session().has_hydrated());
    assert!(second.session().is_authenticated());
    assert!(!second.session().is_verified());
    assert_eq!(second.session().user().map(|u| u.role), Some(Role::Admin));
}

#[test]
fn rehydrate_twice_yields_same_session() {
    let backend = MemoryStore::new();
    let mut seed = SessionStore::new(backend.clone());
    seed.rehydrate();
    seed.login(user(Role::User), "tok".to_owned());

    let mut store = SessionStore::new(backend);
    store.rehydrate();
    let first = store.session().clone();
    store.rehydrate();
    assert_eq!(&first, store.session());
}

#[test]
fn corrupt_snapshot_degrades_to_signed_out() {
    let backend = MemoryStore::with_entries([(SNAPSHOT_KEY, "garbage"), (TOKEN_KEY, "stale")]);
    let mut store = SessionStore::new(backend.clone());
    store.rehydrate();

    assert!(store.session().has_hydrated());
    assert!(!store.session().is_authenticated());
    assert_eq!(backend.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn stale_token_without_snapshot_is_removed() {
    let backend = MemoryStore::with_entries([(TOKEN_KEY, "stale")]);
    let mut store = SessionStore::new(backend.clone());
    store.rehydrate();
    assert_eq!(backend.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn unreadable_storage_still_hydrates() {
    let mut store = SessionStore::new(BrokenStore);
    store.rehydrate();
    assert!(store.session().has_hydrated());
    assert!(!store.session().is_authenticated());

    // Writes fail too, but the in-memory transition still happens.
    store.login(user(Role::User), "abc".to_owned());
    assert!(store.session().is_authenticated());
}

#[test]
fn set_user_refreshes_profile_in_snapshot() {
    let backend = MemoryStore::new();
    let mut store = SessionStore::new(backend.clone());
    store.rehydrate();
    store.login(user(Role::User), "abc".to_owned());
    let mut renamed = user(Role::User);
    renamed.full_name = "Linus T".to_owned();
    store.set_user(renamed);

    let mut restarted = SessionStore::new(backend);
    restarted.rehydrate();
    assert_eq!(restarted.session().user().map(|u| u.full_name.as_str()), Some("Linus T"));
}
