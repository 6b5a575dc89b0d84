use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn login_response(token: &str) -> LoginResponse {
    LoginResponse { token: token.to_owned(), message: None }
}

fn store_with(storage: &MemoryTokenStorage) -> SessionStore {
    SessionStore::new(Arc::new(storage.clone()))
}

// =============================================================
// Restore
// =============================================================

#[test]
fn new_store_without_token_is_signed_out() {
    let store = store_with(&MemoryTokenStorage::default());
    assert!(!store.is_authenticated());
    assert_eq!(store.snapshot(), Session::default());
}

#[test]
fn new_store_restores_persisted_token() {
    let store = store_with(&MemoryTokenStorage::with_token("persisted"));
    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("persisted"));
}

#[test]
fn empty_persisted_token_does_not_authenticate_and_is_cleared() {
    let storage = MemoryTokenStorage::with_token("");
    let store = store_with(&storage);
    assert!(!store.is_authenticated());
    assert_eq!(storage.persisted(), None);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_persists_token_and_authenticates() {
    let storage = MemoryTokenStorage::default();
    let store = store_with(&storage);
    store.login(&login_response("tok-1"));
    assert!(store.is_authenticated());
    assert_eq!(storage.persisted().as_deref(), Some("tok-1"));
    assert_eq!(store.token().as_deref(), Some("tok-1"));
}

#[test]
fn login_with_empty_token_stays_signed_out() {
    let storage = MemoryTokenStorage::default();
    let store = store_with(&storage);
    store.login(&login_response(""));
    assert!(!store.is_authenticated());
    assert_eq!(storage.persisted(), None);
}

#[test]
fn login_keeps_any_non_empty_token_verbatim() {
    let storage = MemoryTokenStorage::default();
    let store = store_with(&storage);
    store.login(&login_response(" "));
    assert!(store.is_authenticated());
    assert_eq!(storage.persisted().as_deref(), Some(" "));
}

#[test]
fn logout_clears_storage_and_state() {
    let storage = MemoryTokenStorage::with_token("tok-1");
    let store = store_with(&storage);
    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(store.token(), None);
    assert_eq!(storage.persisted(), None);
}

#[test]
fn logout_twice_matches_logout_once() {
    let storage = MemoryTokenStorage::with_token("tok-1");
    let store = store_with(&storage);
    store.logout();
    let once = (store.snapshot(), storage.persisted());
    store.logout();
    assert_eq!((store.snapshot(), storage.persisted()), once);
}

#[test]
fn clones_share_state() {
    let store = store_with(&MemoryTokenStorage::default());
    let other = store.clone();
    store.login(&login_response("tok-1"));
    assert!(other.is_authenticated());
    other.logout();
    assert!(!store.is_authenticated());
}

// =============================================================
// Listeners
// =============================================================

#[test]
fn listeners_fire_only_on_change() {
    let store = store_with(&MemoryTokenStorage::default());
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    store.logout();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    store.login(&login_response("tok-1"));
    store.login(&login_response("tok-1"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    store.logout();
    store.logout();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn listener_may_read_store_reentrantly() {
    let store = store_with(&MemoryTokenStorage::default());
    let observed = Arc::new(Mutex::new(Vec::new()));
    let reader = store.clone();
    let sink = Arc::clone(&observed);
    store.subscribe(move |session| {
        sink.lock().push((session.authenticated, reader.is_authenticated()));
    });

    store.login(&login_response("tok-1"));
    store.logout();
    assert_eq!(*observed.lock(), vec![(true, true), (false, false)]);
}
