use std::sync::Arc;

use super::*;
use crate::state::session::MemoryTokenStorage;

fn context(storage: MemoryTokenStorage) -> AuthContext {
    AuthContext::new(SessionStore::new(Arc::new(storage)))
}

#[test]
fn signal_starts_from_restored_session() {
    let owner = Owner::new();
    owner.with(|| {
        assert!(context(MemoryTokenStorage::with_token("tok")).is_authenticated_untracked());
        assert!(!context(MemoryTokenStorage::default()).is_authenticated_untracked());
    });
}

#[test]
fn signal_follows_store_mutations() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = context(MemoryTokenStorage::default());
        auth.login(&LoginResponse { token: "tok".to_owned(), message: None });
        assert!(auth.is_authenticated_untracked());

        // A logout issued directly on the store (as the idle guard does) is mirrored.
        auth.store().logout();
        assert!(!auth.is_authenticated_untracked());
    });
}

#[test]
fn api_client_carries_session_token() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = context(MemoryTokenStorage::with_token("tok"));
        let api = auth.api(&ConsoleConfig::default());
        assert_eq!(api.bearer().as_deref(), Some("Bearer tok"));

        auth.logout();
        assert_eq!(auth.api(&ConsoleConfig::default()).bearer(), None);
    });
}
