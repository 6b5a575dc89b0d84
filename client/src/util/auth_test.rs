use std::sync::Arc;

use super::*;
use crate::state::session::{MemoryTokenStorage, SessionStore};

fn signed_in() -> Backend {
    let auth = AuthContext::new(SessionStore::new(Arc::new(MemoryTokenStorage::with_token("tok"))));
    Backend::new(auth, ConsoleConfig::default())
}

#[test]
fn failure_logs_out_on_rejected_token() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = signed_in();
        let err = ApiError::Status { status: 401, message: "jwt expired".to_owned() };
        assert_eq!(backend.failure("Failed to load users", &err), "Failed to load users: jwt expired");
        assert!(!backend.auth().is_authenticated_untracked());
    });
}

#[test]
fn failure_keeps_session_on_other_errors() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = signed_in();
        let err = ApiError::Status { status: 500, message: "boom".to_owned() };
        backend.failure("Failed to delete ad", &err);
        assert!(backend.auth().is_authenticated_untracked());
    });
}

#[test]
fn client_tracks_current_session_token() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = signed_in();
        assert_eq!(backend.client().bearer().as_deref(), Some("Bearer tok"));
        backend.auth().logout();
        assert_eq!(backend.client().bearer(), None);
    });
}

#[test]
fn use_backend_reads_context() {
    let owner = Owner::new();
    owner.with(|| {
        let backend = signed_in();
        provide_context(backend.auth().clone());
        provide_context(ConsoleConfig::default());
        let from_context = use_backend();
        assert!(from_context.client().endpoint("/auth/getUsers").ends_with("/auth/getUsers"));
    });
}
