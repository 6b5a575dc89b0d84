//! Auth context shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the [`SessionStore`] for Leptos: the store stays the source of truth
//! while a signal mirrors its `authenticated` flag so route guards and the
//! login page re-render when the session changes, including when the idle
//! guard logs out behind their back.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::SessionStore;
use crate::config::ConsoleConfig;
use crate::net::api::ApiClient;
use crate::net::types::LoginResponse;

#[derive(Clone, Debug)]
pub struct AuthContext {
    store: SessionStore,
    authenticated: RwSignal<bool>,
}

impl AuthContext {
    pub fn new(store: SessionStore) -> Self {
        let authenticated = RwSignal::new(store.is_authenticated());
        store.subscribe(move |session| {
            let _ = authenticated.try_set(session.authenticated);
        });
        Self { store, authenticated }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Reactive read: re-runs the calling effect or view on change.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn is_authenticated_untracked(&self) -> bool {
        self.authenticated.get_untracked()
    }

    pub fn login(&self, response: &LoginResponse) {
        self.store.login(response);
    }

    pub fn logout(&self) {
        self.store.logout();
    }

    /// REST client carrying the current session token.
    pub fn api(&self, config: &ConsoleConfig) -> ApiClient {
        ApiClient::from_config(config, self.store.token())
    }
}
