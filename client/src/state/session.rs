//! Process-wide session store backed by durable token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the single source of truth for "is the admin signed in". It
//! is created once at app start from persisted storage, injected through
//! Leptos context, and mutated only by the login page, the sidebar logout,
//! and the idle guard's forced logout.
//!
//! INVARIANT
//! =========
//! `authenticated` is true iff a non-empty token is held, and the persisted
//! token always matches the in-memory one after a mutation returns.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::net::types::LoginResponse;

/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Durable home of the session token.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Storage that lives only as long as the process. Used for SSR and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStorage {
    /// Storage pre-seeded with a token, as if persisted by an earlier visit.
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }

    /// Raw persisted value, for assertions.
    pub fn persisted(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().clone()
    }

    fn store(&self, token: &str) {
        *self.slot.lock() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock() = None;
    }
}

/// Browser `localStorage` under [`TOKEN_STORAGE_KEY`].
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStorage;

#[cfg(feature = "hydrate")]
impl BrowserTokenStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl TokenStorage for BrowserTokenStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }

    fn store(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Token storage appropriate for the current build target.
pub fn default_token_storage() -> Arc<dyn TokenStorage> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserTokenStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryTokenStorage::default())
    }
}

/// Snapshot of the client-held session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub token: Option<String>,
}

impl Session {
    /// Session implied by a persisted token. Empty tokens do not authenticate.
    pub fn from_token(token: Option<String>) -> Self {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => Self { authenticated: true, token: Some(token) },
            None => Self::default(),
        }
    }
}

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Shared handle to the session. Clones observe the same state.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    state: Arc<Mutex<Session>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Restore the session from persisted storage.
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        let session = Session::from_token(storage.load());
        if !session.authenticated {
            // Drop blank leftovers so storage and state agree.
            storage.clear();
        }
        Self {
            storage,
            state: Arc::new(Mutex::new(session)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record a successful authentication. Callers validate the response first.
    pub fn login(&self, response: &LoginResponse) {
        let next = Session::from_token(Some(response.token.clone()));
        let Some(token) = next.token.as_deref() else {
            log::warn!("login response carried an empty token; session left signed out");
            return;
        };
        self.storage.store(token);
        self.replace(next);
        log::info!("admin session started");
    }

    /// End the session. Calling it while signed out changes nothing.
    pub fn logout(&self) {
        self.storage.clear();
        if self.replace(Session::default()) {
            log::info!("admin session ended");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.lock().authenticated
    }

    /// Bearer token for backend requests.
    pub fn token(&self) -> Option<String> {
        self.state.lock().token.clone()
    }

    pub fn snapshot(&self) -> Session {
        self.state.lock().clone()
    }

    /// Be told about every change to the session.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.listeners.lock().push(Arc::new(listener));
    }

    /// Swap in `next`, notifying listeners if anything changed.
    fn replace(&self, next: Session) -> bool {
        {
            let mut state = self.state.lock();
            if *state == next {
                return false;
            }
            *state = next.clone();
        }
        // Listeners may read the store again, so the state lock is released first.
        let listeners = self.listeners.lock().clone();
        for listener in &listeners {
            listener(&next);
        }
        true
    }
}
