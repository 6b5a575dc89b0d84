//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected views and the login view apply identical redirect behavior, and
//! every page builds its REST client from the same session and config.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::ConsoleConfig;
use crate::guard::{RouteDecision, login_route_for, route_for};
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::auth::AuthContext;
use crate::state::session::Session;

fn session_of(auth: &AuthContext) -> Session {
    // Track the signal so the effect re-runs on login/logout.
    let _ = auth.is_authenticated();
    auth.store().snapshot()
}

fn follow<F>(decision: RouteDecision, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if let RouteDecision::Redirect(path) = decision {
        navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// Redirect to the login view whenever the session goes away.
pub fn install_unauth_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || follow(route_for(&session_of(&auth)), &navigate));
}

/// Send signed-in admins from the login view to the dashboard.
pub fn install_login_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || follow(login_route_for(&session_of(&auth)), &navigate));
}

/// Session-aware REST access captured from context.
///
/// Captured once in a component body; event handlers and spawned tasks run
/// outside the reactive owner and cannot look up context themselves.
#[derive(Clone, Debug)]
pub struct Backend {
    auth: AuthContext,
    config: ConsoleConfig,
}

impl Backend {
    pub fn new(auth: AuthContext, config: ConsoleConfig) -> Self {
        Self { auth, config }
    }

    /// Client carrying the token held right now.
    pub fn client(&self) -> ApiClient {
        self.auth.api(&self.config)
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// Text for a failed request. A rejected token also ends the session so
    /// the route guard sends the admin back to the login view.
    pub fn failure(&self, context: &str, err: &ApiError) -> String {
        log::warn!("{context}: {err}");
        if err.is_unauthorized() {
            self.auth.logout();
        }
        format!("{context}: {err}")
    }
}

pub fn use_backend() -> Backend {
    Backend::new(expect_context::<AuthContext>(), expect_context::<ConsoleConfig>())
}
