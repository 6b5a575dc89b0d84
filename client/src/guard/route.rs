//! Render-or-redirect decision for protected views.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::state::session::Session;

/// Entry view unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/";
/// Landing view after a successful login.
pub const HOME_PATH: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Show the protected content.
    Render,
    /// Navigate away before anything protected runs.
    Redirect(&'static str),
}

/// Where a protected view should go for the given session.
pub fn route_for(session: &Session) -> RouteDecision {
    if session.authenticated { RouteDecision::Render } else { RouteDecision::Redirect(LOGIN_PATH) }
}

/// Where the login view should go: signed-in admins skip straight to the dashboard.
pub fn login_route_for(session: &Session) -> RouteDecision {
    if session.authenticated { RouteDecision::Redirect(HOME_PATH) } else { RouteDecision::Render }
}
