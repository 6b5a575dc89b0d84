//! Access control for protected views.
//!
//! DESIGN
//! ======
//! `route` is the pure render/redirect decision, `scheduler` abstracts the
//! one-shot timer, and `idle` combines both with the session store into the
//! sliding-window inactivity logout.

pub mod idle;
pub mod route;
pub mod scheduler;

pub use idle::{Activity, DEFAULT_IDLE_TIMEOUT, GuardState, IdleGuard, idle_logout_notice};
pub use route::{HOME_PATH, LOGIN_PATH, RouteDecision, login_route_for, route_for};
pub use scheduler::{ManualScheduler, ManualTimer, Scheduler};

#[cfg(feature = "hydrate")]
pub use scheduler::BrowserScheduler;
