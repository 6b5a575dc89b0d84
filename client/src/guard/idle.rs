//! Inactivity guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route mounts one guard. The guard decides render vs
//! redirect from the session, and while rendering keeps a sliding inactivity
//! timer: each pointer move or key press pushes expiry out by the full
//! window. On expiry the session is logged out and a one-time notice is
//! raised.
//!
//! INVARIANTS
//! ==========
//! - At most one timer is pending per guard; re-arming cancels first.
//! - After `unmount` no callback can log the session out, even if the
//!   scheduler fails to drop the timer (mounted flag + generation check).

#[cfg(test)]
#[path = "idle_test.rs"]
mod idle_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::route::{RouteDecision, route_for};
use super::scheduler::Scheduler;
use crate::state::session::SessionStore;

/// Inactivity window used when nothing else is configured.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Observable guard state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// No session: protected content is not shown.
    Unauthenticated,
    /// Session present and the inactivity timer is running.
    Active,
}

/// User input that counts as activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    PointerMove,
    KeyPress,
}

/// Sliding-window idle logout bound to one mounted protected view.
pub struct IdleGuard<S: Scheduler> {
    inner: Rc<GuardInner<S>>,
}

impl<S: Scheduler> Clone for IdleGuard<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

struct GuardInner<S: Scheduler> {
    scheduler: S,
    session: SessionStore,
    timeout: Duration,
    on_expire: Box<dyn Fn(&str)>,
    /// Last scheduled timer. May refer to one that already fired.
    timer: RefCell<Option<S::Handle>>,
    /// True from arm until fire/cancel.
    pending: Cell<bool>,
    mounted: Cell<bool>,
    /// Bumped on every arm and unmount; a firing timer only acts if it still matches.
    generation: Cell<u64>,
}

impl<S> IdleGuard<S>
where
    S: Scheduler + 'static,
    S::Handle: 'static,
{
    /// `on_expire` receives the user-facing notice after a forced logout.
    pub fn new<F>(scheduler: S, session: SessionStore, timeout: Duration, on_expire: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        Self {
            inner: Rc::new(GuardInner {
                scheduler,
                session,
                timeout,
                on_expire: Box::new(on_expire),
                timer: RefCell::new(None),
                pending: Cell::new(false),
                mounted: Cell::new(false),
                generation: Cell::new(0),
            }),
        }
    }

    /// Decide render vs redirect and, when rendering, start the inactivity timer.
    ///
    /// Mounting again restarts the window.
    pub fn mount(&self) -> RouteDecision {
        let decision = route_for(&self.inner.session.snapshot());
        match decision {
            RouteDecision::Render => {
                self.inner.mounted.set(true);
                self.arm();
            }
            RouteDecision::Redirect(_) => {
                self.inner.mounted.set(false);
                self.disarm();
            }
        }
        decision
    }

    /// Restart the inactivity window from now.
    pub fn record_activity(&self, activity: Activity) {
        if !self.inner.mounted.get() || !self.inner.session.is_authenticated() {
            return;
        }
        log::trace!("idle timer reset by {activity:?}");
        self.arm();
    }

    /// Cancel the timer and stop reacting to activity.
    pub fn unmount(&self) {
        self.inner.mounted.set(false);
        self.disarm();
    }

    pub fn state(&self) -> GuardState {
        if self.inner.mounted.get() && self.inner.session.is_authenticated() {
            GuardState::Active
        } else {
            GuardState::Unauthenticated
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    /// Whether an inactivity timer is waiting to fire.
    pub fn has_pending_timer(&self) -> bool {
        self.inner.pending.get()
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    fn arm(&self) {
        self.disarm();
        let generation = self.inner.generation.get();
        let weak: Weak<GuardInner<S>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule(
            self.inner.timeout,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.expire(generation);
                }
            }),
        );
        *self.inner.timer.borrow_mut() = Some(handle);
        self.inner.pending.set(true);
    }

    fn disarm(&self) {
        self.inner.generation.set(self.inner.generation.get().wrapping_add(1));
        self.inner.pending.set(false);
        let previous = self.inner.timer.borrow_mut().take();
        if let Some(handle) = previous {
            self.inner.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> GuardInner<S> {
    fn expire(&self, generation: u64) {
        if !self.mounted.get() || generation != self.generation.get() {
            return;
        }
        // The fired handle stays in `timer` until the next arm/unmount so it is
        // not dropped from inside its own callback.
        self.pending.set(false);
        self.mounted.set(false);
        if !self.session.is_authenticated() {
            return;
        }
        log::info!("idle timeout after {:?}; forcing logout", self.timeout);
        self.session.logout();
        (self.on_expire)(&idle_logout_notice(self.timeout));
    }
}

/// User-facing notice shown after a forced logout.
pub fn idle_logout_notice(timeout: Duration) -> String {
    format!("Logged out due to {} of inactivity.", describe_duration(timeout))
}

fn describe_duration(timeout: Duration) -> String {
    // Partial seconds round up so a live window never reads as zero.
    let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
    let (amount, unit) = if secs >= 3600 && secs % 3600 == 0 {
        (secs / 3600, "hour")
    } else if secs >= 60 && secs % 60 == 0 {
        (secs / 60, "minute")
    } else {
        (secs, "second")
    };
    if amount == 1 { format!("1 {unit}") } else { format!("{amount} {unit}s") }
}
