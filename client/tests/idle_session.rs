//! End-to-end session lifecycle through the public guard and store APIs:
//! sign in, stay active, go idle, get logged out, sign back in.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use admin_client::config::ConsoleConfig;
use admin_client::guard::{Activity, GuardState, IdleGuard, LOGIN_PATH, ManualScheduler, RouteDecision, idle_logout_notice};
use admin_client::net::types::LoginResponse;
use admin_client::state::session::{MemoryTokenStorage, SessionStore};

const WINDOW: Duration = Duration::from_secs(300);

struct Console {
    clock: ManualScheduler,
    storage: MemoryTokenStorage,
    session: SessionStore,
    notices: Rc<RefCell<Vec<String>>>,
    logouts: Arc<AtomicUsize>,
}

impl Console {
    fn new() -> Self {
        let storage = MemoryTokenStorage::default();
        let session = SessionStore::new(Arc::new(storage.clone()));
        let logouts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&logouts);
        session.subscribe(move |s| {
            if !s.authenticated {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        Self { clock: ManualScheduler::new(), storage, session, notices: Rc::default(), logouts }
    }

    fn sign_in(&self, token: &str) {
        self.session.login(&LoginResponse { token: token.to_owned(), message: None });
    }

    fn guard(&self, window: Duration) -> IdleGuard<ManualScheduler> {
        let sink = Rc::clone(&self.notices);
        IdleGuard::new(self.clock.clone(), self.session.clone(), window, move |notice: &str| {
            sink.borrow_mut().push(notice.to_owned());
        })
    }

    fn logouts(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

// =============================================================================
// Timeline scenarios
// =============================================================================

#[test]
fn activity_at_250s_moves_expiry_to_550s() {
    let console = Console::new();
    console.sign_in("tok-1");
    let guard = console.guard(WINDOW);
    assert_eq!(guard.mount(), RouteDecision::Render);

    console.clock.advance_to(secs(250));
    guard.record_activity(Activity::PointerMove);

    console.clock.advance_to(secs(300));
    assert!(console.session.is_authenticated());
    assert_eq!(console.logouts(), 0);

    console.clock.advance_to(secs(549));
    assert!(console.session.is_authenticated());

    console.clock.advance_to(secs(550));
    assert!(!console.session.is_authenticated());
    assert_eq!(console.logouts(), 1);
}

#[test]
fn idle_session_is_logged_out_at_the_window() {
    let console = Console::new();
    console.sign_in("tok-1");
    let guard = console.guard(WINDOW);
    guard.mount();

    console.clock.advance_to(secs(299));
    assert_eq!(guard.state(), GuardState::Active);

    console.clock.advance_to(secs(300));
    assert!(!console.session.is_authenticated());
    assert_eq!(console.storage.persisted(), None);
    assert_eq!(guard.state(), GuardState::Unauthenticated);
    assert_eq!(*console.notices.borrow(), vec![idle_logout_notice(WINDOW)]);

    console.clock.advance(secs(3_000));
    assert_eq!(console.logouts(), 1, "expiry fires exactly once");
}

#[test]
fn steady_activity_keeps_the_session_alive() {
    let console = Console::new();
    console.sign_in("tok-1");
    let guard = console.guard(WINDOW);
    guard.mount();

    for step in 1..=50u64 {
        console.clock.advance(secs(299));
        let activity = if step % 2 == 0 {
            Activity::KeyPress
        } else {
            Activity::PointerMove
        };
        guard.record_activity(activity);
        assert!(console.session.is_authenticated(), "logged out at step {step}");
    }
    assert_eq!(console.clock.pending(), 1);
    assert_eq!(console.logouts(), 0);
}

// =============================================================================
// Mount / unmount
// =============================================================================

#[test]
fn signed_out_mount_redirects_before_anything_is_scheduled() {
    let console = Console::new();
    let guard = console.guard(WINDOW);

    assert_eq!(guard.mount(), RouteDecision::Redirect(LOGIN_PATH));
    assert_eq!(console.clock.pending(), 0);
    assert!(!guard.has_pending_timer());
}

#[test]
fn navigating_away_leaves_no_timer_behind() {
    let console = Console::new();
    console.sign_in("tok-1");
    let guard = console.guard(WINDOW);
    guard.mount();
    console.clock.advance(secs(120));

    guard.unmount();
    assert_eq!(console.clock.pending(), 0);

    console.clock.advance(secs(3_600));
    assert!(console.session.is_authenticated());
    assert_eq!(console.logouts(), 0);
    assert!(console.notices.borrow().is_empty());
}

#[test]
fn route_change_hands_over_to_the_next_guard() {
    let console = Console::new();
    console.sign_in("tok-1");
    let first = console.guard(WINDOW);
    first.mount();
    console.clock.advance(secs(200));

    first.unmount();
    let second = console.guard(WINDOW);
    second.mount();

    // The old deadline at 300s no longer applies.
    console.clock.advance_to(secs(499));
    assert!(console.session.is_authenticated());
    console.clock.advance_to(secs(500));
    assert!(!console.session.is_authenticated());
    assert_eq!(console.logouts(), 1);
}

// =============================================================================
// Logout and re-login
// =============================================================================

#[test]
fn repeated_logout_matches_single_logout() {
    let console = Console::new();
    console.sign_in("tok-1");

    console.session.logout();
    let once = console.session.snapshot();
    console.session.logout();

    assert_eq!(console.session.snapshot(), once);
    assert_eq!(console.storage.persisted(), None);
    assert_eq!(console.logouts(), 1);
}

#[test]
fn explicit_logout_then_expiry_is_silent() {
    let console = Console::new();
    console.sign_in("tok-1");
    let guard = console.guard(WINDOW);
    guard.mount();

    console.clock.advance(secs(60));
    console.session.logout();
    console.clock.advance(secs(600));

    assert_eq!(console.logouts(), 1);
    assert!(console.notices.borrow().is_empty());
}

#[test]
fn relogin_after_expiry_starts_a_fresh_window() {
    let console = Console::new();
    console.sign_in("tok-1");
    let guard = console.guard(WINDOW);
    guard.mount();
    console.clock.advance_to(secs(300));
    assert!(!console.session.is_authenticated());

    console.sign_in("tok-2");
    assert_eq!(console.storage.persisted().as_deref(), Some("tok-2"));
    assert_eq!(guard.mount(), RouteDecision::Render);

    console.clock.advance_to(secs(599));
    assert!(console.session.is_authenticated());
    console.clock.advance_to(secs(600));
    assert!(!console.session.is_authenticated());
    assert_eq!(console.logouts(), 2);
}

#[test]
fn reload_restores_persisted_session() {
    let console = Console::new();
    console.sign_in("tok-1");

    let reloaded = SessionStore::new(Arc::new(console.storage.clone()));
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.token().as_deref(), Some("tok-1"));
}

// =============================================================================
// Configured window
// =============================================================================

#[test]
fn configured_window_drives_expiry() {
    let config = ConsoleConfig::from_lookup(|key| (key == "ADMIN_IDLE_TIMEOUT_SECS").then(|| "90".to_owned())).unwrap();
    let console = Console::new();
    console.sign_in("tok-1");
    let guard = console.guard(config.idle_timeout);
    guard.mount();

    console.clock.advance_to(secs(89));
    assert!(console.session.is_authenticated());
    console.clock.advance_to(secs(90));
    assert!(!console.session.is_authenticated());
    assert_eq!(*console.notices.borrow(), vec!["Logged out due to 90 seconds of inactivity.".to_owned()]);
}
