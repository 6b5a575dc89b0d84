//! Deferred-callback scheduling behind a small trait.
//!
//! The idle guard never touches browser timers directly. In the browser it
//! runs on [`BrowserScheduler`] (`setTimeout` via `gloo-timers`); tests drive
//! a [`ManualScheduler`] whose clock only moves when told to.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// One-shot timers. Single-threaded: callbacks run on the caller's thread.
pub trait Scheduler {
    /// Token identifying a scheduled callback.
    type Handle;

    /// Run `callback` once after `delay`.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Prevent a scheduled callback from running. Cancelling a timer that has
    /// already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Simulated clock for deterministic tests.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Box<dyn FnOnce()>>,
}

/// Handle returned by [`ManualScheduler::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualTimer {
    deadline: Duration,
    seq: u64,
}

impl ManualTimer {
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.queue.len())
            .finish()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of callbacks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Deadline of the earliest waiting callback.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.clock.borrow().queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Move the clock forward, firing every callback that comes due in order.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.run_until(target);
    }

    /// Move the clock to an absolute instant. Instants in the past are ignored.
    pub fn advance_to(&self, at: Duration) {
        if at > self.now() {
            self.run_until(at);
        }
    }

    fn run_until(&self, target: Duration) {
        loop {
            // The borrow must end before the callback runs: callbacks schedule
            // and cancel timers on this same clock.
            let due = {
                let mut clock = self.clock.borrow_mut();
                match clock.queue.keys().next().copied() {
                    Some(key) if key.0 <= target => {
                        clock.now = key.0;
                        clock.queue.remove(&key)
                    }
                    _ => None,
                }
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
        let mut clock = self.clock.borrow_mut();
        if clock.now < target {
            clock.now = target;
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualTimer {
        let mut clock = self.clock.borrow_mut();
        let timer = ManualTimer { deadline: clock.now + delay, seq: clock.next_seq };
        clock.next_seq += 1;
        clock.queue.insert((timer.deadline, timer.seq), callback);
        timer
    }

    fn cancel(&self, handle: ManualTimer) {
        self.clock.borrow_mut().queue.remove(&(handle.deadline, handle.seq));
    }
}

/// `setTimeout`-backed scheduler for the browser build.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle {
        // Browsers treat delays above i32::MAX ms as zero.
        let millis = u32::try_from(delay.as_millis()).map_or(i32::MAX as u32, |ms| ms.min(i32::MAX as u32));
        gloo_timers::callback::Timeout::new(millis, callback)
    }

    fn cancel(&self, handle: Self::Handle) {
        drop(handle.cancel());
    }
}
