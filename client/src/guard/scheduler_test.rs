use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::*;

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let make = move |name: &'static str| {
        let sink = Rc::clone(&sink);
        Box::new(move || sink.borrow_mut().push(name)) as Box<dyn FnOnce()>
    };
    (log, make)
}

#[test]
fn callbacks_fire_only_once_due() {
    let clock = ManualScheduler::new();
    let (log, make) = recorder();
    clock.schedule(secs(10), make("a"));

    clock.advance(secs(9));
    assert!(log.borrow().is_empty());
    assert_eq!(clock.pending(), 1);

    clock.advance(secs(1));
    assert_eq!(*log.borrow(), vec!["a"]);
    assert_eq!(clock.pending(), 0);
    assert_eq!(clock.now(), secs(10));
}

#[test]
fn callbacks_fire_in_deadline_then_schedule_order() {
    let clock = ManualScheduler::new();
    let (log, make) = recorder();
    clock.schedule(secs(5), make("late"));
    clock.schedule(secs(2), make("early"));
    clock.schedule(secs(5), make("late-second"));

    clock.advance(secs(60));
    assert_eq!(*log.borrow(), vec!["early", "late", "late-second"]);
}

#[test]
fn cancelled_callback_never_fires() {
    let clock = ManualScheduler::new();
    let (log, make) = recorder();
    let handle = clock.schedule(secs(3), make("cancelled"));
    clock.cancel(handle);
    clock.advance(secs(10));
    assert!(log.borrow().is_empty());
}

#[test]
fn cancel_after_fire_is_noop() {
    let clock = ManualScheduler::new();
    let (log, make) = recorder();
    let handle = clock.schedule(secs(1), make("fired"));
    clock.advance(secs(1));
    clock.cancel(handle);
    assert_eq!(*log.borrow(), vec!["fired"]);
}

#[test]
fn callback_sees_its_own_deadline_as_now() {
    let clock = ManualScheduler::new();
    let seen = Rc::new(RefCell::new(None));
    let observer = clock.clone();
    let sink = Rc::clone(&seen);
    clock.schedule(secs(7), Box::new(move || *sink.borrow_mut() = Some(observer.now())));
    clock.advance(secs(30));
    assert_eq!(*seen.borrow(), Some(secs(7)));
    assert_eq!(clock.now(), secs(30));
}

#[test]
fn callback_can_reschedule_within_same_advance() {
    let clock = ManualScheduler::new();
    let (log, make) = recorder();
    let inner = clock.clone();
    let follow_up = make("second");
    clock.schedule(
        secs(1),
        Box::new(move || {
            inner.schedule(secs(1), follow_up);
        }),
    );
    clock.advance(secs(5));
    assert_eq!(*log.borrow(), vec!["second"]);
}

#[test]
fn advance_to_ignores_past_instants() {
    let clock = ManualScheduler::new();
    clock.advance(secs(10));
    clock.advance_to(secs(4));
    assert_eq!(clock.now(), secs(10));
    clock.advance_to(secs(12));
    assert_eq!(clock.now(), secs(12));
}

#[test]
fn next_deadline_reports_earliest() {
    let clock = ManualScheduler::new();
    let (_log, make) = recorder();
    assert_eq!(clock.next_deadline(), None);
    let handle = clock.schedule(secs(8), make("x"));
    clock.schedule(secs(3), make("y"));
    assert_eq!(clock.next_deadline(), Some(secs(3)));
    assert_eq!(handle.deadline(), secs(8));
}
