use std::cell::RefCell;
use std::rc::Rc;

use mockall::predicate::*;

use crate::pointer::{
    ListenerId, MockPointerSource, PointerPosition, PointerTracker, SimulatedSurface,
};

/// Helper to start a tracker on a fresh surface, recording every notification.
fn started() -> (
    SimulatedSurface,
    PointerTracker<SimulatedSurface>,
    Rc<RefCell<Vec<PointerPosition>>>,
) {
    let surface = SimulatedSurface::new();
    let mut tracker = PointerTracker::new(surface.clone());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    tracker.start(move |p| sink.borrow_mut().push(p));
    (surface, tracker, seen)
}

#[test]
fn test_new_tracker_is_inactive_at_origin() {
    let surface = SimulatedSurface::new();
    let tracker = PointerTracker::new(surface.clone());

    assert!(!tracker.is_active());
    assert_eq!(tracker.position(), PointerPosition::ORIGIN);
    assert_eq!(surface.listener_count(), 0);
}

#[test]
fn test_start_registers_one_listener() {
    let (surface, tracker, seen) = started();

    assert!(tracker.is_active());
    assert_eq!(surface.listener_count(), 1);
    assert_eq!(tracker.source().listener_count(), 1);
    assert_eq!(tracker.position(), PointerPosition::ORIGIN);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_move_overwrites_position() {
    let (surface, tracker, seen) = started();

    surface.dispatch(PointerPosition::new(120, 80));

    assert_eq!(tracker.position(), PointerPosition::new(120, 80));
    assert_eq!(*seen.borrow(), vec![PointerPosition::new(120, 80)]);
}

#[test]
fn test_last_move_wins() {
    let (surface, tracker, seen) = started();

    surface.dispatch(PointerPosition::new(10, 10));
    surface.dispatch(PointerPosition::new(500, 500));

    assert_eq!(tracker.position(), PointerPosition::new(500, 500));
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_one_notification_per_move_including_repeats() {
    let (surface, tracker, seen) = started();

    surface.dispatch(PointerPosition::new(3, 3));
    surface.dispatch(PointerPosition::new(3, 3));

    assert_eq!(tracker.position(), PointerPosition::new(3, 3));
    assert_eq!(
        *seen.borrow(),
        vec![PointerPosition::new(3, 3), PointerPosition::new(3, 3)]
    );
}

#[test]
fn test_stop_releases_listener_and_ignores_later_moves() {
    let (surface, mut tracker, seen) = started();
    surface.dispatch(PointerPosition::new(1, 2));

    tracker.stop();
    assert!(!tracker.is_active());
    assert_eq!(surface.listener_count(), 0);

    assert_eq!(surface.dispatch(PointerPosition::new(999, 999)), 0);
    assert_eq!(tracker.position(), PointerPosition::new(1, 2));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_stop_is_idempotent() {
    let (surface, mut tracker, _seen) = started();

    tracker.stop();
    tracker.stop();

    assert_eq!(surface.listener_count(), 0);
}

#[test]
fn test_drop_releases_listener() {
    let (surface, tracker, _seen) = started();
    assert_eq!(surface.listener_count(), 1);

    drop(tracker);

    assert_eq!(surface.listener_count(), 0);
    assert_eq!(surface.dispatch(PointerPosition::new(999, 999)), 0);
}

#[test]
fn test_restart_resets_to_origin_without_leaking() {
    let (surface, mut tracker, first) = started();
    surface.dispatch(PointerPosition::new(40, 50));

    let second = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&second);
    tracker.start(move |p| sink.borrow_mut().push(p));

    assert_eq!(surface.listener_count(), 1);
    assert_eq!(tracker.position(), PointerPosition::ORIGIN);

    surface.dispatch(PointerPosition::new(6, 7));
    assert_eq!(first.borrow().len(), 1);
    assert_eq!(*second.borrow(), vec![PointerPosition::new(6, 7)]);
}

#[test]
fn test_tracker_releases_the_id_it_registered() {
    let mut source = MockPointerSource::new();
    source
        .expect_add_listener()
        .times(1)
        .returning(|_| ListenerId::new(42));
    source
        .expect_remove_listener()
        .with(eq(ListenerId::new(42)))
        .times(1)
        .returning(|_| true);

    let mut tracker = PointerTracker::new(source);
    tracker.start(|_| {});
    tracker.stop();
    drop(tracker);
}

#[test]
fn test_tracker_tolerates_source_that_already_released() {
    let mut source = MockPointerSource::new();
    source
        .expect_add_listener()
        .times(1)
        .returning(|_| ListenerId::new(1));
    source
        .expect_remove_listener()
        .times(1)
        .returning(|_| false);

    let mut tracker = PointerTracker::new(source);
    tracker.start(|_| {});
    tracker.stop();

    assert!(!tracker.is_active());
}

#[test]
fn test_inactive_tracker_never_touches_source() {
    let source = MockPointerSource::new();
    let mut tracker = PointerTracker::new(source);
    tracker.stop();
    drop(tracker);
}
