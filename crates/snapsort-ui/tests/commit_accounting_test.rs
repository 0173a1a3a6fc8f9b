//! Long runs of gestures: every committed swipe is applied exactly once and
//! nothing else ever commits.

use std::cell::RefCell;
use std::rc::Rc;

use snapsort_graphics::{Point, Size};
use snapsort_testing::{
    assert_at_rest, assert_count, MemoryPhotoStore, RecordingNavigator, ScriptedCamera,
    SwipeRobot, TestRuntime,
};
use snapsort_ui::{
    GalleryCommand, GalleryEvent, GallerySession, Route, SwipeAnimator, SwipeCommit, SwipeConfig,
    TriageCommand, TriageEvent, TriageSession, TriageState,
};

const VIEWPORT: Size = Size {
    width: 400.0,
    height: 800.0,
};

const ROUNDS: usize = 100;

#[test]
fn hundred_flings_yield_hundred_completions() {
    let runtime = TestRuntime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());
    let mut robot = SwipeRobot::new(Point::new(200.0, 400.0));

    let mut completions = Vec::new();
    for round in 0..ROUNDS {
        let dx = if round % 2 == 0 { 90.0 } else { -90.0 };
        for event in robot.fling(dx) {
            animator.on_pointer_event(&event);
        }
        runtime.settle(|| completions.extend(animator.take_completions()));
    }

    assert_count(&completions, ROUNDS, "completions");
    let forward = completions
        .iter()
        .filter(|commit| **commit == SwipeCommit::Forward)
        .count();
    assert_eq!(forward, ROUNDS / 2);
    assert!(animator.take_completions().is_empty());
}

#[test]
fn hundred_triage_saves_store_hundred_photos() {
    let runtime = TestRuntime::new();
    let store = Rc::new(RefCell::new(MemoryPhotoStore::new()));
    let camera = Rc::new(RefCell::new(ScriptedCamera::with_stills(ROUNDS)));
    let navigator = Rc::new(RefCell::new(RecordingNavigator::default()));
    let mut session = TriageSession::new(
        SwipeConfig::triage(VIEWPORT),
        runtime.handle(),
        store.clone(),
        camera,
        navigator,
    );
    let mut robot = SwipeRobot::new(Point::new(200.0, 400.0));

    let mut saved = 0;
    for _ in 0..ROUNDS {
        session.dispatch(TriageCommand::Capture);
        runtime.settle(|| {
            session.poll();
        });
        for event in robot.fling(90.0) {
            session.dispatch(TriageCommand::Pointer(event));
        }
        let mut events = Vec::new();
        runtime.settle(|| events.extend(session.poll()));
        saved += events
            .iter()
            .filter(|event| matches!(event, TriageEvent::Saved(_)))
            .count();
        session.dispatch(TriageCommand::TakeAnother);
    }

    assert_eq!(saved, ROUNDS, "saved events");
    assert_count(store.borrow().accepted(), ROUNDS, "stored photos");
    assert_eq!(*session.state(), TriageState::CaptureReady);
}

#[test]
fn hundred_forward_swipes_walk_the_whole_gallery() {
    let runtime = TestRuntime::new();
    let (store, ids) = MemoryPhotoStore::with_photos(ROUNDS + 1);
    let store = Rc::new(RefCell::new(store));
    let navigator = Rc::new(RefCell::new(RecordingNavigator::new(Route::Library)));
    let mut session = GallerySession::open(
        SwipeConfig::navigation(VIEWPORT),
        runtime.handle(),
        store,
        navigator,
        None,
    )
    .expect("memory store never fails to list");
    let mut robot = SwipeRobot::new(Point::new(200.0, 400.0));
    runtime.settle(|| {
        session.poll();
    });

    let mut moves = 0;
    for _ in 0..ROUNDS {
        for event in robot.fling(-60.0) {
            session.dispatch(GalleryCommand::Pointer(event));
        }
        let mut events = Vec::new();
        runtime.settle(|| events.extend(session.poll()));
        moves += events
            .iter()
            .filter(|event| matches!(event, GalleryEvent::CursorMoved { .. }))
            .count();
    }

    assert_eq!(moves, ROUNDS, "cursor moves");
    assert_eq!(session.cursor().map(|c| c.current_index()), Some(ROUNDS));
    assert_eq!(session.current().map(|e| e.id.as_str()), ids.last().map(String::as_str));
    assert_eq!(session.counter_label(), format!("{} / {}", ROUNDS + 1, ROUNDS + 1));
}

#[test]
fn repeated_cancels_never_commit_and_always_rest() {
    let runtime = TestRuntime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());
    let mut robot = SwipeRobot::new(Point::new(200.0, 400.0));

    for round in 0..ROUNDS {
        let dx = if round % 2 == 0 { 350.0 } else { -350.0 };
        for event in robot.cancelled_drag(dx) {
            animator.on_pointer_event(&event);
        }
        runtime.settle(|| assert!(animator.take_completions().is_empty()));
        assert_at_rest(animator.frame(), animator.feedback(), "after cancel");
    }
}
