use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use snapsort_core::{Runtime, FRAME_INTERVAL_NANOS};
use snapsort_foundation::{HapticFeedback, HapticPulse, PointerEvent, SwipeDirection};
use snapsort_graphics::Size;

const VIEWPORT: Size = Size {
    width: 400.0,
    height: 800.0,
};

fn pump(runtime: &Runtime, max_frames: usize) {
    let handle = runtime.handle();
    let mut time = handle.last_frame_nanos().unwrap_or(0);
    for _ in 0..max_frames {
        if !handle.has_frame_callbacks() {
            break;
        }
        time += FRAME_INTERVAL_NANOS;
        handle.drain_frame_callbacks(time);
    }
}

/// Drag horizontally by `dx` in `steps` moves spaced `step_ms` apart, then
/// hold still for `hold_ms` before lifting.
fn drag(animator: &SwipeAnimator, dx: f32, steps: u64, step_ms: u64, hold_ms: u64) -> AnimatorPhase {
    let (x0, y0) = (200.0, 400.0);
    animator.on_pointer_event(&PointerEvent::down(x0, y0, 0));
    for step in 1..=steps {
        let x = x0 + dx * step as f32 / steps as f32;
        animator.on_pointer_event(&PointerEvent::moved(x, y0, step * step_ms));
    }
    animator.on_pointer_event(&PointerEvent::up(x0 + dx, y0, steps * step_ms + hold_ms))
}

#[derive(Default)]
struct Pulses(RefCell<Vec<HapticPulse>>);

impl HapticFeedback for Pulses {
    fn pulse(&self, pulse: HapticPulse) {
        self.0.borrow_mut().push(pulse);
    }
}

#[test]
fn drag_moves_the_element_with_the_pointer() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());

    animator.on_pointer_event(&PointerEvent::down(100.0, 100.0, 0));
    assert_eq!(animator.phase(), AnimatorPhase::Dragging);
    animator.on_pointer_event(&PointerEvent::moved(140.0, 110.0, 16));

    let frame = animator.frame();
    assert_eq!(frame.displacement_x, 40.0);
    assert_eq!(frame.displacement_y, 10.0);
    let feedback = animator.feedback();
    assert_eq!(feedback.layer.translation_x, 40.0);
    assert!((feedback.layer.translation_y - 3.0).abs() < 1e-5);
}

#[test]
fn subscribers_see_feedback_until_dropped() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());
    let seen: Rc<RefCell<Vec<SwipeFeedback>>> = Rc::default();

    let subscription = animator.subscribe({
        let seen = Rc::clone(&seen);
        move |feedback| seen.borrow_mut().push(feedback)
    });
    animator.on_pointer_event(&PointerEvent::down(100.0, 100.0, 0));
    animator.on_pointer_event(&PointerEvent::moved(140.0, 110.0, 16));

    let last = seen.borrow().last().copied().expect("feedback delivered");
    assert_eq!(last, animator.feedback());
    assert_eq!(last.layer.translation_x, 40.0);

    drop(subscription);
    let delivered = seen.borrow().len();
    animator.on_pointer_event(&PointerEvent::moved(180.0, 110.0, 32));
    assert_eq!(seen.borrow().len(), delivered);
}

#[test]
fn short_slow_drag_springs_back_to_rest() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());

    assert_eq!(drag(&animator, 50.0, 10, 16, 0), AnimatorPhase::Cancelling);
    pump(&runtime, 600);

    assert_eq!(animator.phase(), AnimatorPhase::Idle);
    assert_eq!(animator.frame(), SwipeFrame::REST);
    assert_eq!(animator.feedback().layer.scale, 1.0);
    assert_eq!(animator.feedback().layer.alpha, 1.0);
    assert!(animator.take_completions().is_empty());
}

#[test]
fn navigation_cancel_restores_scale() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::navigation(VIEWPORT), runtime.handle());

    animator.on_pointer_event(&PointerEvent::down(200.0, 400.0, 0));
    animator.on_pointer_event(&PointerEvent::moved(260.0, 400.0, 100));
    assert!(animator.feedback().layer.scale < 1.0);
    animator.on_pointer_event(&PointerEvent::up(260.0, 400.0, 200));
    pump(&runtime, 600);

    assert_eq!(animator.frame().displacement_x, 0.0);
    assert_eq!(animator.feedback().layer.scale, 1.0);
}

#[test]
fn flick_commits_only_after_the_fly_off_finishes() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());

    assert_eq!(drag(&animator, 60.0, 3, 10, 0), AnimatorPhase::CommittingForward);
    pump(&runtime, 5);
    assert!(animator.take_completions().is_empty(), "still flying");

    pump(&runtime, 60);
    assert_eq!(animator.phase(), AnimatorPhase::Idle);
    assert_eq!(animator.take_completions().as_slice(), &[SwipeCommit::Forward]);
    assert_eq!(animator.frame().displacement_x, 500.0);
    assert_eq!(animator.frame().displacement_y, 0.0);

    pump(&runtime, 60);
    assert!(animator.take_completions().is_empty(), "never twice");
}

#[test]
fn far_drag_left_discards_in_triage() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());

    // Held still before lifting, so only distance decides.
    assert_eq!(
        drag(&animator, -150.0, 10, 16, 100),
        AnimatorPhase::CommittingBackward
    );
    pump(&runtime, 60);
    assert_eq!(animator.take_completions().as_slice(), &[SwipeCommit::Backward]);
    assert_eq!(animator.frame().displacement_x, -500.0);
}

#[test]
fn gallery_left_swipe_is_forward() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::navigation(VIEWPORT), runtime.handle());

    assert_eq!(
        drag(&animator, -150.0, 10, 16, 100),
        AnimatorPhase::CommittingForward
    );
    pump(&runtime, 60);
    assert_eq!(animator.take_completions().as_slice(), &[SwipeCommit::Forward]);
    assert_eq!(animator.frame().displacement_x, -400.0);
}

#[test]
fn unbound_direction_springs_back_and_hides_its_indicator() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::navigation(VIEWPORT), runtime.handle());
    animator.set_bound(true, false);

    // Right is backward in the gallery.
    assert!(!animator.bindings().right);
    animator.on_pointer_event(&PointerEvent::down(0.0, 0.0, 0));
    animator.on_pointer_event(&PointerEvent::moved(90.0, 0.0, 200));
    assert_eq!(animator.feedback().indicators.right.opacity, 0.0);

    assert_eq!(
        animator.on_pointer_event(&PointerEvent::up(150.0, 0.0, 400)),
        AnimatorPhase::Cancelling
    );
    pump(&runtime, 600);
    assert!(animator.take_completions().is_empty());
    assert_eq!(animator.frame(), SwipeFrame::REST);
}

#[test]
fn platform_cancel_never_commits() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());

    animator.on_pointer_event(&PointerEvent::down(0.0, 0.0, 0));
    animator.on_pointer_event(&PointerEvent::moved(300.0, 0.0, 10));
    assert_eq!(
        animator.on_pointer_event(&PointerEvent::cancel(20)),
        AnimatorPhase::Cancelling
    );
    pump(&runtime, 600);
    assert!(animator.take_completions().is_empty());
    assert_eq!(animator.frame(), SwipeFrame::REST);
}

#[test]
fn new_drag_is_ignored_while_animating() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());

    drag(&animator, 60.0, 3, 10, 0);
    assert_eq!(
        animator.on_pointer_event(&PointerEvent::down(0.0, 0.0, 100)),
        AnimatorPhase::CommittingForward
    );
    pump(&runtime, 60);
    assert_eq!(animator.take_completions().len(), 1);
}

#[test]
fn new_drag_waits_until_the_completion_is_taken() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());

    drag(&animator, -60.0, 3, 10, 0);
    pump(&runtime, 60);
    assert_eq!(animator.phase(), AnimatorPhase::Idle);
    assert!(!animator.is_idle());

    assert_eq!(drag(&animator, 60.0, 3, 10, 0), AnimatorPhase::Idle);
    assert_eq!(animator.frame().displacement_x, -500.0);
    pump(&runtime, 60);
    assert_eq!(animator.take_completions().as_slice(), &[SwipeCommit::Backward]);
    assert!(animator.is_idle());

    assert_eq!(drag(&animator, 60.0, 3, 10, 0), AnimatorPhase::CommittingForward);
    pump(&runtime, 60);
    assert_eq!(animator.take_completions().as_slice(), &[SwipeCommit::Forward]);
}

#[test]
fn disabled_animator_ignores_drags() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());
    animator.set_disabled(true);

    assert_eq!(drag(&animator, 200.0, 5, 10, 0), AnimatorPhase::Idle);
    assert_eq!(animator.frame(), SwipeFrame::REST);
    assert!(runtime.handle().is_idle());
}

#[test]
fn threshold_crossing_pulses_once_per_crossing() {
    let runtime = Runtime::new();
    let pulses = Rc::new(Pulses::default());
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle())
        .with_haptics(pulses.clone());

    animator.on_pointer_event(&PointerEvent::down(0.0, 0.0, 0));
    for (i, x) in [50.0, 130.0, 170.0, 200.0, 90.0, 125.0].iter().enumerate() {
        animator.on_pointer_event(&PointerEvent::moved(*x, 0.0, 100 * (i as u64 + 1)));
    }
    animator.on_pointer_event(&PointerEvent::up(125.0, 0.0, 1_000));

    assert_eq!(
        pulses.0.borrow().as_slice(),
        &[
            HapticPulse::ThresholdCrossed(SwipeDirection::Right),
            HapticPulse::ThresholdCrossed(SwipeDirection::Right),
        ]
    );
}

#[test]
fn entry_slides_in_from_the_given_edge() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::navigation(VIEWPORT), runtime.handle());

    animator.enter_from(SwipeDirection::Right);
    assert_eq!(animator.phase(), AnimatorPhase::Entering);
    assert_eq!(animator.frame().displacement_x, 400.0);

    pump(&runtime, 600);
    assert_eq!(animator.phase(), AnimatorPhase::Idle);
    assert_eq!(animator.frame().displacement_x, 0.0);
    assert!(animator.take_completions().is_empty());
}

#[test]
fn entry_without_slide_is_a_reset() {
    let runtime = Runtime::new();
    let animator = SwipeAnimator::new(SwipeConfig::triage(VIEWPORT), runtime.handle());

    drag(&animator, 60.0, 3, 10, 0);
    pump(&runtime, 60);
    animator.enter_from(SwipeDirection::Left);
    assert_eq!(animator.phase(), AnimatorPhase::Idle);
    assert_eq!(animator.frame(), SwipeFrame::REST);
}
