//! Transition animator: turns a released swipe into a fly-off, spring-back or
//! entry slide and reports committed swipes once their animation finishes.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use snapsort_animation::{Animatable, AnimationType};
use snapsort_core::{RuntimeHandle, StateSubscription};
use snapsort_foundation::{
    classify_swipe, project_feedback, DirectionBindings, HapticFeedback, HapticPulse,
    NoopHaptics, PointerEvent, PointerEventKind, ResolvedThresholds, SwipeDirection,
    SwipeFeedback, SwipeFrame, SwipeOutcome, SwipeRelease, SwipeTracker,
    ThresholdCrossingDetector, TrackerEvent,
};

use crate::SwipeConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorPhase {
    Idle,
    Dragging,
    CommittingForward,
    CommittingBackward,
    Cancelling,
    /// The replacement element is springing in from a viewport edge.
    Entering,
}

/// A committed swipe whose fly-off animation has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeCommit {
    Forward,
    Backward,
}

impl SwipeCommit {
    fn phase(self) -> AnimatorPhase {
        match self {
            SwipeCommit::Forward => AnimatorPhase::CommittingForward,
            SwipeCommit::Backward => AnimatorPhase::CommittingBackward,
        }
    }
}

struct AnimatorInner {
    config: SwipeConfig,
    thresholds: ResolvedThresholds,
    tracker: SwipeTracker,
    crossings: ThresholdCrossingDetector,
    haptics: Rc<dyn HapticFeedback>,
    phase: AnimatorPhase,
    forward_bound: bool,
    backward_bound: bool,
    /// Animations still running in the current settle (spring-back or entry).
    settling: u8,
    completions: VecDeque<SwipeCommit>,
}

impl AnimatorInner {
    fn bindings(&self) -> DirectionBindings {
        let forward = self.config.convention.forward();
        let (left, right) = match forward {
            SwipeDirection::Left => (self.forward_bound, self.backward_bound),
            SwipeDirection::Right => (self.backward_bound, self.forward_bound),
        };
        DirectionBindings { left, right }
    }

    fn is_bound(&self, commit: SwipeCommit) -> bool {
        match commit {
            SwipeCommit::Forward => self.forward_bound,
            SwipeCommit::Backward => self.backward_bound,
        }
    }
}

/// Keeps a [`SwipeAnimator::subscribe`] listener registered until dropped.
#[must_use = "the listener is removed when the subscription is dropped"]
pub struct FeedbackSubscription {
    _x: StateSubscription,
    _y: StateSubscription,
}

/// Drives the displacement of one swipeable element.
///
/// Pointer events go in through [`on_pointer_event`](Self::on_pointer_event);
/// the renderer reads [`feedback`](Self::feedback) or registers through
/// [`subscribe`](Self::subscribe); the owning
/// session drains [`take_completions`](Self::take_completions) after frames
/// to learn which swipes committed. A completion is queued only from the end
/// callback of the fly-off animation, so each committed gesture yields exactly
/// one completion, strictly after the animation. New drags are refused until
/// the session has taken the pending completions.
#[derive(Clone)]
pub struct SwipeAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
    offset_x: Animatable<f32>,
    offset_y: Animatable<f32>,
}

impl SwipeAnimator {
    pub fn new(config: SwipeConfig, runtime: RuntimeHandle) -> Self {
        let inner = AnimatorInner {
            config,
            thresholds: config.resolved(),
            tracker: SwipeTracker::new(),
            crossings: ThresholdCrossingDetector::new(),
            haptics: Rc::new(NoopHaptics),
            phase: AnimatorPhase::Idle,
            forward_bound: true,
            backward_bound: true,
            settling: 0,
            completions: VecDeque::new(),
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
            offset_x: Animatable::new(0.0, runtime.clone()),
            offset_y: Animatable::new(0.0, runtime),
        }
    }

    pub fn with_haptics(self, haptics: Rc<dyn HapticFeedback>) -> Self {
        self.inner.borrow_mut().haptics = haptics;
        self
    }

    pub fn config(&self) -> SwipeConfig {
        self.inner.borrow().config
    }

    pub fn thresholds(&self) -> ResolvedThresholds {
        self.inner.borrow().thresholds
    }

    pub fn phase(&self) -> AnimatorPhase {
        self.inner.borrow().phase
    }

    /// At rest with no committed swipe waiting for its consumer.
    pub fn is_idle(&self) -> bool {
        let inner = self.inner.borrow();
        inner.phase == AnimatorPhase::Idle && inner.completions.is_empty()
    }

    /// Block new drags; a drag already underway still finishes.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.borrow_mut().tracker.set_disabled(disabled);
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.borrow().tracker.is_disabled()
    }

    /// Declare which commits have a consumer. Unbound commits spring back and
    /// their indicator stays hidden.
    pub fn set_bound(&self, forward: bool, backward: bool) {
        let mut inner = self.inner.borrow_mut();
        inner.forward_bound = forward;
        inner.backward_bound = backward;
    }

    /// Physical directions that currently commit.
    pub fn bindings(&self) -> DirectionBindings {
        self.inner.borrow().bindings()
    }

    pub fn frame(&self) -> SwipeFrame {
        SwipeFrame {
            displacement_x: self.offset_x.value(),
            displacement_y: self.offset_y.value(),
        }
    }

    pub fn feedback(&self) -> SwipeFeedback {
        let (variant, bindings, thresholds) = {
            let inner = self.inner.borrow();
            (inner.config.variant, inner.bindings(), inner.thresholds)
        };
        project_feedback(self.frame(), variant, bindings, &thresholds)
    }

    /// Call `listener` with fresh feedback whenever either axis moves, for
    /// as long as the returned subscription is alive.
    pub fn subscribe(&self, listener: impl Fn(SwipeFeedback) + 'static) -> FeedbackSubscription {
        let x_state = self.offset_x.state();
        let y_state = self.offset_y.state();
        let weak = Rc::downgrade(&self.inner);
        let notify = {
            let (x_state, y_state) = (x_state.clone(), y_state.clone());
            move || {
                let Some(animator) = weak.upgrade() else {
                    return;
                };
                let Ok(inner) = animator.try_borrow() else {
                    return;
                };
                let frame = SwipeFrame {
                    displacement_x: x_state.get(),
                    displacement_y: y_state.get(),
                };
                let feedback =
                    project_feedback(frame, inner.config.variant, inner.bindings(), &inner.thresholds);
                drop(inner);
                listener(feedback);
            }
        };
        let notify = Rc::new(notify);
        let on_x = Rc::clone(&notify);
        let on_y = notify;
        FeedbackSubscription {
            _x: x_state.subscribe(move |_| (*on_x)()),
            _y: y_state.subscribe(move |_| (*on_y)()),
        }
    }

    /// Committed swipes whose fly-off has finished, oldest first.
    pub fn take_completions(&self) -> SmallVec<[SwipeCommit; 2]> {
        self.inner.borrow_mut().completions.drain(..).collect()
    }

    pub fn on_pointer_event(&self, event: &PointerEvent) -> AnimatorPhase {
        let tracked = {
            let mut inner = self.inner.borrow_mut();
            if event.kind == PointerEventKind::Down {
                if inner.phase != AnimatorPhase::Idle {
                    log::debug!("swipe ignored while {:?}", inner.phase);
                    return inner.phase;
                }
                // The previous commit has not reached its consumer yet.
                if !inner.completions.is_empty() {
                    log::debug!("swipe ignored until {} completion(s) are taken", inner.completions.len());
                    return inner.phase;
                }
            }
            inner.tracker.on_pointer_event(event)
        };

        match tracked {
            TrackerEvent::Started => {
                let mut inner = self.inner.borrow_mut();
                inner.phase = AnimatorPhase::Dragging;
                inner.crossings.reset();
            }
            TrackerEvent::Moved(sample) => {
                self.offset_x.snapTo(sample.displacement_x);
                self.offset_y.snapTo(sample.displacement_y);
                let crossed = {
                    let mut inner = self.inner.borrow_mut();
                    let distance = inner.thresholds.distance;
                    inner
                        .crossings
                        .observe(sample.displacement_x, distance)
                        .map(|direction| (direction, inner.haptics.clone()))
                };
                if let Some((direction, haptics)) = crossed {
                    log::trace!("threshold crossed towards {direction:?}");
                    haptics.pulse(HapticPulse::ThresholdCrossed(direction));
                }
            }
            TrackerEvent::Released(release) => {
                self.offset_x.snapTo(release.displacement_x);
                self.offset_y.snapTo(release.displacement_y);
                self.release(release);
            }
            TrackerEvent::Ignored => {}
        }
        self.phase()
    }

    fn release(&self, release: SwipeRelease) {
        let commit = {
            let inner = self.inner.borrow();
            let sign = inner.config.convention.forward_sign();
            let outcome = if release.cancelled {
                SwipeOutcome::None
            } else {
                classify_swipe(
                    release.displacement_x * sign,
                    release.velocity_x * sign,
                    &inner.thresholds,
                )
            };
            let commit = match outcome {
                SwipeOutcome::Forward => Some(SwipeCommit::Forward),
                SwipeOutcome::Backward => Some(SwipeCommit::Backward),
                SwipeOutcome::None => None,
            }
            .filter(|commit| inner.is_bound(*commit));
            log::debug!(
                "swipe released at dx={:.1} vx={:.1}: {:?} -> {:?}",
                release.displacement_x,
                release.velocity_x,
                outcome,
                commit
            );
            commit
        };

        match commit {
            Some(commit) => self.fly_off(commit),
            None => self.spring_back(),
        }
    }

    fn fly_off(&self, commit: SwipeCommit) {
        let (target, animation) = {
            let mut inner = self.inner.borrow_mut();
            inner.phase = commit.phase();
            let convention = inner.config.convention;
            let direction = match commit {
                SwipeCommit::Forward => convention.forward(),
                SwipeCommit::Backward => convention.backward(),
            };
            (
                direction.sign() * inner.config.fly_off_distance(),
                AnimationType::Tween(inner.config.commit_animation()),
            )
        };

        let weak = Rc::downgrade(&self.inner);
        self.offset_x.animateTo(target, animation, move || {
            Self::finish_commit(&weak, commit);
        });
        self.offset_y.animateTo(0.0, animation, || {});
    }

    fn finish_commit(weak: &Weak<RefCell<AnimatorInner>>, commit: SwipeCommit) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        inner.phase = AnimatorPhase::Idle;
        inner.completions.push_back(commit);
        log::debug!("swipe commit {commit:?} finished");
    }

    fn spring_back(&self) {
        let spring = {
            let mut inner = self.inner.borrow_mut();
            inner.phase = AnimatorPhase::Cancelling;
            inner.settling = 2;
            AnimationType::Spring(inner.config.spring)
        };
        self.settle_axis(&self.offset_x, spring);
        self.settle_axis(&self.offset_y, spring);
    }

    fn settle_axis(&self, axis: &Animatable<f32>, animation: AnimationType) {
        let weak = Rc::downgrade(&self.inner);
        axis.animateTo(0.0, animation, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut inner = inner.borrow_mut();
            inner.settling = inner.settling.saturating_sub(1);
            if inner.settling == 0 {
                inner.phase = AnimatorPhase::Idle;
            }
        });
    }

    /// Place the element just past `edge` and spring it to center. Without
    /// the entry slide this is a plain reset.
    pub fn enter_from(&self, edge: SwipeDirection) {
        let (entry_slide, start, spring) = {
            let inner = self.inner.borrow();
            (
                inner.config.entry_slide,
                edge.sign() * inner.config.viewport.width,
                AnimationType::Spring(inner.config.spring),
            )
        };
        if !entry_slide {
            self.reset();
            return;
        }

        self.offset_x.snapTo(start);
        self.offset_y.snapTo(0.0);
        {
            let mut inner = self.inner.borrow_mut();
            inner.phase = AnimatorPhase::Entering;
            inner.settling = 1;
        }
        self.settle_axis(&self.offset_x, spring);
    }

    /// Jump to rest, dropping any running animation and its completion.
    pub fn reset(&self) {
        self.offset_x.snapTo(0.0);
        self.offset_y.snapTo(0.0);
        let mut inner = self.inner.borrow_mut();
        inner.phase = AnimatorPhase::Idle;
        inner.settling = 0;
        inner.crossings.reset();
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
