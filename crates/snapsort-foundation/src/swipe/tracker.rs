//! Pointer-to-displacement tracking for a single swipe.

use snapsort_graphics::Point;

use crate::gesture_constants::MAX_FLING_VELOCITY;
use crate::input::{PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::VelocityTracker1D;

/// Live state of an in-progress drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Horizontal displacement since the pointer went down.
    pub displacement_x: f32,
    /// Vertical displacement since the pointer went down, undamped.
    pub displacement_y: f32,
    /// Horizontal velocity in units per second.
    pub velocity_x: f32,
    /// Strictly increasing per interaction; 0 is the down sample.
    pub timestamp_ordinal: u64,
}

/// Final sample of a drag, handed to the classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeRelease {
    pub displacement_x: f32,
    pub displacement_y: f32,
    pub velocity_x: f32,
    /// The platform aborted the gesture; always springs back.
    pub cancelled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackerEvent {
    Started,
    Moved(GestureSample),
    Released(SwipeRelease),
    /// The event did not belong to an interaction this tracker accepts.
    Ignored,
}

struct ActiveDrag {
    pointer: PointerId,
    origin: Point,
    sample: GestureSample,
}

/// Follows one pointer from down to up and reports displacement and velocity.
///
/// While disabled, new interactions are refused. An interaction that was
/// already underway when the tracker was disabled runs to completion.
#[derive(Default)]
pub struct SwipeTracker {
    active: Option<ActiveDrag>,
    velocity: VelocityTracker1D,
    disabled: bool,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Latest sample of the current interaction.
    pub fn sample(&self) -> Option<GestureSample> {
        self.active.as_ref().map(|drag| drag.sample)
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> TrackerEvent {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_release(event, false),
            PointerEventKind::Cancel => self.on_release(event, true),
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> TrackerEvent {
        if self.disabled {
            log::debug!("swipe tracker disabled, ignoring pointer {}", event.id);
            return TrackerEvent::Ignored;
        }
        if self.active.is_some() {
            // Secondary pointers never take over the drag.
            return TrackerEvent::Ignored;
        }

        self.velocity.reset();
        self.velocity.add_sample(event.time_ms, event.position.x);
        self.active = Some(ActiveDrag {
            pointer: event.id,
            origin: event.position,
            sample: GestureSample {
                displacement_x: 0.0,
                displacement_y: 0.0,
                velocity_x: 0.0,
                timestamp_ordinal: 0,
            },
        });
        log::debug!(
            "swipe started for pointer {} at ({}, {})",
            event.id,
            event.position.x,
            event.position.y
        );
        TrackerEvent::Started
    }

    fn on_move(&mut self, event: &PointerEvent) -> TrackerEvent {
        let Some(drag) = self.active.as_mut().filter(|drag| drag.pointer == event.id) else {
            return TrackerEvent::Ignored;
        };

        self.velocity.add_sample(event.time_ms, event.position.x);
        let delta = event.position - drag.origin;
        drag.sample = GestureSample {
            displacement_x: delta.x,
            displacement_y: delta.y,
            velocity_x: self.velocity.velocity_with_max(MAX_FLING_VELOCITY),
            timestamp_ordinal: drag.sample.timestamp_ordinal + 1,
        };
        TrackerEvent::Moved(drag.sample)
    }

    fn on_release(&mut self, event: &PointerEvent, cancelled: bool) -> TrackerEvent {
        let drag = match self.active.take() {
            Some(drag) if drag.pointer == event.id => drag,
            other => {
                self.active = other;
                return TrackerEvent::Ignored;
            }
        };

        let release = if cancelled {
            SwipeRelease {
                displacement_x: drag.sample.displacement_x,
                displacement_y: drag.sample.displacement_y,
                velocity_x: 0.0,
                cancelled: true,
            }
        } else {
            self.velocity.add_sample(event.time_ms, event.position.x);
            let delta = event.position - drag.origin;
            SwipeRelease {
                displacement_x: delta.x,
                displacement_y: delta.y,
                velocity_x: self.velocity.velocity_with_max(MAX_FLING_VELOCITY),
                cancelled: false,
            }
        };
        self.velocity.reset();

        log::debug!(
            "swipe released: dx={:.1} vx={:.1} cancelled={}",
            release.displacement_x,
            release.velocity_x,
            release.cancelled
        );
        TrackerEvent::Released(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released(event: TrackerEvent) -> SwipeRelease {
        match event {
            TrackerEvent::Released(release) => release,
            other => panic!("expected release, got {other:?}"),
        }
    }

    #[test]
    fn displacement_is_measured_from_down() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(
            tracker.on_pointer_event(&PointerEvent::down(100.0, 300.0, 0)),
            TrackerEvent::Started
        );
        let TrackerEvent::Moved(sample) =
            tracker.on_pointer_event(&PointerEvent::moved(150.0, 280.0, 16))
        else {
            panic!("expected move");
        };
        assert_eq!(sample.displacement_x, 50.0);
        assert_eq!(sample.displacement_y, -20.0);
        assert_eq!(sample.timestamp_ordinal, 1);
    }

    #[test]
    fn timestamps_increase_monotonically() {
        let mut tracker = SwipeTracker::new();
        tracker.on_pointer_event(&PointerEvent::down(0.0, 0.0, 0));
        let mut last = 0;
        for step in 1..10u64 {
            tracker.on_pointer_event(&PointerEvent::moved(step as f32 * 3.0, 0.0, step * 8));
            let ordinal = tracker.sample().map(|s| s.timestamp_ordinal).unwrap_or(0);
            assert!(ordinal > last);
            last = ordinal;
        }
    }

    #[test]
    fn fast_flick_reports_positive_velocity() {
        let mut tracker = SwipeTracker::new();
        tracker.on_pointer_event(&PointerEvent::down(0.0, 0.0, 0));
        for step in 1..=4u64 {
            tracker.on_pointer_event(&PointerEvent::moved(step as f32 * 10.0, 0.0, step * 10));
        }
        let release = released(tracker.on_pointer_event(&PointerEvent::up(50.0, 0.0, 50)));
        assert_eq!(release.displacement_x, 50.0);
        assert!(release.velocity_x > 500.0, "got {}", release.velocity_x);
        assert!(!release.cancelled);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn release_velocity_is_capped() {
        let mut tracker = SwipeTracker::new();
        tracker.on_pointer_event(&PointerEvent::down(0.0, 0.0, 0));
        tracker.on_pointer_event(&PointerEvent::moved(-400.0, 0.0, 1));
        let release = released(tracker.on_pointer_event(&PointerEvent::up(-800.0, 0.0, 2)));
        assert_eq!(release.velocity_x, -MAX_FLING_VELOCITY);
    }

    #[test]
    fn cancel_keeps_last_displacement_and_zero_velocity() {
        let mut tracker = SwipeTracker::new();
        tracker.on_pointer_event(&PointerEvent::down(0.0, 0.0, 0));
        tracker.on_pointer_event(&PointerEvent::moved(200.0, 10.0, 10));
        let release = released(tracker.on_pointer_event(&PointerEvent::cancel(20)));
        assert!(release.cancelled);
        assert_eq!(release.displacement_x, 200.0);
        assert_eq!(release.velocity_x, 0.0);
    }

    #[test]
    fn disabled_tracker_refuses_new_interactions() {
        let mut tracker = SwipeTracker::new();
        tracker.set_disabled(true);
        assert_eq!(
            tracker.on_pointer_event(&PointerEvent::down(0.0, 0.0, 0)),
            TrackerEvent::Ignored
        );
        assert_eq!(
            tracker.on_pointer_event(&PointerEvent::moved(10.0, 0.0, 5)),
            TrackerEvent::Ignored
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn disabling_mid_drag_lets_the_drag_finish() {
        let mut tracker = SwipeTracker::new();
        tracker.on_pointer_event(&PointerEvent::down(0.0, 0.0, 0));
        tracker.set_disabled(true);
        assert!(matches!(
            tracker.on_pointer_event(&PointerEvent::moved(30.0, 0.0, 10)),
            TrackerEvent::Moved(_)
        ));
        assert!(matches!(
            tracker.on_pointer_event(&PointerEvent::up(30.0, 0.0, 20)),
            TrackerEvent::Released(_)
        ));
    }

    #[test]
    fn second_pointer_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.on_pointer_event(&PointerEvent::down(0.0, 0.0, 0));
        assert_eq!(
            tracker.on_pointer_event(&PointerEvent::down(50.0, 0.0, 1).with_id(7)),
            TrackerEvent::Ignored
        );
        assert_eq!(
            tracker.on_pointer_event(&PointerEvent::up(50.0, 0.0, 2).with_id(7)),
            TrackerEvent::Ignored
        );
        assert!(tracker.is_tracking());
    }
}
