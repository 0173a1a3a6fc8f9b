//! Robot-style gesture scripting.
//!
//! A [`SwipeRobot`] produces complete pointer sequences with realistic
//! timing, so tests describe gestures ("fling left", "drag and hold") instead
//! of individual events.
//!
//! ```ignore
//! let mut robot = SwipeRobot::new(Point::new(200.0, 400.0));
//! for event in robot.fling(300.0) {
//!     animator.on_pointer_event(&event);
//! }
//! runtime.settle(|| {});
//! ```

use snapsort_foundation::{PointerEvent, PointerId};
use snapsort_graphics::Point;

/// Gap between consecutive gestures, long enough to reset velocity tracking.
const GESTURE_GAP_MS: u64 = 500;

/// Pause before lifting a held drag; longer than the tracker's stop detection.
const HOLD_MS: u64 = 120;

pub struct SwipeRobot {
    origin: Point,
    clock_ms: u64,
    pointer: PointerId,
}

impl SwipeRobot {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            clock_ms: 0,
            pointer: 0,
        }
    }

    pub fn with_pointer(mut self, pointer: PointerId) -> Self {
        self.pointer = pointer;
        self
    }

    /// Pointer clock after the last generated event.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Quick flick: 3 moves 10 ms apart, lifted while moving.
    pub fn fling(&mut self, dx: f32) -> Vec<PointerEvent> {
        self.gesture(dx, 0.0, 3, 10, 0, false)
    }

    /// Slow drag to `dx`, held still before lifting so only distance counts.
    pub fn drag_and_hold(&mut self, dx: f32) -> Vec<PointerEvent> {
        self.gesture(dx, 0.0, 12, 16, HOLD_MS, false)
    }

    /// Diagonal drag with a vertical component, held before lifting.
    pub fn drag_diagonal(&mut self, dx: f32, dy: f32) -> Vec<PointerEvent> {
        self.gesture(dx, dy, 12, 16, HOLD_MS, false)
    }

    /// Drag aborted by the platform instead of lifted.
    pub fn cancelled_drag(&mut self, dx: f32) -> Vec<PointerEvent> {
        self.gesture(dx, 0.0, 12, 16, 0, true)
    }

    fn gesture(
        &mut self,
        dx: f32,
        dy: f32,
        steps: u64,
        step_ms: u64,
        hold_ms: u64,
        cancel: bool,
    ) -> Vec<PointerEvent> {
        let start = self.clock_ms + GESTURE_GAP_MS;
        let Point { x: x0, y: y0 } = self.origin;

        let mut events = Vec::with_capacity(steps as usize + 2);
        events.push(PointerEvent::down(x0, y0, start).with_id(self.pointer));
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            events.push(
                PointerEvent::moved(x0 + dx * fraction, y0 + dy * fraction, start + step * step_ms)
                    .with_id(self.pointer),
            );
        }

        let end = start + steps * step_ms + hold_ms;
        let last = if cancel {
            PointerEvent::cancel(end)
        } else {
            PointerEvent::up(x0 + dx, y0 + dy, end)
        };
        events.push(last.with_id(self.pointer));
        self.clock_ms = end;
        events
    }
}
