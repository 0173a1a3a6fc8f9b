//! Swipe scripts: one character per gesture.

use anyhow::{bail, Result};
use snapsort_foundation::PointerEvent;
use snapsort_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriageStep {
    /// `r`: fling right.
    Save,
    /// `l`: fling left.
    Discard,
    /// `h`: short drag that springs back, followed by a save.
    Hesitate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryStep {
    /// `n`
    Next,
    /// `p`
    Previous,
    /// `f`
    Favorite,
    /// `d`
    Delete,
}

pub fn parse_triage(script: &str) -> Result<Vec<TriageStep>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'r' => Ok(TriageStep::Save),
            'l' => Ok(TriageStep::Discard),
            'h' => Ok(TriageStep::Hesitate),
            other => bail!("unknown triage step {other:?}; expected r, l or h"),
        })
        .collect()
}

pub fn parse_gallery(script: &str) -> Result<Vec<GalleryStep>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'n' => Ok(GalleryStep::Next),
            'p' => Ok(GalleryStep::Previous),
            'f' => Ok(GalleryStep::Favorite),
            'd' => Ok(GalleryStep::Delete),
            other => bail!("unknown gallery step {other:?}; expected n, p, f or d"),
        })
        .collect()
}

/// Emits pointer sequences on a shared millisecond clock.
pub struct GestureScript {
    origin: Point,
    clock_ms: u64,
}

impl GestureScript {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            clock_ms: 0,
        }
    }

    /// Quick flick ending at `dx`.
    pub fn fling(&mut self, dx: f32) -> Vec<PointerEvent> {
        self.drag(dx, 4, 8, 0)
    }

    /// Slow drag to `dx`, held still before lifting.
    pub fn nudge(&mut self, dx: f32) -> Vec<PointerEvent> {
        self.drag(dx, 10, 16, 100)
    }

    fn drag(&mut self, dx: f32, steps: u64, step_ms: u64, hold_ms: u64) -> Vec<PointerEvent> {
        let start = self.clock_ms + 250;
        let Point { x, y } = self.origin;
        let mut events = vec![PointerEvent::down(x, y, start)];
        events.extend((1..=steps).map(|step| {
            PointerEvent::moved(x + dx * step as f32 / steps as f32, y, start + step * step_ms)
        }));
        self.clock_ms = start + steps * step_ms + hold_ms;
        events.push(PointerEvent::up(x + dx, y, self.clock_ms));
        events
    }
}
