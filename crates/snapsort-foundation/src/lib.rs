//! Pointer input and the swipe gesture primitives for Snapsort.
//!
//! The pieces here are deliberately free of scheduling: the tracker consumes
//! pointer events, the classifier and the feedback projections are pure
//! functions, and the haptic detector is a two-state edge trigger. Timing and
//! animation live one layer up.

pub mod gesture_constants;
pub mod input;
pub mod swipe;
pub mod velocity_tracker;

pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use swipe::*;
pub use velocity_tracker::VelocityTracker1D;
