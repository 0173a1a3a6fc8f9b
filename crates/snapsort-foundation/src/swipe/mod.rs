//! Swipe gesture primitives shared by the triage and gallery surfaces.

mod classifier;
mod feedback;
mod haptics;
mod thresholds;
mod tracker;

pub use classifier::{classify_swipe, SwipeOutcome};
pub use feedback::{
    damped_vertical, indicator_style, interpolate, opacity, project_feedback, rotation_degrees,
    scale, DirectionBindings, DirectionIndicators, Extrapolation, FeedbackVariant, IndicatorStyle,
    SwipeFeedback, SwipeFrame,
};
pub use haptics::{
    HapticFeedback, HapticPulse, NoopHaptics, ThresholdCrossingDetector, ThresholdState,
};
pub use thresholds::{ResolvedThresholds, SwipeConvention, SwipeDirection, SwipeThresholds};
pub use tracker::{GestureSample, SwipeRelease, SwipeTracker, TrackerEvent};
