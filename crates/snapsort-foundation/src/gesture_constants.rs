//! Shared gesture constants for the triage and gallery swipe surfaces.
//!
//! Distances are expressed either as fractions of the viewport width or in
//! logical pixels; velocities are logical pixels per second.

/// Fraction of the viewport width a triage swipe must travel to commit.
pub const TRIAGE_DISTANCE_FRACTION: f32 = 0.3;

/// Fraction of the viewport width a gallery swipe must travel to commit.
pub const NAVIGATION_DISTANCE_FRACTION: f32 = 0.25;

/// Release velocity that commits a swipe regardless of distance.
pub const VELOCITY_THRESHOLD: f32 = 500.0;

/// Maximum card tilt, reached at half the viewport width.
pub const MAX_ROTATION_DEGREES: f32 = 15.0;

/// Share of the vertical drag that the card follows.
pub const VERTICAL_DAMPING: f32 = 0.3;

/// Maximum velocity reported by the tracker in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Fly-off duration of a committed triage swipe.
pub const TRIAGE_COMMIT_MILLIS: u64 = 300;

/// Fly-off duration of a committed gallery swipe.
pub const NAVIGATION_COMMIT_MILLIS: u64 = 200;

/// Extra distance past the viewport edge a triage card flies to, so its
/// rotated corner is fully off screen.
pub const TRIAGE_FLY_OFF_OVERSHOOT: f32 = 100.0;

/// Lowest card opacity while dragging on the triage screen.
pub const TRIAGE_MIN_OPACITY: f32 = 0.5;

/// Lowest card opacity while dragging in the gallery.
pub const NAVIGATION_MIN_OPACITY: f32 = 0.3;

/// Lowest card scale while dragging in the gallery.
pub const NAVIGATION_MIN_SCALE: f32 = 0.9;

/// Indicator fade band, as fractions of the distance threshold.
pub const INDICATOR_FADE_START: f32 = 0.2;
pub const INDICATOR_FADE_END: f32 = 0.5;

/// Indicator scale at rest and at the distance threshold.
pub const INDICATOR_MIN_SCALE: f32 = 0.8;
pub const INDICATOR_MAX_SCALE: f32 = 1.2;

/// Fixed tilt of the direction badges.
pub const INDICATOR_TILT_DEGREES: f32 = 15.0;
