use snapsort_graphics::Size;

use crate::gesture_constants::{
    MAX_ROTATION_DEGREES, NAVIGATION_DISTANCE_FRACTION, TRIAGE_DISTANCE_FRACTION,
    VELOCITY_THRESHOLD, VERTICAL_DAMPING,
};

/// Physical swipe direction on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Sign of the horizontal axis pointing this way.
    pub fn sign(&self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            SwipeDirection::Left => SwipeDirection::Right,
            SwipeDirection::Right => SwipeDirection::Left,
        }
    }
}

/// Which physical direction a surface treats as "forward".
///
/// The triage screen saves on a right swipe; the gallery advances on a left
/// swipe, like turning a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeConvention {
    RightIsForward,
    LeftIsForward,
}

impl SwipeConvention {
    pub fn forward(&self) -> SwipeDirection {
        match self {
            SwipeConvention::RightIsForward => SwipeDirection::Right,
            SwipeConvention::LeftIsForward => SwipeDirection::Left,
        }
    }

    pub fn backward(&self) -> SwipeDirection {
        self.forward().opposite()
    }

    /// Multiplier mapping screen-space x onto the forward axis.
    pub fn forward_sign(&self) -> f32 {
        self.forward().sign()
    }
}

/// Immutable swipe configuration, shared read-only by every session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThresholds {
    /// Commit distance as a fraction of the viewport width.
    pub distance_threshold: f32,
    /// Commit velocity in units per second.
    pub velocity_threshold: f32,
    pub max_rotation_degrees: f32,
    /// Share of the vertical drag applied to the card.
    pub vertical_damping_factor: f32,
}

impl SwipeThresholds {
    pub fn triage() -> Self {
        Self {
            distance_threshold: TRIAGE_DISTANCE_FRACTION,
            velocity_threshold: VELOCITY_THRESHOLD,
            max_rotation_degrees: MAX_ROTATION_DEGREES,
            vertical_damping_factor: VERTICAL_DAMPING,
        }
    }

    pub fn navigation() -> Self {
        Self {
            distance_threshold: NAVIGATION_DISTANCE_FRACTION,
            ..Self::triage()
        }
    }

    pub fn with_distance_threshold(mut self, fraction: f32) -> Self {
        self.distance_threshold = fraction;
        self
    }

    pub fn with_velocity_threshold(mut self, velocity: f32) -> Self {
        self.velocity_threshold = velocity;
        self
    }

    pub fn with_max_rotation(mut self, degrees: f32) -> Self {
        self.max_rotation_degrees = degrees;
        self
    }

    pub fn with_vertical_damping(mut self, factor: f32) -> Self {
        self.vertical_damping_factor = factor;
        self
    }

    /// Convert the fractional distance into viewport units.
    pub fn resolve(&self, viewport: Size) -> ResolvedThresholds {
        ResolvedThresholds {
            distance: self.distance_threshold * viewport.width,
            velocity: self.velocity_threshold,
            viewport_width: viewport.width,
            max_rotation_degrees: self.max_rotation_degrees,
            vertical_damping_factor: self.vertical_damping_factor,
        }
    }
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self::triage()
    }
}

/// Thresholds in absolute viewport units, ready for per-frame math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedThresholds {
    pub distance: f32,
    pub velocity: f32,
    pub viewport_width: f32,
    pub max_rotation_degrees: f32,
    pub vertical_damping_factor: f32,
}

impl ResolvedThresholds {
    pub fn half_viewport_width(&self) -> f32 {
        self.viewport_width * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_only_in_distance() {
        let triage = SwipeThresholds::triage();
        let navigation = SwipeThresholds::navigation();
        assert_eq!(triage.distance_threshold, 0.3);
        assert_eq!(navigation.distance_threshold, 0.25);
        assert_eq!(
            navigation.with_distance_threshold(0.3),
            triage,
            "everything else is shared"
        );
    }

    #[test]
    fn resolve_scales_distance_by_viewport_width() {
        let resolved = SwipeThresholds::triage().resolve(Size::new(400.0, 800.0));
        assert!((resolved.distance - 120.0).abs() < 1e-4);
        assert_eq!(resolved.half_viewport_width(), 200.0);
        assert_eq!(resolved.velocity, 500.0);
    }

    #[test]
    fn conventions_are_mirrored() {
        assert_eq!(SwipeConvention::RightIsForward.forward(), SwipeDirection::Right);
        assert_eq!(SwipeConvention::LeftIsForward.forward(), SwipeDirection::Left);
        assert_eq!(SwipeConvention::LeftIsForward.backward(), SwipeDirection::Right);
        assert_eq!(SwipeConvention::LeftIsForward.forward_sign(), -1.0);
    }
}
