//! Per-frame visual projections of a swipe.
//!
//! Every function here is a pure function of the current displacement and
//! the resolved thresholds, so renderers can call them every frame in any
//! order without shared mutable state.

use snapsort_graphics::GraphicsLayer;

use super::thresholds::{ResolvedThresholds, SwipeDirection};
use crate::gesture_constants::{
    INDICATOR_FADE_END, INDICATOR_FADE_START, INDICATOR_MAX_SCALE, INDICATOR_MIN_SCALE,
    INDICATOR_TILT_DEGREES, NAVIGATION_MIN_OPACITY, NAVIGATION_MIN_SCALE, TRIAGE_MIN_OPACITY,
};

/// Behaviour outside the input range of [`interpolate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrapolation {
    /// Hold the nearest output endpoint.
    Clamp,
    /// Continue the slope of the nearest segment.
    Extend,
}

/// Piecewise-linear mapping of `value` from `input` onto `output`.
///
/// `input` must be ascending and the same length as `output` (at least two
/// points). Degenerate input yields the first output value.
pub fn interpolate(value: f32, input: &[f32], output: &[f32], extrapolation: Extrapolation) -> f32 {
    debug_assert_eq!(input.len(), output.len());
    let len = input.len().min(output.len());
    if len == 0 {
        return value;
    }
    if len == 1 {
        return output[0];
    }

    let last = len - 1;
    if extrapolation == Extrapolation::Clamp {
        if value <= input[0] {
            return output[0];
        }
        if value >= input[last] {
            return output[last];
        }
    }

    let segment = input[..len]
        .windows(2)
        .position(|pair| value <= pair[1])
        .unwrap_or(last - 1);
    let (in_lo, in_hi) = (input[segment], input[segment + 1]);
    let (out_lo, out_hi) = (output[segment], output[segment + 1]);
    let span = in_hi - in_lo;
    if span.abs() < f32::EPSILON {
        return out_lo;
    }
    out_lo + (value - in_lo) / span * (out_hi - out_lo)
}

/// Which surface the feedback is rendered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackVariant {
    /// Triage card: tilts, follows vertically, fades to half opacity.
    Triage,
    /// Gallery filmstrip: stays level, shrinks slightly, fades further.
    Navigation,
}

/// Raw animated state of the swiped element.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SwipeFrame {
    pub displacement_x: f32,
    /// Undamped vertical drag.
    pub displacement_y: f32,
}

impl SwipeFrame {
    pub const REST: SwipeFrame = SwipeFrame {
        displacement_x: 0.0,
        displacement_y: 0.0,
    };
}

/// Which physical directions currently have an action bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionBindings {
    pub left: bool,
    pub right: bool,
}

impl DirectionBindings {
    pub const BOTH: DirectionBindings = DirectionBindings {
        left: true,
        right: true,
    };
    pub const NONE: DirectionBindings = DirectionBindings {
        left: false,
        right: false,
    };

    pub fn is_bound(&self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Left => self.left,
            SwipeDirection::Right => self.right,
        }
    }
}

impl Default for DirectionBindings {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Style of one direction badge ("save", "discard", "next", ...).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStyle {
    pub opacity: f32,
    pub scale: f32,
    pub rotation_degrees: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionIndicators {
    /// Badge revealed by dragging left.
    pub left: IndicatorStyle,
    /// Badge revealed by dragging right.
    pub right: IndicatorStyle,
}

impl DirectionIndicators {
    pub fn get(&self, direction: SwipeDirection) -> IndicatorStyle {
        match direction {
            SwipeDirection::Left => self.left,
            SwipeDirection::Right => self.right,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeFeedback {
    pub layer: GraphicsLayer,
    pub indicators: DirectionIndicators,
}

/// Card tilt: ±max rotation at ±half the viewport width, clamped beyond.
pub fn rotation_degrees(displacement_x: f32, thresholds: &ResolvedThresholds) -> f32 {
    let half = thresholds.half_viewport_width();
    let max = thresholds.max_rotation_degrees;
    if displacement_x == 0.0 {
        return 0.0;
    }
    interpolate(
        displacement_x,
        &[-half, 0.0, half],
        &[-max, 0.0, max],
        Extrapolation::Clamp,
    )
}

pub fn opacity(displacement_x: f32, variant: FeedbackVariant, thresholds: &ResolvedThresholds) -> f32 {
    let distance = displacement_x.abs();
    match variant {
        FeedbackVariant::Triage => interpolate(
            distance,
            &[0.0, thresholds.distance],
            &[1.0, TRIAGE_MIN_OPACITY],
            Extrapolation::Clamp,
        ),
        FeedbackVariant::Navigation => interpolate(
            distance,
            &[0.0, 2.0 * thresholds.distance],
            &[1.0, NAVIGATION_MIN_OPACITY],
            Extrapolation::Clamp,
        ),
    }
}

/// Gallery cards shrink towards 90% over a full viewport of travel; triage
/// cards keep their size.
pub fn scale(displacement_x: f32, variant: FeedbackVariant, thresholds: &ResolvedThresholds) -> f32 {
    match variant {
        FeedbackVariant::Triage => 1.0,
        FeedbackVariant::Navigation => interpolate(
            displacement_x.abs(),
            &[0.0, thresholds.viewport_width],
            &[1.0, NAVIGATION_MIN_SCALE],
            Extrapolation::Clamp,
        ),
    }
}

pub fn damped_vertical(displacement_y: f32, thresholds: &ResolvedThresholds) -> f32 {
    displacement_y * thresholds.vertical_damping_factor
}

/// Badge for `direction`, fully suppressed when nothing is bound to it.
pub fn indicator_style(
    displacement_x: f32,
    direction: SwipeDirection,
    bound: bool,
    thresholds: &ResolvedThresholds,
) -> IndicatorStyle {
    let rotation_degrees = direction.sign() * INDICATOR_TILT_DEGREES;
    // Distance travelled towards this badge's direction; negative when
    // dragging away from it.
    let toward = displacement_x * direction.sign();
    let distance = thresholds.distance;

    let scale = interpolate(
        toward,
        &[0.0, distance],
        &[INDICATOR_MIN_SCALE, INDICATOR_MAX_SCALE],
        Extrapolation::Clamp,
    );
    let opacity = if bound {
        interpolate(
            toward,
            &[distance * INDICATOR_FADE_START, distance * INDICATOR_FADE_END],
            &[0.0, 1.0],
            Extrapolation::Clamp,
        )
    } else {
        0.0
    };

    IndicatorStyle {
        opacity,
        scale,
        rotation_degrees,
    }
}

/// Project the raw frame into the full render state.
pub fn project_feedback(
    frame: SwipeFrame,
    variant: FeedbackVariant,
    bindings: DirectionBindings,
    thresholds: &ResolvedThresholds,
) -> SwipeFeedback {
    let dx = frame.displacement_x;
    let (rotation_z, translation_y) = match variant {
        FeedbackVariant::Triage => (
            rotation_degrees(dx, thresholds),
            damped_vertical(frame.displacement_y, thresholds),
        ),
        FeedbackVariant::Navigation => (0.0, 0.0),
    };

    SwipeFeedback {
        layer: GraphicsLayer {
            alpha: opacity(dx, variant, thresholds),
            scale: scale(dx, variant, thresholds),
            translation_x: dx,
            translation_y,
            rotation_z,
        },
        indicators: DirectionIndicators {
            left: indicator_style(dx, SwipeDirection::Left, bindings.left, thresholds),
            right: indicator_style(dx, SwipeDirection::Right, bindings.right, thresholds),
        },
    }
}

#[cfg(test)]
#[path = "../tests/feedback_tests.rs"]
mod tests;
