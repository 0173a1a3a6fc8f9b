//! Edge-triggered haptic pulses for threshold crossings.

use super::thresholds::SwipeDirection;

/// Discrete haptic events the engine can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticPulse {
    /// The drag just reached the commit distance in this direction.
    ThresholdCrossed(SwipeDirection),
    /// A photo was marked as favorite.
    FavoriteAdded,
}

/// Platform hook that plays haptic pulses. Implementations must not block.
pub trait HapticFeedback {
    fn pulse(&self, pulse: HapticPulse);
}

/// Haptics sink for platforms without a vibration motor.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn pulse(&self, _pulse: HapticPulse) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThresholdState {
    #[default]
    BelowThreshold,
    AtOrAboveThreshold,
}

/// Per-direction two-state machine that reports only the transition from
/// below to at/above the distance threshold.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThresholdCrossingDetector {
    left: ThresholdState,
    right: ThresholdState,
}

impl ThresholdCrossingDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous sample; call when a new drag starts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn state(&self, direction: SwipeDirection) -> ThresholdState {
        match direction {
            SwipeDirection::Left => self.left,
            SwipeDirection::Right => self.right,
        }
    }

    /// Feed the live displacement; returns the direction whose threshold was
    /// crossed by this sample, if any.
    pub fn observe(&mut self, displacement_x: f32, distance_threshold: f32) -> Option<SwipeDirection> {
        let mut crossed = None;
        for direction in [SwipeDirection::Left, SwipeDirection::Right] {
            let reached = displacement_x * direction.sign() >= distance_threshold;
            let state = match direction {
                SwipeDirection::Left => &mut self.left,
                SwipeDirection::Right => &mut self.right,
            };
            match (*state, reached) {
                (ThresholdState::BelowThreshold, true) => {
                    *state = ThresholdState::AtOrAboveThreshold;
                    crossed = Some(direction);
                }
                (ThresholdState::AtOrAboveThreshold, false) => {
                    *state = ThresholdState::BelowThreshold;
                }
                _ => {}
            }
        }
        crossed
    }
}
