use super::thresholds::ResolvedThresholds;

/// Result of classifying a released swipe, on the forward axis of its surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeOutcome {
    None,
    Forward,
    Backward,
}

/// Decide commit-vs-cancel for a release.
///
/// `displacement` and `velocity` are measured along the forward axis. Distance
/// and velocity are checked independently, so either alone commits; the
/// forward checks win if a release somehow satisfies both directions.
pub fn classify_swipe(displacement: f32, velocity: f32, thresholds: &ResolvedThresholds) -> SwipeOutcome {
    if displacement >= thresholds.distance || velocity > thresholds.velocity {
        SwipeOutcome::Forward
    } else if displacement <= -thresholds.distance || velocity < -thresholds.velocity {
        SwipeOutcome::Backward
    } else {
        SwipeOutcome::None
    }
}
