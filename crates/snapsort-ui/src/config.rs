use snapsort_animation::{AnimationSpec, Easing, SpringSpec};
use snapsort_foundation::gesture_constants::{
    NAVIGATION_COMMIT_MILLIS, TRIAGE_COMMIT_MILLIS, TRIAGE_FLY_OFF_OVERSHOOT,
};
use snapsort_foundation::{FeedbackVariant, ResolvedThresholds, SwipeConvention, SwipeThresholds};
use snapsort_graphics::Size;

/// Everything a [`SwipeAnimator`](crate::SwipeAnimator) needs to know about
/// one swipe surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    pub thresholds: SwipeThresholds,
    pub viewport: Size,
    pub variant: FeedbackVariant,
    pub convention: SwipeConvention,
    /// Fly-off tween duration.
    pub commit_millis: u64,
    pub commit_easing: Easing,
    /// Extra travel past the viewport edge when flying off.
    pub fly_off_overshoot: f32,
    /// Spring used for spring-back and for the entry slide.
    pub spring: SpringSpec,
    /// Slide the replacement element in from the opposite edge after a commit.
    pub entry_slide: bool,
}

impl SwipeConfig {
    /// Photo triage card: right saves, left discards.
    pub fn triage(viewport: Size) -> Self {
        Self {
            thresholds: SwipeThresholds::triage(),
            viewport,
            variant: FeedbackVariant::Triage,
            convention: SwipeConvention::RightIsForward,
            commit_millis: TRIAGE_COMMIT_MILLIS,
            commit_easing: Easing::FastOutSlowInEasing,
            fly_off_overshoot: TRIAGE_FLY_OFF_OVERSHOOT,
            spring: SpringSpec::swipe_return(),
            entry_slide: false,
        }
    }

    /// Gallery filmstrip: left advances, right goes back.
    pub fn navigation(viewport: Size) -> Self {
        Self {
            thresholds: SwipeThresholds::navigation(),
            viewport,
            variant: FeedbackVariant::Navigation,
            convention: SwipeConvention::LeftIsForward,
            commit_millis: NAVIGATION_COMMIT_MILLIS,
            commit_easing: Easing::EaseInOut,
            fly_off_overshoot: 0.0,
            spring: SpringSpec::swipe_return(),
            entry_slide: true,
        }
    }

    pub fn with_thresholds(mut self, thresholds: SwipeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_commit_millis(mut self, commit_millis: u64) -> Self {
        self.commit_millis = commit_millis;
        self
    }

    pub fn with_spring(mut self, spring: SpringSpec) -> Self {
        self.spring = spring;
        self
    }

    pub fn with_entry_slide(mut self, entry_slide: bool) -> Self {
        self.entry_slide = entry_slide;
        self
    }

    pub fn resolved(&self) -> ResolvedThresholds {
        self.thresholds.resolve(self.viewport)
    }

    pub(crate) fn commit_animation(&self) -> AnimationSpec {
        AnimationSpec::tween(self.commit_millis, self.commit_easing)
    }

    /// Distance from center at which the element is fully off screen.
    pub(crate) fn fly_off_distance(&self) -> f32 {
        self.viewport.width + self.fly_off_overshoot
    }
}
