use super::*;

use crate::swipe::SwipeThresholds;
use snapsort_graphics::Size;

fn triage_thresholds() -> ResolvedThresholds {
    // 400 wide: distance 120, half width 200.
    SwipeThresholds::triage().resolve(Size::new(400.0, 800.0))
}

fn navigation_thresholds() -> ResolvedThresholds {
    // 400 wide: distance 100.
    SwipeThresholds::navigation().resolve(Size::new(400.0, 800.0))
}

fn approx(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn interpolate_clamps_and_extends() {
    let input = [0.0, 10.0];
    let output = [1.0, 0.5];
    approx(interpolate(5.0, &input, &output, Extrapolation::Clamp), 0.75);
    approx(interpolate(20.0, &input, &output, Extrapolation::Clamp), 0.5);
    approx(interpolate(-5.0, &input, &output, Extrapolation::Clamp), 1.0);
    approx(interpolate(20.0, &input, &output, Extrapolation::Extend), 0.0);
    approx(interpolate(-10.0, &input, &output, Extrapolation::Extend), 1.5);
}

#[test]
fn interpolate_handles_three_point_ranges() {
    let input = [-100.0, 0.0, 100.0];
    let output = [-10.0, 0.0, 30.0];
    approx(interpolate(-50.0, &input, &output, Extrapolation::Clamp), -5.0);
    approx(interpolate(50.0, &input, &output, Extrapolation::Clamp), 15.0);
}

#[test]
fn rotation_is_zero_at_rest_and_max_at_half_viewport() {
    let t = triage_thresholds();
    assert_eq!(rotation_degrees(0.0, &t), 0.0);
    assert_eq!(rotation_degrees(200.0, &t), 15.0);
    assert_eq!(rotation_degrees(-200.0, &t), -15.0);
    approx(rotation_degrees(100.0, &t), 7.5);
}

#[test]
fn rotation_clamps_beyond_half_viewport() {
    let t = triage_thresholds();
    assert_eq!(rotation_degrees(350.0, &t), 15.0);
    assert_eq!(rotation_degrees(-9_000.0, &t), -15.0);
}

#[test]
fn triage_opacity_fades_to_half_at_threshold() {
    let t = triage_thresholds();
    assert_eq!(opacity(0.0, FeedbackVariant::Triage, &t), 1.0);
    approx(opacity(60.0, FeedbackVariant::Triage, &t), 0.75);
    approx(opacity(-60.0, FeedbackVariant::Triage, &t), 0.75);
    assert_eq!(opacity(500.0, FeedbackVariant::Triage, &t), 0.5);
}

#[test]
fn navigation_opacity_fades_over_twice_the_threshold() {
    let t = navigation_thresholds();
    approx(opacity(100.0, FeedbackVariant::Navigation, &t), 0.65);
    assert_eq!(opacity(-200.0, FeedbackVariant::Navigation, &t), 0.3);
    assert_eq!(opacity(1_000.0, FeedbackVariant::Navigation, &t), 0.3);
}

#[test]
fn navigation_scale_never_drops_below_ninety_percent() {
    let t = navigation_thresholds();
    assert_eq!(scale(0.0, FeedbackVariant::Navigation, &t), 1.0);
    approx(scale(200.0, FeedbackVariant::Navigation, &t), 0.95);
    assert_eq!(scale(-400.0, FeedbackVariant::Navigation, &t), 0.9);
    assert_eq!(scale(4_000.0, FeedbackVariant::Navigation, &t), 0.9);
    assert_eq!(scale(300.0, FeedbackVariant::Triage, &t), 1.0);
}

#[test]
fn vertical_follow_is_damped() {
    let t = triage_thresholds();
    approx(damped_vertical(100.0, &t), 30.0);
    approx(damped_vertical(-40.0, &t), -12.0);
}

#[test]
fn indicator_fades_in_between_twenty_and_fifty_percent() {
    let t = triage_thresholds();
    // 20% of 120 = 24, 50% = 60.
    let hidden = indicator_style(24.0, SwipeDirection::Right, true, &t);
    let half = indicator_style(42.0, SwipeDirection::Right, true, &t);
    let full = indicator_style(60.0, SwipeDirection::Right, true, &t);
    assert_eq!(hidden.opacity, 0.0);
    approx(half.opacity, 0.5);
    approx(full.opacity, 1.0);

    let opposite = indicator_style(60.0, SwipeDirection::Left, true, &t);
    assert_eq!(opposite.opacity, 0.0);
    assert_eq!(opposite.scale, 0.8);
}

#[test]
fn indicator_scale_ramps_over_full_threshold() {
    let t = triage_thresholds();
    assert_eq!(indicator_style(0.0, SwipeDirection::Left, true, &t).scale, 0.8);
    approx(indicator_style(-60.0, SwipeDirection::Left, true, &t).scale, 1.0);
    approx(indicator_style(-120.0, SwipeDirection::Left, true, &t).scale, 1.2);
    assert_eq!(indicator_style(-480.0, SwipeDirection::Left, true, &t).scale, 1.2);
}

#[test]
fn unbound_indicator_is_suppressed() {
    let t = navigation_thresholds();
    for displacement in [0.0, 50.0, 100.0, 1_000.0] {
        let style = indicator_style(displacement, SwipeDirection::Right, false, &t);
        assert_eq!(style.opacity, 0.0, "displacement {displacement}");
    }
}

#[test]
fn indicators_tilt_towards_their_side() {
    let t = triage_thresholds();
    assert_eq!(
        indicator_style(0.0, SwipeDirection::Left, true, &t).rotation_degrees,
        -15.0
    );
    assert_eq!(
        indicator_style(0.0, SwipeDirection::Right, true, &t).rotation_degrees,
        15.0
    );
}

#[test]
fn rest_frame_projects_to_identity_layer() {
    for (variant, t) in [
        (FeedbackVariant::Triage, triage_thresholds()),
        (FeedbackVariant::Navigation, navigation_thresholds()),
    ] {
        let feedback = project_feedback(SwipeFrame::REST, variant, DirectionBindings::BOTH, &t);
        assert!(feedback.layer.is_identity(), "{variant:?}: {:?}", feedback.layer);
        assert_eq!(feedback.indicators.left.opacity, 0.0);
        assert_eq!(feedback.indicators.right.opacity, 0.0);
    }
}

#[test]
fn triage_projection_combines_all_channels() {
    let t = triage_thresholds();
    let frame = SwipeFrame {
        displacement_x: 100.0,
        displacement_y: 50.0,
    };
    let feedback = project_feedback(frame, FeedbackVariant::Triage, DirectionBindings::BOTH, &t);

    approx(feedback.layer.translation_x, 100.0);
    approx(feedback.layer.translation_y, 15.0);
    approx(feedback.layer.rotation_z, 7.5);
    assert!(feedback.layer.alpha < 1.0 && feedback.layer.alpha > 0.5);
    assert_eq!(feedback.indicators.get(SwipeDirection::Right).opacity, 1.0);
    assert_eq!(feedback.indicators.get(SwipeDirection::Left).opacity, 0.0);
}

#[test]
fn navigation_projection_stays_level() {
    let t = navigation_thresholds();
    let frame = SwipeFrame {
        displacement_x: -150.0,
        displacement_y: 80.0,
    };
    let bindings = DirectionBindings {
        left: true,
        right: false,
    };
    let feedback = project_feedback(frame, FeedbackVariant::Navigation, bindings, &t);

    assert_eq!(feedback.layer.rotation_z, 0.0);
    assert_eq!(feedback.layer.translation_y, 0.0);
    assert!(feedback.layer.scale < 1.0);
    assert_eq!(feedback.indicators.left.opacity, 1.0);
    assert_eq!(feedback.indicators.right.opacity, 0.0);
}
