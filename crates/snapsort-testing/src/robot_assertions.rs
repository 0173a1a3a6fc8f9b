//! Assertion utilities for swipe tests.

use snapsort_foundation::{SwipeFeedback, SwipeFrame};
use snapsort_graphics::GraphicsLayer;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that an element is exactly at rest: no displacement, full size.
pub fn assert_at_rest(frame: SwipeFrame, feedback: SwipeFeedback, msg: &str) {
    assert_eq!(frame, SwipeFrame::REST, "{msg}: displacement");
    assert_eq!(feedback.layer, GraphicsLayer::IDENTITY, "{msg}: layer");
}

/// Assert that a collection has an expected count.
pub fn assert_count<T: std::fmt::Debug>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {:?}",
        msg,
        expected,
        items
    );
}
