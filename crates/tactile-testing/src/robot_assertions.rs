//! Assertion utilities for robot testing
//!
//! Helpers for validating recorded gesture streams with readable failure
//! messages.

use crate::robot::RecordedGesture;
use tactile_foundation::{GestureEvent, GestureKind};

/// Assert that a value is within an expected range.
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

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}

/// Assert that exactly `expected` gestures of `kind` were recorded.
pub fn assert_gesture_count(recorded: &[RecordedGesture], kind: GestureKind, expected: usize) {
    let actual = recorded
        .iter()
        .filter(|gesture| gesture.event.kind() == kind)
        .count();
    assert_eq!(
        actual,
        expected,
        "expected {} {} gesture(s), got {} in {:?}",
        expected,
        kind,
        actual,
        kinds_of(recorded)
    );
}

/// Assert that the recorded gesture kinds are exactly `expected`, in order.
pub fn assert_kinds(recorded: &[RecordedGesture], expected: &[GestureKind]) {
    let actual = kinds_of(recorded);
    assert_eq!(actual, expected, "unexpected gesture sequence");
}

/// Assert that no tap-family gesture was recorded.
pub fn assert_no_taps(recorded: &[RecordedGesture], msg: &str) {
    let taps: Vec<&RecordedGesture> = recorded
        .iter()
        .filter(|gesture| {
            matches!(
                gesture.event,
                GestureEvent::Click(_) | GestureEvent::DoubleClick(_) | GestureEvent::LongClick(_)
            )
        })
        .collect();
    assert!(taps.is_empty(), "{}: unexpected taps {:?}", msg, taps);
}

fn kinds_of(recorded: &[RecordedGesture]) -> Vec<GestureKind> {
    recorded.iter().map(|gesture| gesture.event.kind()).collect()
}
