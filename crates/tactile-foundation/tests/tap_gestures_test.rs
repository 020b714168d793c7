//! Tap, double-tap, long-press and show-press recognition driven through
//! the robot harness on a virtual clock.

use tactile_foundation::{GestureConfig, GestureEvent, GestureKind, LongPressOrigin, Point};
use tactile_testing::robot_assertions::{assert_gesture_count, assert_kinds, assert_no_taps};
use tactile_testing::GestureRobot;

#[test]
fn single_tap_clicks_once_after_grace_window() {
    let mut robot = GestureRobot::new();
    robot.press(0.0, 0.0, 0).release(0.0, 0.0, 50);

    robot.advance_to(299);
    assert_gesture_count(&robot.events(), GestureKind::Click, 0);

    robot.advance_to(5_000);
    let clicks = robot.of_kind(GestureKind::Click);
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].at, 300);
    assert_eq!(clicks[0].event, GestureEvent::Click(Point::new(0.0, 0.0)));
    assert!(robot.rejections().is_empty());
}

#[test]
fn click_is_measured_from_press_start() {
    let mut robot = GestureRobot::new();
    robot.tap(40.0, 60.0, 1_000, 120).settle();

    assert_kinds(&robot.events(), &[GestureKind::ShowPress, GestureKind::Click]);
    let events = robot.events();
    assert_eq!(events[0].at, 1_100);
    assert_eq!(events[1].at, 1_300);
    assert_eq!(events[1].event, GestureEvent::Click(Point::new(40.0, 60.0)));
}

#[test]
fn quick_tap_has_no_show_press() {
    let mut robot = GestureRobot::new();
    robot.tap(0.0, 0.0, 0, 50).settle();
    assert_kinds(&robot.events(), &[GestureKind::Click]);
}

#[test]
fn small_jitter_within_slop_is_still_a_tap() {
    let mut robot = GestureRobot::new();
    robot
        .press(100.0, 100.0, 0)
        .move_to(104.0, 97.0, 10)
        .move_to(108.0, 92.0, 20)
        .release(106.0, 100.0, 40)
        .settle();

    assert_kinds(&robot.events(), &[GestureKind::Click]);
    assert_eq!(
        robot.gestures(),
        vec![GestureEvent::Click(Point::new(100.0, 100.0))]
    );
}

#[test]
fn double_tap_emits_one_double_click_and_no_click() {
    let mut robot = GestureRobot::new();
    robot
        .tap(0.0, 0.0, 0, 50)
        .press(0.0, 0.0, 250)
        .release(0.0, 0.0, 280)
        .settle();

    assert_kinds(&robot.events(), &[GestureKind::DoubleClick]);
    let double = robot.of_kind(GestureKind::DoubleClick);
    assert_eq!(double[0].at, 280);
    assert_eq!(double[0].event, GestureEvent::DoubleClick(Point::ZERO));
    assert!(robot.recognizer().is_settled());
}

#[test]
fn double_tap_reports_release_position() {
    let mut robot = GestureRobot::new();
    robot
        .tap(10.0, 10.0, 0, 40)
        .press(14.0, 7.0, 120)
        .release(15.0, 9.0, 160)
        .settle();

    assert_eq!(
        robot.gestures(),
        vec![GestureEvent::DoubleClick(Point::new(15.0, 9.0))]
    );
}

#[test]
fn tap_after_double_tap_does_not_revive_stale_confirmation() {
    let mut robot = GestureRobot::new();
    robot
        .tap(0.0, 0.0, 0, 50)
        .tap(0.0, 0.0, 250, 30)
        .tap(0.0, 0.0, 290, 5)
        .settle();

    assert_kinds(&robot.events(), &[GestureKind::DoubleClick, GestureKind::Click]);
    let click = robot.of_kind(GestureKind::Click);
    assert_eq!(click[0].at, 590);
}

#[test]
fn second_press_in_progress_blocks_first_confirmation() {
    let mut robot = GestureRobot::new();
    // Second press is still down when the first press's window closes.
    robot
        .tap(0.0, 0.0, 0, 50)
        .press(0.0, 0.0, 250)
        .advance_to(320);
    assert_gesture_count(&robot.events(), GestureKind::Click, 0);

    robot.release(0.0, 0.0, 400).settle();
    assert_gesture_count(&robot.events(), GestureKind::DoubleClick, 1);
    assert_gesture_count(&robot.events(), GestureKind::Click, 0);
}

#[test]
fn displaced_second_tap_clicks_separately() {
    let mut robot = GestureRobot::new();
    robot
        .tap(0.0, 0.0, 0, 50)
        .tap(50.0, 50.0, 250, 30)
        .settle();

    assert_gesture_count(&robot.events(), GestureKind::DoubleClick, 0);
    let clicks = robot.of_kind(GestureKind::Click);
    assert_eq!(clicks.len(), 2);
    assert_eq!(clicks[0].at, 300);
    assert_eq!(clicks[0].event, GestureEvent::Click(Point::ZERO));
    assert_eq!(clicks[1].at, 550);
    assert_eq!(clicks[1].event, GestureEvent::Click(Point::new(50.0, 50.0)));
}

#[test]
fn displaced_press_still_held_does_not_block_earlier_tap() {
    let mut robot = GestureRobot::new();
    robot
        .tap(0.0, 0.0, 0, 50)
        .press(50.0, 50.0, 250)
        .advance_to(300);

    let clicks = robot.of_kind(GestureKind::Click);
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].event, GestureEvent::Click(Point::ZERO));
}

#[test]
fn taps_outside_grace_window_are_two_clicks() {
    let mut robot = GestureRobot::new();
    robot.tap(0.0, 0.0, 0, 50).tap(0.0, 0.0, 400, 50).settle();

    assert_kinds(&robot.events(), &[GestureKind::Click, GestureKind::Click]);
    let at: Vec<u64> = robot.events().iter().map(|gesture| gesture.at).collect();
    assert_eq!(at, vec![300, 700]);
}

#[test]
fn long_press_emits_long_click_only() {
    let mut robot = GestureRobot::new();
    robot.press(20.0, 20.0, 0).release(22.0, 21.0, 650).settle();

    assert_kinds(
        &robot.events(),
        &[GestureKind::ShowPress, GestureKind::LongClick],
    );
    let long = robot.of_kind(GestureKind::LongClick);
    assert_eq!(long[0].at, 650);
    assert_eq!(long[0].event, GestureEvent::LongClick(Point::new(22.0, 21.0)));
}

#[test]
fn long_press_cannot_start_a_double_tap() {
    let mut robot = GestureRobot::new();
    robot
        .tap(0.0, 0.0, 0, 600)
        .tap(0.0, 0.0, 650, 30)
        .settle();

    assert_gesture_count(&robot.events(), GestureKind::LongClick, 1);
    assert_gesture_count(&robot.events(), GestureKind::DoubleClick, 0);
    let clicks = robot.of_kind(GestureKind::Click);
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].at, 950);
}

#[test]
fn hold_past_grace_window_clicks_one_window_after_release() {
    let mut robot = GestureRobot::new();
    robot.tap(0.0, 0.0, 0, 400).settle();

    assert_kinds(&robot.events(), &[GestureKind::ShowPress, GestureKind::Click]);
    assert_eq!(robot.of_kind(GestureKind::Click)[0].at, 700);
}

#[test]
fn held_tap_followed_by_quick_tap_is_double_tap() {
    let mut robot = GestureRobot::new();
    robot
        .tap(0.0, 0.0, 0, 400)
        .tap(0.0, 0.0, 450, 30)
        .settle();

    assert_kinds(
        &robot.events(),
        &[GestureKind::ShowPress, GestureKind::DoubleClick],
    );
    assert_eq!(robot.of_kind(GestureKind::DoubleClick)[0].at, 480);
    assert!(robot.recognizer().is_settled());
}

#[test]
fn hold_exactly_at_threshold_is_not_long() {
    let mut robot = GestureRobot::new();
    robot.tap(0.0, 0.0, 0, 500).settle();

    assert_gesture_count(&robot.events(), GestureKind::LongClick, 0);
    assert_gesture_count(&robot.events(), GestureKind::Click, 1);
}

#[test]
fn long_press_measured_after_show_press() {
    let config = GestureConfig::default()
        .with_show_press_timeout(180)
        .with_long_press_origin(LongPressOrigin::AfterShowPress);

    let mut robot = GestureRobot::with_config(config);
    robot.tap(0.0, 0.0, 0, 600).settle();
    assert_gesture_count(&robot.events(), GestureKind::LongClick, 0);
    assert_eq!(robot.of_kind(GestureKind::ShowPress)[0].at, 180);

    let mut robot = GestureRobot::with_config(config);
    robot.tap(0.0, 0.0, 0, 700).settle();
    assert_gesture_count(&robot.events(), GestureKind::LongClick, 1);
    assert_gesture_count(&robot.events(), GestureKind::Click, 0);
}

#[test]
fn drag_never_produces_taps() {
    let mut robot = GestureRobot::new();
    robot
        .press(0.0, 0.0, 0)
        .move_to(30.0, 0.0, 20)
        .move_to(0.0, 0.0, 40)
        .release(0.0, 0.0, 60)
        .settle();

    assert_no_taps(&robot.events(), "drag that returned to its anchor");
    assert_gesture_count(&robot.events(), GestureKind::Fling, 1);
    assert_gesture_count(&robot.events(), GestureKind::ShowPress, 0);
}

#[test]
fn replaced_handler_receives_later_events() {
    use std::cell::Cell;
    use std::rc::Rc;

    let mut robot = GestureRobot::new();
    let replaced = Rc::new(Cell::new(0));
    let counter = Rc::clone(&replaced);
    robot
        .recognizer_mut()
        .on(GestureKind::Click, move |_| counter.set(counter.get() + 1));

    robot.tap(0.0, 0.0, 0, 40).settle();
    assert_eq!(replaced.get(), 1);
    assert_gesture_count(&robot.events(), GestureKind::Click, 0);
}
