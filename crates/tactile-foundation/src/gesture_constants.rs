//! Default gesture thresholds.
//!
//! Distances are in logical pixels and durations in milliseconds. These are
//! only defaults: every recognizer reads its thresholds from the
//! [`GestureConfig`](crate::GestureConfig) it was built with, so two pointers
//! can carry independent tuning.

/// Touch slop in logical pixels.
///
/// If the pointer moves more than this distance from the press position on
/// either axis:
/// - the sequence becomes a drag (scroll events begin, fling on release)
/// - tap, double-tap and long-press recognition are cancelled for the sequence
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const TOUCH_SLOP: f32 = 8.0;

/// Delay before `showPress` feedback is emitted for a stationary press.
pub const SHOW_PRESS_TIMEOUT_MS: u64 = 100;

/// Press duration beyond which a stationary press is a long press.
pub const LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// Grace window after a press during which a second tap forms a double tap.
///
/// The same window delays single-tap confirmation.
pub const DOUBLE_TAP_TIMEOUT_MS: u64 = 300;

/// Multiplier applied to px/ms when annotating a fling.
pub const FLING_VELOCITY_FACTOR: f32 = 10.0;

/// Number of recent samples the velocity estimator keeps.
pub const VELOCITY_WINDOW: usize = 5;

/// Per-axis velocity magnitudes below this are treated as noise and zeroed.
pub const MIN_FLING_VELOCITY: f32 = 2.0;

/// Per-axis velocity magnitudes are clamped to this value, sign preserved.
pub const MAX_FLING_VELOCITY: f32 = 100.0;
