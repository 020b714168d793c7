//! Per-recognizer tuning.

use crate::gesture_constants::{
    DOUBLE_TAP_TIMEOUT_MS, FLING_VELOCITY_FACTOR, LONG_PRESS_TIMEOUT_MS, MAX_FLING_VELOCITY,
    MIN_FLING_VELOCITY, SHOW_PRESS_TIMEOUT_MS, TOUCH_SLOP,
};

/// When `scroll` events are emitted for a move sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPolicy {
    /// Only once the sequence has left the touch slop and become a drag.
    #[default]
    DragOnly,
    /// On every move, starting with the first one after the press.
    EveryMove,
}

/// Where the long-press threshold is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LongPressOrigin {
    /// `long_press_timeout` counted from contact start.
    #[default]
    ContactStart,
    /// `long_press_timeout` counted from the moment `showPress` is due,
    /// i.e. a total hold of `show_press_timeout + long_press_timeout`.
    AfterShowPress,
}

/// Clamping applied to the estimated fling velocity, per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityConfig {
    /// Magnitudes strictly below this are zeroed.
    pub min_velocity: f32,
    /// Magnitudes strictly above this are clamped, sign preserved.
    pub max_velocity: f32,
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            min_velocity: MIN_FLING_VELOCITY,
            max_velocity: MAX_FLING_VELOCITY,
        }
    }
}

/// Thresholds and policies for one [`GestureRecognizer`](crate::GestureRecognizer).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub touch_slop: f32,
    pub show_press_timeout_ms: u64,
    pub double_tap_timeout_ms: u64,
    pub long_press_timeout_ms: u64,
    pub long_press_origin: LongPressOrigin,
    pub scroll_policy: ScrollPolicy,
    pub fling_velocity_factor: f32,
    pub velocity: VelocityConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            show_press_timeout_ms: SHOW_PRESS_TIMEOUT_MS,
            double_tap_timeout_ms: DOUBLE_TAP_TIMEOUT_MS,
            long_press_timeout_ms: LONG_PRESS_TIMEOUT_MS,
            long_press_origin: LongPressOrigin::default(),
            scroll_policy: ScrollPolicy::default(),
            fling_velocity_factor: FLING_VELOCITY_FACTOR,
            velocity: VelocityConfig::default(),
        }
    }
}

impl GestureConfig {
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_show_press_timeout(mut self, millis: u64) -> Self {
        self.show_press_timeout_ms = millis;
        self
    }

    pub fn with_double_tap_timeout(mut self, millis: u64) -> Self {
        self.double_tap_timeout_ms = millis;
        self
    }

    pub fn with_long_press_timeout(mut self, millis: u64) -> Self {
        self.long_press_timeout_ms = millis;
        self
    }

    pub fn with_long_press_origin(mut self, origin: LongPressOrigin) -> Self {
        self.long_press_origin = origin;
        self
    }

    pub fn with_scroll_policy(mut self, policy: ScrollPolicy) -> Self {
        self.scroll_policy = policy;
        self
    }

    pub fn with_fling_velocity_factor(mut self, factor: f32) -> Self {
        self.fling_velocity_factor = factor;
        self
    }

    pub fn with_velocity(mut self, velocity: VelocityConfig) -> Self {
        self.velocity = velocity;
        self
    }

    /// Press duration beyond which a stationary press is a long press.
    pub fn long_press_threshold_ms(&self) -> u64 {
        match self.long_press_origin {
            LongPressOrigin::ContactStart => self.long_press_timeout_ms,
            LongPressOrigin::AfterShowPress => self
                .show_press_timeout_ms
                .saturating_add(self.long_press_timeout_ms),
        }
    }
}
