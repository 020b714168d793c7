//! Gesture recognition for Tactile
//!
//! Converts raw contact samples into taps, double taps, long presses,
//! show-press feedback, scrolls and flings.

pub mod config;
pub mod events;
pub mod gesture_constants;
pub mod input;
pub mod recognizer;
pub mod sink;
pub mod velocity_tracker;

pub use config::{GestureConfig, LongPressOrigin, ScrollPolicy, VelocityConfig};
pub use events::{GestureEvent, GestureKind, UnknownGesture};
pub use input::{
    ContactDispatcher, ContactError, ContactEvent, ContactPhase, ContactSample, PointerId,
};
pub use recognizer::{GestureRecognizer, RecognizerState};
pub use sink::{EventSink, GestureSink};
pub use velocity_tracker::VelocityEstimator;

pub use tactile_geometry::{Offset, Point};

pub mod prelude {
    pub use crate::config::{GestureConfig, LongPressOrigin, ScrollPolicy};
    pub use crate::events::{GestureEvent, GestureKind};
    pub use crate::input::prelude::*;
    pub use crate::recognizer::GestureRecognizer;
    pub use crate::sink::{EventSink, GestureSink};
    pub use tactile_geometry::Point;
}
