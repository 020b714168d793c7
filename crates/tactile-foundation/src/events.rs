//! Gesture events produced by the recognizer.

use crate::input::ContactSample;
use std::fmt;
use std::str::FromStr;
use tactile_geometry::Point;

/// Name of a gesture, used as the registration key of an
/// [`EventSink`](crate::EventSink).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    ShowPress,
    Click,
    DoubleClick,
    LongClick,
    Scroll,
    Fling,
}

impl GestureKind {
    pub const ALL: [GestureKind; 6] = [
        GestureKind::ShowPress,
        GestureKind::Click,
        GestureKind::DoubleClick,
        GestureKind::LongClick,
        GestureKind::Scroll,
        GestureKind::Fling,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GestureKind::ShowPress => "showPress",
            GestureKind::Click => "click",
            GestureKind::DoubleClick => "doubleClick",
            GestureKind::LongClick => "longClick",
            GestureKind::Scroll => "scroll",
            GestureKind::Fling => "fling",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownGesture(pub String);

impl fmt::Display for UnknownGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gesture name '{}'", self.0)
    }
}

impl std::error::Error for UnknownGesture {}

impl FromStr for GestureKind {
    type Err = UnknownGesture;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GestureKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownGesture(s.to_string()))
    }
}

/// A recognized gesture with its payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Early feedback for a press that has stayed put for a short while.
    ShowPress(Point),
    /// A confirmed single tap, reported at the press position.
    Click(Point),
    /// Second tap of a pair, reported at the release position.
    DoubleClick(Point),
    /// A stationary press held past the long-press threshold.
    LongClick(Point),
    /// Movement of an active contact since the previous move sample.
    Scroll { position: Point, dx: f32, dy: f32 },
    /// Release of a drag.
    Fling {
        down: ContactSample,
        up: ContactSample,
        vx: f32,
        vy: f32,
    },
}

impl GestureEvent {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureEvent::ShowPress(_) => GestureKind::ShowPress,
            GestureEvent::Click(_) => GestureKind::Click,
            GestureEvent::DoubleClick(_) => GestureKind::DoubleClick,
            GestureEvent::LongClick(_) => GestureKind::LongClick,
            GestureEvent::Scroll { .. } => GestureKind::Scroll,
            GestureEvent::Fling { .. } => GestureKind::Fling,
        }
    }

    /// Position the event is reported at. For a fling, the release point.
    pub fn position(&self) -> Point {
        match *self {
            GestureEvent::ShowPress(point)
            | GestureEvent::Click(point)
            | GestureEvent::DoubleClick(point)
            | GestureEvent::LongClick(point) => point,
            GestureEvent::Scroll { position, .. } => position,
            GestureEvent::Fling { up, .. } => up.position(),
        }
    }
}
