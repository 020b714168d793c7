use std::fmt;
use tactile_core::Millis;
use tactile_geometry::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactPhase {
    Start,
    Move,
    End,
}

impl fmt::Display for ContactPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactPhase::Start => "start",
            ContactPhase::Move => "move",
            ContactPhase::End => "end",
        })
    }
}

/// One position report from the platform input layer.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ContactSample {
    pub x: f32,
    pub y: f32,
    /// Device timestamp in milliseconds.
    pub t: Millis,
}

impl ContactSample {
    pub const fn new(x: f32, y: f32, t: Millis) -> Self {
        Self { x, y, t }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same position, different timestamp.
    pub fn at(self, t: Millis) -> Self {
        Self { t, ..self }
    }
}

/// A contact event tagged with the pointer it belongs to.
///
/// Used by [`ContactDispatcher`](super::dispatcher::ContactDispatcher) to
/// route samples to the recognizer tracking that pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactEvent {
    pub pointer: PointerId,
    pub phase: ContactPhase,
    pub sample: ContactSample,
}

impl ContactEvent {
    pub fn new(pointer: PointerId, phase: ContactPhase, sample: ContactSample) -> Self {
        Self {
            pointer,
            phase,
            sample,
        }
    }
}

/// Input rejected by a recognizer. State is left untouched when returned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactError {
    NonFiniteCoordinate { x: f32, y: f32 },
    TimeWentBackwards { previous: Millis, current: Millis },
    NoActiveContact { phase: ContactPhase },
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::NonFiniteCoordinate { x, y } => {
                write!(f, "contact coordinate is not finite: ({x}, {y})")
            }
            ContactError::TimeWentBackwards { previous, current } => write!(
                f,
                "contact timestamp {current}ms is earlier than {previous}ms"
            ),
            ContactError::NoActiveContact { phase } => {
                write!(f, "contact {phase} received without an active contact")
            }
        }
    }
}

impl std::error::Error for ContactError {}
