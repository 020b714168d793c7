//! Touch slop tracking.
//!
//! Decides when a press has moved far enough from its anchor to stop being
//! a tap. The transition is one-way for the rest of the contact sequence.

use crate::input::ContactSample;
use tactile_geometry::Point;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    anchor: ContactSample,
    cancelled: bool,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new sequence anchored at `down`.
    pub fn begin(&mut self, down: ContactSample) {
        self.anchor = down;
        self.cancelled = false;
    }

    /// Checks `position` against the slop around the anchor.
    ///
    /// Returns `true` only for the sample that crosses the slop; later
    /// samples return `false` even though the sequence stays a drag.
    pub fn track(&mut self, position: Point, slop: f32) -> bool {
        if self.cancelled {
            return false;
        }
        if self.anchor.position().exceeds_radius(position, slop) {
            self.cancelled = true;
            return true;
        }
        false
    }

    /// True once the sequence left the slop; tap gestures are cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn anchor(&self) -> ContactSample {
        self.anchor
    }

    pub fn reset(&mut self) {
        self.cancelled = false;
    }
}
