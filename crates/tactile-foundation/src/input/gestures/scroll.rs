//! Per-move scroll deltas.

use tactile_geometry::{Offset, Point};

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct ScrollGesture {
    last: Point,
}

impl ScrollGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the delta origin to `origin`, typically the press position.
    pub fn reset(&mut self, origin: Point) {
        self.last = origin;
    }

    /// Returns the displacement since the previous call and remembers
    /// `position` as the new origin.
    pub fn advance(&mut self, position: Point) -> Offset {
        let delta = position - self.last;
        self.last = position;
        delta
    }

    pub fn last_position(&self) -> Point {
        self.last
    }
}
