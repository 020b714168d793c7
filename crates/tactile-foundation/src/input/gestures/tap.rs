//! Tap streak bookkeeping.
//!
//! Counts consecutive taps that landed on the same spot so the recognizer
//! can tell a double tap from two unrelated single taps. The streak spans
//! press/release cycles and is cleared whenever a tap can no longer combine
//! with the next one.

use tactile_geometry::Point;

/// Number of taps that resolves a streak into a double tap.
pub const DOUBLE_TAP_COUNT: u8 = 2;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct TapGesture {
    streak: u8,
    /// Press sequence of the first tap in the current streak.
    first_sequence: Option<u64>,
    last_down: Option<Point>,
}

impl TapGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new press position.
    ///
    /// A press that lands outside `slop` of the previous press cannot combine
    /// with it, so the streak is dropped.
    pub fn on_press(&mut self, position: Point, slop: f32) {
        if let Some(previous) = self.last_down {
            if previous.exceeds_radius(position, slop) && self.streak > 0 {
                log::trace!("press moved away from {:?}, dropping tap streak", previous);
                self.reset();
            }
        }
        self.last_down = Some(position);
    }

    /// Counts a completed tap and returns the new streak length.
    pub fn register_tap(&mut self, sequence: u64) -> u8 {
        if self.streak == 0 {
            self.first_sequence = Some(sequence);
        }
        self.streak = (self.streak + 1).min(DOUBLE_TAP_COUNT);
        self.streak
    }

    pub fn streak(&self) -> u8 {
        self.streak
    }

    pub fn first_sequence(&self) -> Option<u64> {
        self.first_sequence
    }

    /// Clears the streak. The last press position is kept for the next
    /// proximity check.
    pub fn reset(&mut self) {
        self.streak = 0;
        self.first_sequence = None;
    }
}
