#![doc = r"Clock and timer runtime pieces for Tactile gesture recognition."]

pub mod collections;
pub mod platform;
pub mod timer;

pub use platform::{Clock, ManualClock, MonotonicClock};
pub use timer::{DueTimer, TimerId, TimerQueue, TimerSlot};

/// Milliseconds on the host's monotonic time line.
pub type Millis = u64;
