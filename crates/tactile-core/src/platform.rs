//! Platform abstraction traits for Tactile runtime services.
//!
//! These traits let the gesture runtime delegate clock responsibilities
//! to the host platform, so the same recognizer runs against a real
//! monotonic clock in an application and a hand-driven clock in tests.

use crate::Millis;
use std::cell::Cell;
use web_time::Instant;

/// Provides timing information for the runtime.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> Millis;

    /// Milliseconds since the clock was created.
    fn now_millis(&self) -> Millis;
}

/// Wall clock backed by `web_time::Instant`, usable on desktop and wasm.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Instant) -> Millis {
        Instant::now().saturating_duration_since(since).as_millis() as Millis
    }

    fn now_millis(&self) -> Millis {
        self.elapsed_millis(self.origin)
    }
}

/// Clock that only moves when told to. Used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Moves the clock forward by `delta` milliseconds.
    pub fn advance(&self, delta: Millis) {
        self.now.set(self.now.get().saturating_add(delta));
    }

    /// Jumps to `millis`. The clock never moves backwards.
    pub fn set(&self, millis: Millis) {
        if millis > self.now.get() {
            self.now.set(millis);
        }
    }
}

impl Clock for ManualClock {
    type Instant = Millis;

    fn now(&self) -> Millis {
        self.now.get()
    }

    fn elapsed_millis(&self, since: Millis) -> Millis {
        self.now.get().saturating_sub(since)
    }

    fn now_millis(&self) -> Millis {
        self.now.get()
    }
}
