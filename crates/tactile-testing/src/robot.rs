//! Robot-style driver for gesture tests
//!
//! This module provides a scripted API that allows tests to:
//! - Drive a recognizer on a virtual clock
//! - Perform interactions (presses, taps, drags)
//! - Inspect every gesture along with the time it was delivered
//!
//! # Example
//!
//! ```
//! use tactile_foundation::GestureKind;
//! use tactile_testing::GestureRobot;
//!
//! let mut robot = GestureRobot::new();
//! robot.tap(0.0, 0.0, 0, 50);
//! robot.advance_to(300);
//!
//! assert_eq!(robot.count(GestureKind::Click), 1);
//! assert_eq!(robot.events()[0].at, 300);
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use tactile_core::{Clock, ManualClock, Millis};
use tactile_foundation::{
    ContactError, ContactPhase, ContactSample, EventSink, GestureConfig, GestureEvent,
    GestureKind, GestureRecognizer,
};
use tactile_geometry::Point;

/// A gesture together with the virtual time at which it reached the sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedGesture {
    pub at: Millis,
    pub event: GestureEvent,
}

/// Drives a [`GestureRecognizer`] with an [`EventSink`] that records every
/// gesture kind.
///
/// Time only moves through the robot. Timers are fired one deadline at a
/// time so each recorded gesture carries the exact time its timer was due.
pub struct GestureRobot {
    recognizer: GestureRecognizer<EventSink>,
    clock: Rc<ManualClock>,
    recorded: Rc<RefCell<Vec<RecordedGesture>>>,
    rejections: Vec<ContactError>,
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRobot {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        let clock = Rc::new(ManualClock::new(0));
        let recorded = Rc::new(RefCell::new(Vec::new()));
        let mut recognizer = GestureRecognizer::new(config);
        for kind in GestureKind::ALL {
            let clock = Rc::clone(&clock);
            let recorded = Rc::clone(&recorded);
            recognizer.on(kind, move |event| {
                recorded.borrow_mut().push(RecordedGesture {
                    at: clock.now_millis(),
                    event: *event,
                });
            });
        }
        Self {
            recognizer,
            clock,
            recorded,
            rejections: Vec::new(),
        }
    }

    pub fn now(&self) -> Millis {
        self.clock.now_millis()
    }

    pub fn recognizer(&self) -> &GestureRecognizer<EventSink> {
        &self.recognizer
    }

    /// Mutable access, e.g. to replace a handler mid-test.
    pub fn recognizer_mut(&mut self) -> &mut GestureRecognizer<EventSink> {
        &mut self.recognizer
    }

    /// Contact start at `(x, y)` and time `t`.
    pub fn press(&mut self, x: f32, y: f32, t: Millis) -> &mut Self {
        self.send(ContactPhase::Start, ContactSample::new(x, y, t))
    }

    /// Contact move to `(x, y)` at time `t`.
    pub fn move_to(&mut self, x: f32, y: f32, t: Millis) -> &mut Self {
        self.send(ContactPhase::Move, ContactSample::new(x, y, t))
    }

    /// Contact end at `(x, y)` and time `t`.
    pub fn release(&mut self, x: f32, y: f32, t: Millis) -> &mut Self {
        self.send(ContactPhase::End, ContactSample::new(x, y, t))
    }

    /// Stationary press at `t` released `duration` ms later.
    pub fn tap(&mut self, x: f32, y: f32, t: Millis, duration: Millis) -> &mut Self {
        self.press(x, y, t);
        self.release(x, y, t + duration)
    }

    /// Press at `from`, `steps` evenly spaced moves ending at `to`, then
    /// release at `to`. Samples are `step_ms` apart.
    pub fn drag(
        &mut self,
        from: Point,
        to: Point,
        t: Millis,
        steps: u32,
        step_ms: Millis,
    ) -> &mut Self {
        self.press(from.x, from.y, t);
        let steps = steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * fraction;
            let y = from.y + (to.y - from.y) * fraction;
            self.move_to(x, y, t + step_ms * step as Millis);
        }
        self.release(to.x, to.y, t + step_ms * steps as Millis)
    }

    /// Moves virtual time to `t`, firing due timers at their own deadlines.
    pub fn advance_to(&mut self, t: Millis) -> &mut Self {
        while let Some(deadline) = self.recognizer.next_deadline() {
            if deadline > t {
                break;
            }
            self.clock.set(deadline);
            self.recognizer.advance_to(deadline);
        }
        self.clock.set(t);
        self.recognizer.advance_to(t);
        self
    }

    pub fn advance_by(&mut self, delta: Millis) -> &mut Self {
        let target = self.now().saturating_add(delta);
        self.advance_to(target)
    }

    /// Fires every pending timer.
    pub fn settle(&mut self) -> &mut Self {
        while let Some(deadline) = self.recognizer.next_deadline() {
            self.advance_to(deadline);
        }
        self
    }

    pub fn events(&self) -> Vec<RecordedGesture> {
        self.recorded.borrow().clone()
    }

    /// Recorded gestures without timestamps.
    pub fn gestures(&self) -> Vec<GestureEvent> {
        self.recorded
            .borrow()
            .iter()
            .map(|recorded| recorded.event)
            .collect()
    }

    pub fn kinds(&self) -> Vec<GestureKind> {
        self.recorded
            .borrow()
            .iter()
            .map(|recorded| recorded.event.kind())
            .collect()
    }

    pub fn count(&self, kind: GestureKind) -> usize {
        self.recorded
            .borrow()
            .iter()
            .filter(|recorded| recorded.event.kind() == kind)
            .count()
    }

    pub fn of_kind(&self, kind: GestureKind) -> Vec<RecordedGesture> {
        self.recorded
            .borrow()
            .iter()
            .filter(|recorded| recorded.event.kind() == kind)
            .copied()
            .collect()
    }

    /// Returns and forgets everything recorded so far.
    pub fn take_events(&mut self) -> Vec<RecordedGesture> {
        std::mem::take(&mut *self.recorded.borrow_mut())
    }

    /// Inputs the recognizer refused, in order.
    pub fn rejections(&self) -> &[ContactError] {
        &self.rejections
    }

    fn send(&mut self, phase: ContactPhase, sample: ContactSample) -> &mut Self {
        if sample.t >= self.now() {
            self.advance_to(sample.t);
        }
        if let Err(err) = self.recognizer.handle(phase, sample) {
            log::debug!("robot input rejected: {}", err);
            self.rejections.push(err);
        }
        self
    }
}
