//! Single-pointer gesture recognizer.
//!
//! Turns contact start/move/end samples into taps, double taps, long
//! presses, show-press feedback, scrolls and flings.
//!
//! Timing is driven entirely by the samples and by [`GestureRecognizer::advance_to`].
//! Every inbound sample first fires the timers that came due at or before
//! its timestamp, so timer callbacks and contact callbacks interleave the
//! same way they would on a single-threaded event loop.
//!
//! Single-tap confirmation is delayed by the double-tap window. Each press
//! gets its own confirmation timer keyed by a press sequence number, and
//! each sequence carries its own armed flag. A double tap cancels both of
//! its presses' confirmations by sequence, so a stale timer can never turn
//! into a click, while a tap that did not combine with anything is still
//! confirmed after a later unrelated press.

use crate::config::{GestureConfig, ScrollPolicy};
use crate::events::{GestureEvent, GestureKind};
use crate::input::gestures::tap::DOUBLE_TAP_COUNT;
use crate::input::gestures::{DragGesture, FlingGesture, ScrollGesture, TapGesture};
use crate::input::{ContactError, ContactEvent, ContactPhase, ContactSample};
use crate::sink::{EventSink, GestureSink};
use tactile_core::collections::map::{self, HashMap};
use tactile_core::{DueTimer, Millis, TimerId, TimerQueue, TimerSlot};
use tactile_geometry::Point;

/// Primary state of the contact currently tracked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecognizerState {
    #[default]
    Idle,
    /// Down, still within the touch slop.
    Pressed,
    /// Down, moved past the touch slop at some point.
    Dragging,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimerAction {
    ShowPress { sequence: u64, position: Point },
    ConfirmTap { sequence: u64, position: Point },
    ResetStreak,
}

/// Confirmation state of one press sequence.
#[derive(Clone, Copy, Debug)]
struct PendingTap {
    timer: TimerId,
    /// Released as a tap; confirms into a click when `timer` fires.
    armed: bool,
}

pub struct GestureRecognizer<S: GestureSink = EventSink> {
    config: GestureConfig,
    sink: S,
    state: RecognizerState,
    /// Bumped on every contact start.
    sequence: u64,
    down: ContactSample,
    last_time: Option<Millis>,
    timers: TimerQueue<TimerAction>,
    show_press: TimerSlot,
    streak_reset: TimerSlot,
    pending_taps: HashMap<u64, PendingTap>,
    tap: TapGesture,
    drag: DragGesture,
    scroll: ScrollGesture,
    fling: FlingGesture,
}

impl Default for GestureRecognizer<EventSink> {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureRecognizer<EventSink> {
    pub fn new(config: GestureConfig) -> Self {
        Self::with_sink(config, EventSink::new())
    }

    /// Registers `handler` for `kind`, replacing any previous handler.
    pub fn on(&mut self, kind: GestureKind, handler: impl FnMut(&GestureEvent) + 'static) {
        self.sink.on(kind, handler);
    }
}

impl<S: GestureSink> GestureRecognizer<S> {
    pub fn with_sink(config: GestureConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            state: RecognizerState::Idle,
            sequence: 0,
            down: ContactSample::default(),
            last_time: None,
            timers: TimerQueue::new(),
            show_press: TimerSlot::new(),
            streak_reset: TimerSlot::new(),
            pending_taps: map::new(),
            tap: TapGesture::new(),
            drag: DragGesture::new(),
            scroll: ScrollGesture::new(),
            fling: FlingGesture::new(config.velocity),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    pub fn tap_streak(&self) -> u8 {
        self.tap.streak()
    }

    /// True once the current (or just-ended) sequence left the touch slop.
    pub fn is_cancelled(&self) -> bool {
        self.drag.is_cancelled()
    }

    /// True while the current sequence waits for its tap confirmation.
    pub fn is_tap_armed(&self) -> bool {
        self.pending_taps
            .get(&self.sequence)
            .is_some_and(|pending| pending.armed)
    }

    /// Sample recorded at the most recent contact start.
    pub fn down_anchor(&self) -> ContactSample {
        self.down
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Earliest pending timer deadline. Hosts sleep until then and call
    /// [`advance_to`](Self::advance_to).
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Idle with nothing scheduled; dropping the recognizer loses nothing.
    pub fn is_settled(&self) -> bool {
        self.state == RecognizerState::Idle && self.timers.is_empty()
    }

    /// Feeds one phase-tagged sample.
    pub fn handle(&mut self, phase: ContactPhase, sample: ContactSample) -> Result<(), ContactError> {
        match phase {
            ContactPhase::Start => self.start(sample),
            ContactPhase::Move => self.move_to(sample),
            ContactPhase::End => self.end(sample),
        }
    }

    pub fn handle_event(&mut self, event: &ContactEvent) -> Result<(), ContactError> {
        self.handle(event.phase, event.sample)
    }

    /// Contact start.
    pub fn start(&mut self, sample: ContactSample) -> Result<(), ContactError> {
        self.validate(ContactPhase::Start, sample)?;
        self.advance_to(sample.t);
        log::trace!("start {:?}", sample);

        if self.state != RecognizerState::Idle {
            log::warn!(
                "contact start at {}ms while sequence {} is still down, restarting",
                sample.t,
                self.sequence
            );
        }

        let position = sample.position();
        self.tap.on_press(position, self.config.touch_slop);

        self.sequence += 1;
        self.down = sample;
        self.state = RecognizerState::Pressed;
        self.drag.begin(sample);
        self.scroll.reset(position);
        self.fling.reset();

        self.streak_reset.cancel(&mut self.timers);

        let sequence = self.sequence;
        self.show_press.arm(
            &mut self.timers,
            sample.t.saturating_add(self.config.show_press_timeout_ms),
            TimerAction::ShowPress { sequence, position },
        );
        let timer = self.timers.schedule(
            sample.t.saturating_add(self.config.double_tap_timeout_ms),
            TimerAction::ConfirmTap { sequence, position },
        );
        self.pending_taps.insert(
            sequence,
            PendingTap {
                timer,
                armed: false,
            },
        );

        log::debug!(
            "sequence {} pressed at ({}, {}), tap streak {}",
            sequence,
            sample.x,
            sample.y,
            self.tap.streak()
        );
        Ok(())
    }

    /// Contact move.
    pub fn move_to(&mut self, sample: ContactSample) -> Result<(), ContactError> {
        self.validate(ContactPhase::Move, sample)?;
        self.advance_to(sample.t);
        log::trace!("move {:?}", sample);

        self.fling.add_sample(sample);

        let position = sample.position();
        if self.drag.track(position, self.config.touch_slop) {
            self.begin_drag();
        }

        let delta = self.scroll.advance(position);
        let emit_scroll = match self.config.scroll_policy {
            ScrollPolicy::DragOnly => self.drag.is_cancelled(),
            ScrollPolicy::EveryMove => true,
        };
        if emit_scroll {
            self.emit(GestureEvent::Scroll {
                position,
                dx: delta.dx,
                dy: delta.dy,
            });
        }
        Ok(())
    }

    /// Contact end.
    pub fn end(&mut self, sample: ContactSample) -> Result<(), ContactError> {
        self.validate(ContactPhase::End, sample)?;
        self.advance_to(sample.t);
        log::trace!("end {:?}", sample);

        let position = sample.position();
        if self.drag.track(position, self.config.touch_slop) {
            self.tap.reset();
        }
        self.show_press.cancel(&mut self.timers);
        self.state = RecognizerState::Idle;

        if self.drag.is_cancelled() {
            self.cancel_confirmation(self.sequence);
            let fling = self
                .fling
                .release(self.down, sample, self.config.fling_velocity_factor);
            self.emit(fling);
            return Ok(());
        }

        let streak = self.tap.register_tap(self.sequence);
        let held = sample.t.saturating_sub(self.down.t);

        if streak == DOUBLE_TAP_COUNT {
            if let Some(first) = self.tap.first_sequence() {
                self.cancel_confirmation(first);
            }
            self.cancel_confirmation(self.sequence);
            self.tap.reset();
            self.emit(GestureEvent::DoubleClick(position));
        } else if held > self.config.long_press_threshold_ms() {
            self.cancel_confirmation(self.sequence);
            self.tap.reset();
            self.emit(GestureEvent::LongClick(position));
        } else {
            self.arm_tap(sample.t);
            self.streak_reset.arm(
                &mut self.timers,
                sample.t.saturating_add(self.config.double_tap_timeout_ms),
                TimerAction::ResetStreak,
            );
        }
        Ok(())
    }

    /// Fires every timer due at or before `now`.
    pub fn advance_to(&mut self, now: Millis) {
        if let Some(last) = self.last_time {
            if now < last {
                return;
            }
        }
        self.last_time = Some(now);

        while let Some(due) = self.timers.pop_due(now) {
            self.fire(due);
        }
    }

    /// Drops the current sequence and every pending timer.
    ///
    /// Used when the platform cancels the pointer; no gesture is emitted.
    pub fn reset(&mut self) {
        log::debug!("sequence {} reset", self.sequence);
        self.timers.clear();
        self.show_press = TimerSlot::new();
        self.streak_reset = TimerSlot::new();
        self.pending_taps.clear();
        self.state = RecognizerState::Idle;
        self.tap.reset();
        self.drag.reset();
        self.fling.reset();
    }

    fn validate(&self, phase: ContactPhase, sample: ContactSample) -> Result<(), ContactError> {
        if !sample.position().is_finite() {
            return Err(ContactError::NonFiniteCoordinate {
                x: sample.x,
                y: sample.y,
            });
        }
        if let Some(previous) = self.last_time {
            if sample.t < previous {
                return Err(ContactError::TimeWentBackwards {
                    previous,
                    current: sample.t,
                });
            }
        }
        if phase != ContactPhase::Start && self.state == RecognizerState::Idle {
            return Err(ContactError::NoActiveContact { phase });
        }
        Ok(())
    }

    fn begin_drag(&mut self) {
        self.state = RecognizerState::Dragging;
        self.tap.reset();
        self.show_press.cancel(&mut self.timers);
        log::debug!("sequence {} left touch slop, dragging", self.sequence);
    }

    fn cancel_confirmation(&mut self, sequence: u64) {
        if let Some(pending) = self.pending_taps.remove(&sequence) {
            self.timers.cancel(pending.timer);
        }
    }

    /// Marks the current sequence as a tap awaiting confirmation.
    fn arm_tap(&mut self, released_at: Millis) {
        let sequence = self.sequence;
        if let Some(pending) = self.pending_taps.get_mut(&sequence) {
            pending.armed = true;
            return;
        }
        // The confirmation already fired while the contact was held: give
        // the tap a fresh grace window from its release.
        let timer = self.timers.schedule(
            released_at.saturating_add(self.config.double_tap_timeout_ms),
            TimerAction::ConfirmTap {
                sequence,
                position: self.down.position(),
            },
        );
        self.pending_taps
            .insert(sequence, PendingTap { timer, armed: true });
    }

    fn fire(&mut self, due: DueTimer<TimerAction>) {
        log::trace!("{} fired at {}ms: {:?}", due.id, due.deadline, due.action);
        match due.action {
            TimerAction::ShowPress { sequence, position } => {
                self.show_press.release(due.id);
                if sequence == self.sequence && self.state == RecognizerState::Pressed {
                    self.emit(GestureEvent::ShowPress(position));
                }
            }
            TimerAction::ConfirmTap { sequence, position } => {
                if let Some(pending) = self.pending_taps.remove(&sequence) {
                    self.confirm_tap(sequence, position, pending.armed);
                }
            }
            TimerAction::ResetStreak => {
                self.streak_reset.release(due.id);
                self.tap.reset();
            }
        }
    }

    fn confirm_tap(&mut self, sequence: u64, position: Point, armed: bool) {
        if !armed {
            log::trace!("sequence {} still down when its grace window closed", sequence);
            return;
        }
        let heads_streak = self.tap.first_sequence() == Some(sequence);
        if heads_streak && self.state != RecognizerState::Idle {
            // A coincident press is down and may still complete a double tap.
            log::trace!(
                "confirmation for sequence {} yields to press {}",
                sequence,
                self.sequence
            );
            return;
        }
        if heads_streak {
            self.tap.reset();
            self.streak_reset.cancel(&mut self.timers);
        }
        self.emit(GestureEvent::Click(position));
    }

    fn emit(&mut self, event: GestureEvent) {
        log::debug!("sequence {}: {} {:?}", self.sequence, event.kind(), event);
        self.sink.emit(event);
    }
}
