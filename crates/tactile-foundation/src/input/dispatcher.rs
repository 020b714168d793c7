//! Contact routing for hosts that track several pointers.
//!
//! Each pointer gets its own [`GestureRecognizer`] built from a shared
//! [`GestureConfig`]. Platform integrations enqueue contact events with
//! [`ContactDispatcher::push`] and later drain them; gestures come back
//! tagged with the pointer that produced them.

use super::types::{ContactError, ContactEvent, ContactPhase, PointerId};
use crate::config::GestureConfig;
use crate::events::GestureEvent;
use crate::recognizer::GestureRecognizer;
use smallvec::SmallVec;
use tactile_core::collections::map::{self, HashMap};
use tactile_core::Millis;

pub struct ContactDispatcher {
    config: GestureConfig,
    recognizers: HashMap<PointerId, GestureRecognizer<Vec<GestureEvent>>>,
    queue: Vec<ContactEvent>,
}

impl Default for ContactDispatcher {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl ContactDispatcher {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            recognizers: map::new(),
            queue: Vec::new(),
        }
    }

    pub fn push(&mut self, event: ContactEvent) {
        self.queue.push(event);
    }

    /// Processes every queued event in order.
    ///
    /// Rejected events are logged and skipped; the number of rejections is
    /// returned.
    pub fn drain<F>(&mut self, mut handler: F) -> usize
    where
        F: FnMut(PointerId, GestureEvent),
    {
        let mut rejected = 0;
        let queue = std::mem::take(&mut self.queue);
        for event in queue {
            if let Err(err) = self.dispatch(event, &mut handler) {
                log::warn!("pointer {}: {}", event.pointer, err);
                rejected += 1;
            }
        }
        rejected
    }

    /// Routes one event to its pointer's recognizer.
    pub fn dispatch<F>(&mut self, event: ContactEvent, mut handler: F) -> Result<(), ContactError>
    where
        F: FnMut(PointerId, GestureEvent),
    {
        let config = self.config;
        let recognizer = match event.phase {
            ContactPhase::Start => self
                .recognizers
                .entry(event.pointer)
                .or_insert_with(|| GestureRecognizer::with_sink(config, Vec::new())),
            ContactPhase::Move | ContactPhase::End => {
                match self.recognizers.get_mut(&event.pointer) {
                    Some(recognizer) => recognizer,
                    None => return Err(ContactError::NoActiveContact { phase: event.phase }),
                }
            }
        };

        let result = recognizer.handle_event(&event);
        for gesture in recognizer.sink_mut().drain(..) {
            handler(event.pointer, gesture);
        }
        self.retire_settled();
        result
    }

    /// Fires due timers on every tracked pointer.
    pub fn advance_to<F>(&mut self, now: Millis, mut handler: F)
    where
        F: FnMut(PointerId, GestureEvent),
    {
        let mut pointers: SmallVec<[PointerId; 4]> = self.recognizers.keys().copied().collect();
        pointers.sort_unstable();
        for pointer in pointers {
            if let Some(recognizer) = self.recognizers.get_mut(&pointer) {
                recognizer.advance_to(now);
                for gesture in recognizer.sink_mut().drain(..) {
                    handler(pointer, gesture);
                }
            }
        }
        self.retire_settled();
    }

    /// Abandons a pointer's sequence without emitting anything.
    pub fn cancel(&mut self, pointer: PointerId) -> bool {
        match self.recognizers.remove(&pointer) {
            Some(mut recognizer) => {
                recognizer.reset();
                true
            }
            None => false,
        }
    }

    /// Earliest timer deadline across all pointers.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.recognizers
            .values()
            .filter_map(|recognizer| recognizer.next_deadline())
            .min()
    }

    pub fn tracked_pointers(&self) -> usize {
        self.recognizers.len()
    }

    pub fn recognizer(&self, pointer: PointerId) -> Option<&GestureRecognizer<Vec<GestureEvent>>> {
        self.recognizers.get(&pointer)
    }

    fn retire_settled(&mut self) {
        self.recognizers.retain(|pointer, recognizer| {
            let keep = !recognizer.is_settled();
            if !keep {
                log::trace!("pointer {} settled", pointer);
            }
            keep
        });
    }
}
