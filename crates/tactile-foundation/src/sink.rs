//! Delivery of recognized gestures.
//!
//! A recognizer hands every event to a [`GestureSink`]. [`EventSink`] keeps
//! one handler per gesture name and calls it synchronously; a plain
//! `Vec<GestureEvent>` or an mpsc `Sender` turns the same stream into a
//! queue for push-based consumers.

use crate::events::{GestureEvent, GestureKind};
use std::fmt;
use std::sync::mpsc::Sender;
use tactile_core::collections::map::HashMap;

/// Receives gestures in the order the recognizer produces them.
pub trait GestureSink {
    fn emit(&mut self, event: GestureEvent);
}

impl GestureSink for Vec<GestureEvent> {
    fn emit(&mut self, event: GestureEvent) {
        self.push(event);
    }
}

impl GestureSink for Sender<GestureEvent> {
    fn emit(&mut self, event: GestureEvent) {
        if self.send(event).is_err() {
            log::debug!("gesture receiver dropped, discarding {}", event.kind());
        }
    }
}

impl<S: GestureSink + ?Sized> GestureSink for &mut S {
    fn emit(&mut self, event: GestureEvent) {
        (**self).emit(event);
    }
}

type Handler = Box<dyn FnMut(&GestureEvent)>;

/// Name-to-handler registry. One handler per gesture, last one wins.
#[derive(Default)]
pub struct EventSink {
    handlers: HashMap<GestureKind, Handler>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `kind`, replacing any previous handler.
    pub fn on(&mut self, kind: GestureKind, handler: impl FnMut(&GestureEvent) + 'static) {
        if self.handlers.insert(kind, Box::new(handler)).is_some() {
            log::trace!("replaced {} handler", kind);
        }
    }

    /// Removes the handler for `kind`. Returns whether one was registered.
    pub fn off(&mut self, kind: GestureKind) -> bool {
        self.handlers.remove(&kind).is_some()
    }

    pub fn has_handler(&self, kind: GestureKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Invokes the handler registered for the event's kind.
    ///
    /// Returns `false` without doing anything when no handler is registered.
    pub fn dispatch(&mut self, event: &GestureEvent) -> bool {
        match self.handlers.get_mut(&event.kind()) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

impl GestureSink for EventSink {
    fn emit(&mut self, event: GestureEvent) {
        self.dispatch(&event);
    }
}

impl fmt::Debug for EventSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&'static str> = self.handlers.keys().map(|kind| kind.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("EventSink").field("handlers", &kinds).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tactile_geometry::Point;

    #[test]
    fn emit_without_handler_is_noop() {
        let mut sink = EventSink::new();
        assert!(!sink.dispatch(&GestureEvent::Click(Point::ZERO)));
    }

    #[test]
    fn last_registration_wins() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut sink = EventSink::new();

        let first = Rc::clone(&calls);
        sink.on(GestureKind::Click, move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&calls);
        sink.on(GestureKind::Click, move |_| second.borrow_mut().push("second"));

        sink.emit(GestureEvent::Click(Point::new(1.0, 2.0)));
        assert_eq!(*calls.borrow(), vec!["second"]);
    }

    #[test]
    fn handlers_only_see_their_kind() {
        let clicks = Rc::new(RefCell::new(0));
        let mut sink = EventSink::new();
        let counter = Rc::clone(&clicks);
        sink.on(GestureKind::Click, move |_| *counter.borrow_mut() += 1);

        sink.emit(GestureEvent::LongClick(Point::ZERO));
        sink.emit(GestureEvent::Click(Point::ZERO));
        assert_eq!(*clicks.borrow(), 1);

        assert!(sink.off(GestureKind::Click));
        assert!(!sink.has_handler(GestureKind::Click));
        sink.emit(GestureEvent::Click(Point::ZERO));
        assert_eq!(*clicks.borrow(), 1);
    }

    #[test]
    fn channel_sink_survives_dropped_receiver() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut sink = tx;
        sink.emit(GestureEvent::Click(Point::ZERO));
        assert_eq!(rx.recv(), Ok(GestureEvent::Click(Point::ZERO)));

        drop(rx);
        sink.emit(GestureEvent::Click(Point::ZERO));
    }
}
