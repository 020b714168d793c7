//! One-shot timers driven by an external time source.
//!
//! The queue never reads a clock itself. The owner schedules actions at
//! absolute deadlines and later drains whatever has come due with
//! [`TimerQueue::pop_due`]. Actions are plain data, so the owner handles
//! them with full `&mut self` access instead of through captured closures.

use crate::Millis;
use smallvec::SmallVec;
use std::fmt;

/// Handle to a scheduled timer. Ids are never reused within one queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

struct TimerEntry<A> {
    id: TimerId,
    deadline: Millis,
    action: A,
}

/// A timer whose deadline has passed, removed from the queue.
#[derive(Debug, PartialEq)]
pub struct DueTimer<A> {
    pub id: TimerId,
    pub deadline: Millis,
    pub action: A,
}

/// Deadline-ordered queue of pending one-shot actions.
///
/// Entries are kept sorted by `(deadline, id)`, so timers sharing a
/// deadline fire in the order they were scheduled.
pub struct TimerQueue<A> {
    entries: SmallVec<[TimerEntry<A>; 4]>,
    next_id: u64,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 1,
        }
    }

    /// Schedules `action` to come due at `deadline`.
    pub fn schedule(&mut self, deadline: Millis, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let index = self
            .entries
            .iter()
            .position(|entry| entry.deadline > deadline)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            index,
            TimerEntry {
                id,
                deadline,
                action,
            },
        );
        log::trace!("scheduled {} at {}ms", id, deadline);
        id
    }

    /// Cancels a pending timer.
    ///
    /// Returns `false` if the timer already fired, was already cancelled,
    /// or never belonged to this queue. Never panics.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                log::trace!("cancelled {}", id);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Deadline of the earliest pending timer.
    ///
    /// Hosts use this to sleep until the next transition instead of polling.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries.first().map(|entry| entry.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<DueTimer<A>> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let entry = self.entries.remove(0);
        Some(DueTimer {
            id: entry.id,
            deadline: entry.deadline,
            action: entry.action,
        })
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Slot holding the single live instance of one timer kind.
///
/// Arming the slot cancels whatever instance it held before, which keeps
/// the "at most one pending timer per kind" discipline in one place.
#[derive(Debug, Default)]
pub struct TimerSlot {
    id: Option<TimerId>,
}

impl TimerSlot {
    pub const fn new() -> Self {
        Self { id: None }
    }

    pub fn arm<A>(&mut self, queue: &mut TimerQueue<A>, deadline: Millis, action: A) -> TimerId {
        self.cancel(queue);
        let id = queue.schedule(deadline, action);
        self.id = Some(id);
        id
    }

    /// Cancels the held timer, if any. Safe to call repeatedly.
    pub fn cancel<A>(&mut self, queue: &mut TimerQueue<A>) -> bool {
        match self.id.take() {
            Some(id) => queue.cancel(id),
            None => false,
        }
    }

    /// Forgets the held id if it is `fired`, so a later cancel does not
    /// touch an unrelated timer.
    pub fn release(&mut self, fired: TimerId) {
        if self.id == Some(fired) {
            self.id = None;
        }
    }

    pub fn id(&self) -> Option<TimerId> {
        self.id
    }
}
