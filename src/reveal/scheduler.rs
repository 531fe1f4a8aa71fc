//! Timer queue driving all presentation delays
//!
//! Everything runs on the UI thread: callers schedule an event after a delay,
//! and the event loop pops due events. Time comes from a [`Clock`], so tests
//! can move time forward by hand instead of sleeping.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source, measured from an arbitrary origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Handle for cancelling a scheduled event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<E> {
    id: TimerId,
    deadline: Duration,
    event: E,
}

/// Pending events ordered by deadline, then by scheduling order
#[derive(Debug)]
pub struct TimerQueue<E, C: Clock = SystemClock> {
    clock: C,
    pending: Vec<Pending<E>>,
    next_id: u64,
}

impl<E> TimerQueue<E, SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl<E> Default for TimerQueue<E, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C: Clock> TimerQueue<E, C> {
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self {
            clock,
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to become due after `delay`
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let deadline = self.clock.now() + delay;
        // Insert after every entry with an earlier or equal deadline so that
        // equal deadlines fire in scheduling order
        let index = self
            .pending
            .partition_point(|pending| pending.deadline <= deadline);
        self.pending.insert(
            index,
            Pending {
                id,
                deadline,
                event,
            },
        );
        id
    }

    /// Drop a scheduled event. Returns `false` if it already fired.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.id != id);
        self.pending.len() != before
    }

    /// Pop the earliest event whose deadline has passed
    pub fn pop_due(&mut self) -> Option<E> {
        let first = self.pending.first()?;
        if first.deadline > self.clock.now() {
            return None;
        }
        Some(self.pending.remove(0).event)
    }

    /// Time left until the next event is due, zero if one is overdue
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.pending
            .first()
            .map(|pending| pending.deadline.saturating_sub(self.clock.now()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
