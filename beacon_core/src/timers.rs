// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

//! A deadline queue for the repeating timers that drive widget animations.

use std::collections::{BinaryHeap, HashSet};
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::WidgetId;
use crate::util::{Duration, Instant};

/// Token identifying a timer requested through
/// [`UpdateCtx::request_timer`](crate::core::UpdateCtx::request_timer).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct TimerId(NonZeroU64);

impl TimerId {
    /// Allocate a fresh timer id.
    pub fn next() -> Self {
        static TIMER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        let id = TIMER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(id.try_into().unwrap())
    }
}

/// A repeating timer armed for a widget.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Timer {
    /// The token returned to the widget that requested the timer.
    pub id: TimerId,
    /// The widget the timer callback is dispatched to.
    pub widget_id: WidgetId,
    /// When the timer next fires.
    pub deadline: Instant,
    /// Interval between firings. Must be non-zero.
    pub period: Duration,
}

impl Timer {
    /// Create a timer first due one period from `now`.
    pub fn new(widget_id: WidgetId, now: Instant, period: Duration) -> Self {
        Self {
            id: TimerId::next(),
            widget_id,
            deadline: now + period,
            period,
        }
    }

    /// The same timer, re-armed one period after its previous deadline.
    ///
    /// Re-arming from the deadline rather than from the current time keeps
    /// the tick cadence steady even when dispatch lags.
    fn rearmed(self) -> Self {
        Self {
            deadline: self.deadline + self.period,
            ..self
        }
    }
}

// We implement `Ord` first by comparing `deadline`, and then
// `id`. This way, we ensure that timers with the same expiry
// time will trigger in the order they were created.
//
// Because Rust std's `BinaryHeap` is max-first, we need to reverse
// both comparisons.
impl Ord for Timer {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.deadline
            .cmp(&other.deadline)
            .reverse()
            .then(self.id.cmp(&other.id).reverse())
    }
}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// An ordered list of the timers armed by Beacon widgets.
///
/// Implemented as a min priority queue with lazy cancellation: cancelled
/// entries stay in the heap and are dropped when they surface. The host's
/// event loop (or the test harness clock) drains due timers with
/// [`pop_due`](Self::pop_due) and dispatches them one at a time, so timer
/// callbacks never overlap paints or setters.
pub struct TimerQueue {
    queue: BinaryHeap<Timer>,
    cancelled: HashSet<TimerId>,
}

impl TimerQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            cancelled: HashSet::new(),
        }
    }

    /// Arm a timer.
    pub fn push(&mut self, timer: Timer) {
        self.queue.push(timer);
    }

    /// Cancel a timer.
    ///
    /// Cancellation is synchronous: once this returns, the timer will not
    /// fire again. Cancelling a timer twice, or cancelling an id that was
    /// never armed, is a no-op.
    pub fn cancel(&mut self, id: TimerId) {
        if self.queue.iter().any(|timer| timer.id == id) {
            self.cancelled.insert(id);
        }
    }

    /// Whether any live timer remains armed.
    pub fn is_empty(&self) -> bool {
        self.queue.len() == self.cancelled.len()
    }

    /// Remove and return the next timer due at or before `now`, re-arming
    /// it for its following deadline.
    ///
    /// Returns `None` once every remaining timer is either cancelled or
    /// due after `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Timer> {
        while let Some(timer) = self.queue.peek().copied() {
            if timer.deadline > now {
                return None;
            }
            self.queue.pop();
            if self.cancelled.remove(&timer.id) {
                continue;
            }
            self.queue.push(timer.rearmed());
            return Some(timer);
        }
        None
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use super::*;

    fn queue_with(timers: &[Timer]) -> TimerQueue {
        let mut queue = TimerQueue::new();
        for timer in timers {
            queue.push(*timer);
        }
        queue
    }

    #[test]
    fn timers_fire_in_deadline_order() {
        let widget_id = WidgetId::next();
        let now = Instant::now();
        let slow = Timer::new(widget_id, now, Duration::from_millis(50));
        let fast = Timer::new(widget_id, now, Duration::from_millis(10));
        let mut queue = queue_with(&[slow, fast]);

        // Only the fast timer is due within the first 15ms.
        let first = queue.pop_due(now + Duration::from_millis(15)).unwrap();
        assert_eq!(first.id, fast.id);
        assert_eq!(first.deadline, now + Duration::from_millis(10));
        assert!(queue.pop_due(now + Duration::from_millis(15)).is_none());

        // The fast timer re-armed to 20ms, still ahead of the slow one.
        let second = queue.pop_due(now + Duration::from_millis(25)).unwrap();
        assert_eq!(second.id, fast.id);
        assert_eq!(second.deadline, now + Duration::from_millis(20));
    }

    #[test]
    fn simultaneous_deadlines_fire_in_creation_order() {
        let widget_id = WidgetId::next();
        let now = Instant::now();
        let first = Timer::new(widget_id, now, Duration::from_millis(10));
        let second = Timer::new(widget_id, now, Duration::from_millis(10));
        let mut queue = queue_with(&[second, first]);

        let due = now + Duration::from_millis(10);
        assert_eq!(queue.pop_due(due).unwrap().id, first.id);
        assert_eq!(queue.pop_due(due).unwrap().id, second.id);
        assert!(queue.pop_due(due).is_none());
    }

    #[test]
    fn pop_due_rearms_repeating_timers() {
        let widget_id = WidgetId::next();
        let now = Instant::now();
        let timer = Timer::new(widget_id, now, Duration::from_millis(10));
        let mut queue = queue_with(&[timer]);

        // Three periods have elapsed, so the timer fires three times.
        let later = now + Duration::from_millis(30);
        assert!(queue.pop_due(later).is_some());
        assert!(queue.pop_due(later).is_some());
        assert!(queue.pop_due(later).is_some());
        assert!(queue.pop_due(later).is_none());
        assert!(!queue.is_empty());
    }

    #[test]
    fn cancel_is_synchronous_and_idempotent() {
        let widget_id = WidgetId::next();
        let now = Instant::now();
        let timer = Timer::new(widget_id, now, Duration::from_millis(10));
        let mut queue = queue_with(&[timer]);

        queue.cancel(timer.id);
        queue.cancel(timer.id);
        assert!(queue.pop_due(now + Duration::from_secs(10)).is_none());
        assert!(queue.is_empty());

        // Cancelling an id that was never armed is a no-op.
        queue.cancel(TimerId::next());
        assert!(queue.is_empty());
    }

    #[test]
    fn cancel_does_not_affect_other_timers() {
        let widget_id = WidgetId::next();
        let now = Instant::now();
        let kept = Timer::new(widget_id, now, Duration::from_millis(10));
        let dropped = Timer::new(widget_id, now, Duration::from_millis(5));
        let mut queue = queue_with(&[kept, dropped]);

        queue.cancel(dropped.id);
        let fired = queue.pop_due(now + Duration::from_millis(10)).unwrap();
        assert_eq!(fired.id, kept.id);
    }
}
