//! Virtual clock and delayed-action queue.
//!
//! Every timed effect in a round (delayed sounds, mid-flight deflection,
//! delayed destruction, slot resolution) is an entry in a [`Scheduler`] keyed
//! on virtual-clock time. The clock can be frozen, which suspends dispatch of
//! everything still pending.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Scaled game clock. Real frame deltas are multiplied by `time_scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualClock {
    /// Virtual seconds elapsed since creation.
    pub now: f64,
    /// 1.0 = real time, 0.0 = frozen.
    pub time_scale: f64,
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualClock {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            time_scale: 1.0,
        }
    }

    /// Advance by a real delta. Returns the scaled delta actually applied.
    pub fn advance(&mut self, real_dt: f64) -> f64 {
        let scaled = real_dt.max(0.0) * self.time_scale;
        self.now += scaled;
        scaled
    }

    pub fn freeze(&mut self) {
        self.time_scale = 0.0;
    }

    pub fn resume(&mut self) {
        self.time_scale = 1.0;
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale == 0.0
    }
}

struct Entry<A> {
    due: f64,
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    // Reversed so the max-heap pops the earliest due time, then the oldest entry.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .total_cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-queue of delayed actions. Ties on due time dispatch in insertion order.
pub struct Scheduler<A> {
    queue: BinaryHeap<Entry<A>>,
    next_seq: u64,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Queue `action` to fire `delay` seconds after `now`.
    pub fn schedule(&mut self, now: f64, delay: f64, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            due: now + delay.max(0.0),
            seq,
            action,
        });
    }

    /// Pop every action whose due time is at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: f64) -> Vec<A> {
        let mut due = Vec::new();
        while self.queue.peek().is_some_and(|entry| entry.due <= now) {
            if let Some(entry) = self.queue.pop() {
                due.push(entry.action);
            }
        }
        due
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
