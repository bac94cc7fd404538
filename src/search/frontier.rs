//! Min-ordered priority queue with deterministic tie-breaking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queued state with its path cost at insertion time.
#[derive(Debug)]
pub(crate) struct Entry<S> {
    pub priority: u32,
    pub seq: u64,
    pub cost: u32,
    pub state: S,
}

// (priority, seq) is unique per entry, so the state never takes part in
// comparisons.
impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<S> Eq for Entry<S> {}

impl<S> Ord for Entry<S> {
    // Reversed: BinaryHeap is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier of the search. Duplicates of a state may be queued; the engine
/// discards stale ones on extraction.
#[derive(Debug)]
pub(crate) struct Frontier<S> {
    heap: BinaryHeap<Entry<S>>,
    next_seq: u64,
    peak: usize,
}

impl<S> Frontier<S> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            peak: 0,
        }
    }

    pub fn push(&mut self, state: S, cost: u32, priority: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            cost,
            state,
        });
        self.peak = self.peak.max(self.heap.len());
    }

    /// Lowest priority first; among equal priorities, earliest insertion first.
    pub fn pop(&mut self) -> Option<Entry<S>> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn peak(&self) -> usize {
        self.peak
    }
}
