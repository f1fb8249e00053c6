//! Min-priority frontier shared by the graph searches.
//!
//! `std::collections::BinaryHeap` is a max-heap; entries are ordered in reverse
//! so the smallest priority pops first. Equal priorities pop in insertion order,
//! which keeps searches deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<P, T> {
    priority: P,
    seq: u64,
    item: T,
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

impl<P: Ord, T> Ord for Entry<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue popping the lowest priority first.
///
/// Stale entries are not removed on decrease-key; callers skip them on pop
/// (lazy deletion).
pub struct Frontier<P: Ord, T> {
    heap: BinaryHeap<Entry<P, T>>,
    seq: u64,
}

impl<P: Ord, T> Frontier<P, T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub fn push(&mut self, priority: P, item: T) {
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            item,
        });
        self.seq += 1;
    }

    pub fn pop(&mut self) -> Option<(P, T)> {
        self.heap.pop().map(|e| (e.priority, e.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<P: Ord, T> Default for Frontier<P, T> {
    fn default() -> Self {
        Self::new()
    }
}
