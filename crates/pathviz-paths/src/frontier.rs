use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry: a flat cell index with its priority and insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    priority: i32,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest insertion.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority frontier for Dijkstra and A*.
///
/// Ties are broken by insertion order so that runs are deterministic and
/// never depend on comparing cells. A cell whose priority improves while it
/// is queued gets a second entry; the stale one is dropped when popped.
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    member: Vec<bool>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            member: vec![false; len],
            seq: 0,
        }
    }

    /// Queue `idx` at `priority`. Returns `true` if the cell was not already
    /// in the frontier.
    pub(crate) fn push(&mut self, idx: usize, priority: i32) -> bool {
        let fresh = !self.member[idx];
        self.member[idx] = true;
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            idx,
        });
        self.seq += 1;
        fresh
    }

    /// Remove and return the cell with the lowest priority.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(e) = self.heap.pop() {
            if self.member[e.idx] {
                self.member[e.idx] = false;
                return Some(e.idx);
            }
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.member[idx]
    }
}
