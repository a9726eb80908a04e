//! Recomputation queue.

use ahash::AHashSet;
use std::collections::VecDeque;

/// FIFO queue of cell addresses awaiting recomputation.
///
/// Enqueueing an address already in the queue is a no-op, so a cell is
/// recomputed at most once per position no matter how many of its
/// inputs changed in the same round.
#[derive(Debug, Default)]
pub struct RecomputeQueue {
    pending: VecDeque<String>,
    members: AHashSet<String>,
}

impl RecomputeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, address: &str) {
        if self.members.insert(address.to_string()) {
            self.pending.push_back(address.to_string());
        }
    }

    pub fn dequeue(&mut self) -> Option<String> {
        let address = self.pending.pop_front()?;
        self.members.remove(&address);
        Some(address)
    }

    /// Snapshot of the queued addresses, front first.
    pub fn pending(&self) -> Vec<String> {
        self.pending.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
