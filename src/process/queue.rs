/*!
 * Scheduling Queues
 * FIFO ready queue and the bounded, ordered running set
 */

use crate::core::types::Pid;
use std::collections::VecDeque;

/// Processes waiting for a running slot, oldest first
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    queue: VecDeque<Pid>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the tail (normal arrival)
    #[inline]
    pub fn push_back(&mut self, pid: Pid) {
        self.queue.push_back(pid);
    }

    /// Insert at the head so `pid` is the next one dispatched
    #[inline]
    pub fn push_front(&mut self, pid: Pid) {
        self.queue.push_front(pid);
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<Pid> {
        self.queue.pop_front()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.queue.iter().copied()
    }
}

/// Processes currently signaled to run
///
/// Order matters: resume evicts from the last position and installs the
/// resumed process at the first.
#[derive(Debug, Clone)]
pub struct RunningSet {
    slots: Vec<Pid>,
    limit: usize,
}

impl RunningSet {
    pub fn new(limit: usize) -> Self {
        Self {
            slots: Vec::new(),
            limit,
        }
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline(always)]
    pub fn has_free_slot(&self) -> bool {
        self.slots.len() < self.limit
    }

    /// Append at the last position; returns false when full
    #[must_use]
    pub fn push(&mut self, pid: Pid) -> bool {
        if !self.has_free_slot() {
            return false;
        }
        self.slots.push(pid);
        true
    }

    /// Install at the first position; returns false when full
    #[must_use]
    pub fn insert_first(&mut self, pid: Pid) -> bool {
        if !self.has_free_slot() {
            return false;
        }
        self.slots.insert(0, pid);
        true
    }

    /// Take the process at the last position
    #[inline]
    pub fn pop_last(&mut self) -> Option<Pid> {
        self.slots.pop()
    }

    /// Remove `pid`, keeping the order of the others
    pub fn remove(&mut self, pid: Pid) -> bool {
        match self.slots.iter().position(|&p| p == pid) {
            Some(pos) => {
                self.slots.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn as_slice(&self) -> &[Pid] {
        &self.slots
    }
}
