/*!
 * Process Table
 * Capacity-bounded record store with tombstone reuse
 */

use super::types::{ProcessRecord, ProcessState};
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Pid, SlotIndex};
use tracing::debug;

/// Authoritative record of every tracked process
///
/// Slots are never compacted. A slot is free when its record is a killed
/// tombstone; new slots are appended only while below `capacity`.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    slots: Vec<ProcessRecord>,
    capacity: usize,
}

/// Outcome of [`ProcessTable::allocate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub slot: SlotIndex,
    /// Pid of an overwritten tombstone whose exit status was never collected
    pub displaced: Option<Pid>,
}

impl ProcessTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Record `pid` in the first free slot
    pub fn allocate(&mut self, pid: Pid, state: ProcessState) -> SchedulerResult<Allocation> {
        let record = ProcessRecord::new(pid, state);

        let Some(index) = self.slots.iter().position(|r| r.state.is_terminal()) else {
            if self.slots.len() >= self.capacity {
                return Err(SchedulerError::TableFull {
                    os_pid: pid,
                    capacity: self.capacity,
                });
            }
            self.slots.push(record);
            return Ok(Allocation {
                slot: self.slots.len() - 1,
                displaced: None,
            });
        };

        let old = std::mem::replace(&mut self.slots[index], record);
        debug!(slot = index, old_pid = old.pid, pid, "Reclaiming tombstone");
        Ok(Allocation {
            slot: index,
            displaced: (!old.reaped).then_some(old.pid),
        })
    }

    /// Slot holding `pid`, preferring a live record over a tombstone
    fn position(&self, pid: Pid) -> Option<SlotIndex> {
        let matches = |live: bool| {
            self.slots
                .iter()
                .position(|r| r.pid == pid && r.state.is_terminal() != live)
        };
        matches(true).or_else(|| matches(false))
    }

    pub fn find(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.position(pid).map(|i| &self.slots[i])
    }

    pub fn find_mut(&mut self, pid: Pid) -> Option<&mut ProcessRecord> {
        self.position(pid).map(|i| &mut self.slots[i])
    }

    /// State of `pid`, if tracked
    #[inline]
    pub fn state_of(&self, pid: Pid) -> Option<ProcessState> {
        self.find(pid).map(|r| r.state)
    }

    pub fn set_state(&mut self, pid: Pid, state: ProcessState) -> SchedulerResult<()> {
        let record = self.find_mut(pid).ok_or(SchedulerError::NotFound(pid))?;
        record.state = state;
        Ok(())
    }

    /// Populated slots in table order, tombstones included
    pub fn iter(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ProcessRecord> {
        self.slots.iter_mut()
    }

    /// Pids currently in `state`, in table order
    pub fn pids_in(&self, state: ProcessState) -> Vec<Pid> {
        self.iter()
            .filter(|r| r.state == state)
            .map(|r| r.pid)
            .collect()
    }
}
