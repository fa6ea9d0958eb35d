/*!
 * Scheduler Core Operations
 * Run, stop, resume, kill and shutdown state transitions
 */

use super::Scheduler;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Pid;
use crate::process::traits::ProcessControl;
use crate::process::types::{ExecutionConfig, ProcessState};
use tracing::{debug, info, warn};

/// Outcome of a successful `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub pid: Pid,
    pub state: ProcessState,
}

/// Outcome of a successful `resume`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resumed {
    pub pid: Pid,
    /// Process demoted to the head of the ready queue to make room
    pub evicted: Option<Pid>,
}

/// Reject non-positive pids before any lookup
fn validate_pid(pid: Pid) -> SchedulerResult<()> {
    if pid <= 0 {
        return Err(SchedulerError::InvalidPid(pid.to_string()));
    }
    Ok(())
}

impl<C: ProcessControl> Scheduler<C> {
    /// Spawn a process and track it
    ///
    /// It joins the running set if a slot is free, otherwise it is
    /// suspended and queued at the tail of the ready queue. When the
    /// table is full the process keeps running unmanaged and
    /// `TableFull` is returned.
    pub fn run(&mut self, config: &ExecutionConfig) -> SchedulerResult<Spawned> {
        let pid = self.control.spawn(config)?;

        let state = if self.running.has_free_slot() {
            ProcessState::Running
        } else {
            ProcessState::Ready
        };

        let allocation = match self.table.allocate(pid, state) {
            Ok(allocation) => allocation,
            Err(e) => {
                warn!(pid, command = %config.command, "Process table full, process left unmanaged");
                return Err(e);
            }
        };
        if let Some(old) = allocation.displaced {
            debug!(pid = old, "Tombstone reused before collection");
            self.uncollected.push(old);
        }

        match state {
            ProcessState::Running => {
                let installed = self.running.push(pid);
                debug_assert!(installed, "free slot checked above");
            }
            _ => {
                self.signal_suspend(pid);
                self.ready.push_back(pid);
            }
        }

        info!(pid, %state, slot = allocation.slot, "Process scheduled");
        Ok(Spawned { pid, state })
    }

    /// Suspend a running process and backfill its slot
    pub fn stop(&mut self, pid: Pid) -> SchedulerResult<()> {
        validate_pid(pid)?;
        self.require(pid, ProcessState::Running)?;

        self.signal_suspend(pid);
        self.table.set_state(pid, ProcessState::Stopped)?;
        self.running.remove(pid);
        info!(pid, "Process stopped");

        self.dispatch_next();
        Ok(())
    }

    /// Continue a stopped process
    ///
    /// With no free slot, the process in the running set's last position
    /// is suspended and put at the head of the ready queue, and the
    /// resumed process takes the first position.
    pub fn resume(&mut self, pid: Pid) -> SchedulerResult<Resumed> {
        validate_pid(pid)?;
        self.require(pid, ProcessState::Stopped)?;

        if self.running.has_free_slot() {
            self.signal_resume(pid);
            self.table.set_state(pid, ProcessState::Running)?;
            let installed = self.running.push(pid);
            debug_assert!(installed, "free slot checked above");

            info!(pid, "Process resumed");
            return Ok(Resumed { pid, evicted: None });
        }

        let evicted = self.running.pop_last();
        if let Some(victim) = evicted {
            self.signal_suspend(victim);
            self.table.set_state(victim, ProcessState::Ready)?;
            self.ready.push_front(victim);
            debug!(pid = victim, "Evicted to head of ready queue");
        }

        self.signal_resume(pid);
        self.table.set_state(pid, ProcessState::Running)?;
        let installed = self.running.insert_first(pid);
        debug_assert!(installed, "slot freed by eviction");

        info!(pid, evicted = ?evicted, "Process resumed with eviction");
        Ok(Resumed { pid, evicted })
    }

    /// Terminate a running process and backfill its slot
    ///
    /// Only running processes can be killed; anything else is not found.
    pub fn kill(&mut self, pid: Pid) -> SchedulerResult<()> {
        validate_pid(pid)?;
        self.require(pid, ProcessState::Running)?;

        self.signal_terminate(pid);
        self.table.set_state(pid, ProcessState::Killed)?;
        self.running.remove(pid);
        info!(pid, "Process killed");

        self.dispatch_next();
        Ok(())
    }

    /// Terminate every running and ready process
    ///
    /// Walks the whole table. No backfill happens since the scheduler is
    /// going away. Stopped processes are left as they are.
    pub fn shutdown(&mut self) -> Vec<Pid> {
        let targets: Vec<Pid> = self
            .table
            .iter()
            .filter(|r| r.state.is_scheduled())
            .map(|r| r.pid)
            .collect();

        for &pid in &targets {
            self.signal_terminate(pid);
            if let Some(record) = self.table.find_mut(pid) {
                record.state = ProcessState::Killed;
            }
        }
        self.running.clear();
        self.ready.clear();

        info!(killed = targets.len(), "Scheduler shut down");
        targets
    }

    /// Fail with `NotFound` unless `pid` is tracked in `expected` state
    fn require(&self, pid: Pid, expected: ProcessState) -> SchedulerResult<()> {
        match self.table.state_of(pid) {
            Some(state) if state == expected => Ok(()),
            Some(state) => {
                debug!(pid, %state, %expected, "Command precondition not met");
                Err(SchedulerError::NotFound(pid))
            }
            None => Err(SchedulerError::NotFound(pid)),
        }
    }
}
