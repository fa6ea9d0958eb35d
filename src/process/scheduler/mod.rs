/*!
 * Cooperative Scheduler
 * Multiplexes a fixed number of running slots across OS processes
 *
 * The scheduler owns the process table, the ready queue and the running
 * set. Processes outside the running set are held with SIGSTOP; freed
 * slots are backfilled from the ready queue in FIFO order.
 */

use super::queue::{ReadyQueue, RunningSet};
use super::table::ProcessTable;
use super::traits::ProcessControl;
use super::types::{ProcessRecord, ProcessState};
use crate::config::SchedulerConfig;
use crate::core::types::Pid;
use std::collections::HashSet;
use tracing::{info, warn};

mod dispatch;
mod operations;
mod reaper;

pub use operations::{Resumed, Spawned};

/// Scheduler state aggregate
///
/// All mutation happens through `&mut self`, one command at a time.
pub struct Scheduler<C: ProcessControl> {
    table: ProcessTable,
    ready: ReadyQueue,
    running: RunningSet,
    /// Killed pids whose table slot was reused before their exit was collected
    uncollected: Vec<Pid>,
    control: C,
}

impl<C: ProcessControl> Scheduler<C> {
    pub fn new(config: &SchedulerConfig, control: C) -> Self {
        Self::with_limits(config.max_running, config.table_capacity, control)
    }

    /// Create scheduler with explicit concurrency limit and table capacity
    ///
    /// A limit of zero would leave every process suspended forever, so it
    /// is raised to one.
    pub fn with_limits(max_running: usize, table_capacity: usize, control: C) -> Self {
        let max_running = if max_running == 0 {
            warn!("Concurrency limit of 0 raised to 1");
            1
        } else {
            max_running
        };
        info!(max_running, table_capacity, "Scheduler initialized");
        Self {
            table: ProcessTable::new(table_capacity),
            ready: ReadyQueue::new(),
            running: RunningSet::new(max_running),
            uncollected: Vec::new(),
            control,
        }
    }

    /// Concurrency limit
    #[inline]
    pub fn limit(&self) -> usize {
        self.running.limit()
    }

    /// Running set in slot order
    pub fn running(&self) -> Vec<Pid> {
        self.running.as_slice().to_vec()
    }

    /// Ready queue, next to dispatch first
    pub fn ready(&self) -> Vec<Pid> {
        self.ready.iter().collect()
    }

    pub fn state_of(&self, pid: Pid) -> Option<ProcessState> {
        self.table.state_of(pid)
    }

    /// Every populated table slot, tombstones included
    pub fn snapshot(&self) -> Vec<ProcessRecord> {
        self.table.iter().copied().collect()
    }

    /// Check the queue/state invariants, describing the first violation
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.running.len() > self.limit() {
            return Err(format!(
                "running set holds {} of {} slots",
                self.running.len(),
                self.limit()
            ));
        }

        let running: HashSet<Pid> = self.running.as_slice().iter().copied().collect();
        let ready: HashSet<Pid> = self.ready.iter().collect();
        if running.len() != self.running.len() || ready.len() != self.ready.len() {
            return Err("duplicate pid in a queue".to_string());
        }
        if let Some(pid) = running.intersection(&ready).next() {
            return Err(format!("pid {} is both running and ready", pid));
        }

        let mut records_running = 0;
        for record in self.table.iter() {
            let in_running = running.contains(&record.pid);
            let in_ready = ready.contains(&record.pid);
            let ok = match record.state {
                ProcessState::Running => in_running && !in_ready,
                ProcessState::Ready => in_ready && !in_running,
                // A tombstone may share its pid with a live record
                ProcessState::Stopped => !in_running && !in_ready,
                ProcessState::Killed => true,
            };
            if !ok {
                return Err(format!(
                    "pid {} is {} but running={} ready={}",
                    record.pid, record.state, in_running, in_ready
                ));
            }
            if record.is_running() {
                records_running += 1;
            }
        }

        if records_running != self.running.len() {
            return Err(format!(
                "{} running records for {} running slots",
                records_running,
                self.running.len()
            ));
        }
        for pid in running.iter().chain(ready.iter()) {
            if self.table.find(*pid).is_none() {
                return Err(format!("queued pid {} has no record", pid));
            }
        }
        Ok(())
    }
}
