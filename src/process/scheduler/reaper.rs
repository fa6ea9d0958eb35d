/*!
 * Reaper
 * Detects process exits the table does not know about yet
 */

use super::Scheduler;
use crate::core::types::Pid;
use crate::process::traits::ProcessControl;
use crate::process::types::ProcessState;
use tracing::{debug, info};

impl<C: ProcessControl> Scheduler<C> {
    /// Poll every running process for exit
    ///
    /// Exited processes become killed, leave the running set, and their
    /// slot is backfilled immediately. Returns the pids found exited.
    pub fn check_terminated(&mut self) -> Vec<Pid> {
        let mut exited = Vec::new();

        for pid in self.table.pids_in(ProcessState::Running) {
            if !self.control.try_reap(pid) {
                continue;
            }

            if let Some(record) = self.table.find_mut(pid) {
                record.state = ProcessState::Killed;
                record.reaped = true;
            }
            self.running.remove(pid);
            info!(pid, "Process exited");

            self.dispatch_next();
            exited.push(pid);
        }

        self.collect_killed();
        exited
    }

    /// Collect exit status of killed processes so they do not linger as zombies
    ///
    /// Covers tombstones still in the table and pids whose tombstone was
    /// overwritten before they could be collected.
    fn collect_killed(&mut self) {
        let Self {
            table,
            control,
            uncollected,
            ..
        } = self;
        for record in table.iter_mut() {
            if record.is_killed() && !record.reaped && control.try_reap(record.pid) {
                record.reaped = true;
                debug!(pid = record.pid, "Collected killed process");
            }
        }
        uncollected.retain(|&pid| {
            let collected = control.try_reap(pid);
            if collected {
                debug!(pid, "Collected displaced process");
            }
            !collected
        });
    }
}
