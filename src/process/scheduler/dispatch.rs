/*!
 * Dispatcher
 * Backfills freed running slots from the ready queue
 */

use super::Scheduler;
use crate::core::types::Pid;
use crate::process::traits::ProcessControl;
use crate::process::types::ProcessState;
use tracing::{debug, warn};

impl<C: ProcessControl> Scheduler<C> {
    /// Promote the longest-waiting ready process if a slot is free
    ///
    /// This is the only path from READY to RUNNING. Called after every
    /// event that frees a running slot.
    pub fn dispatch_next(&mut self) -> Option<Pid> {
        if !self.running.has_free_slot() {
            return None;
        }
        let pid = self.ready.pop_front()?;

        self.signal_resume(pid);
        if let Err(e) = self.table.set_state(pid, ProcessState::Running) {
            warn!(pid, error = %e, "Dispatched pid has no record");
        }
        let installed = self.running.push(pid);
        debug_assert!(installed, "free slot checked above");

        debug!(pid, running = self.running.len(), "Dispatched ready process");
        Some(pid)
    }

    /// Send SIGSTOP, logging delivery failures
    pub(super) fn signal_suspend(&mut self, pid: Pid) {
        if let Err(e) = self.control.suspend(pid) {
            warn!(pid, error = %e, "Suspend failed");
        }
    }

    /// Send SIGCONT, logging delivery failures
    pub(super) fn signal_resume(&mut self, pid: Pid) {
        if let Err(e) = self.control.resume(pid) {
            warn!(pid, error = %e, "Resume failed");
        }
    }

    /// Send SIGTERM, logging delivery failures
    pub(super) fn signal_terminate(&mut self, pid: Pid) {
        if let Err(e) = self.control.terminate(pid) {
            warn!(pid, error = %e, "Terminate failed");
        }
    }
}
