/*!
 * Process Traits
 * OS process control abstraction used by the scheduler
 */

use super::types::ExecutionConfig;
use crate::core::errors::SchedulerResult;
use crate::core::types::Pid;

/// OS-level process control
///
/// The scheduler never touches processes directly; every spawn, signal
/// and exit check goes through this seam.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessControl: Send {
    /// Start a new process; it runs as soon as it exists
    fn spawn(&mut self, config: &ExecutionConfig) -> SchedulerResult<Pid>;

    /// Suspend execution (SIGSTOP)
    fn suspend(&mut self, pid: Pid) -> SchedulerResult<()>;

    /// Continue execution (SIGCONT)
    fn resume(&mut self, pid: Pid) -> SchedulerResult<()>;

    /// Ask the process to terminate (SIGTERM)
    fn terminate(&mut self, pid: Pid) -> SchedulerResult<()>;

    /// Non-blocking exit check; true once the process has exited
    fn try_reap(&mut self, pid: Pid) -> bool;
}
