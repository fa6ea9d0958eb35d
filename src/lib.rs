/*!
 * Cooperative Process Scheduler Library
 *
 * Multiplexes a fixed number of running slots across external OS
 * processes using SIGSTOP/SIGCONT:
 * - Process table with tombstone reuse
 * - FIFO ready queue and bounded running set
 * - Command handlers (run, stop, resume, kill, list, exit)
 * - Reaper for spontaneous exits
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod shell;

// Re-exports
pub use crate::config::SchedulerConfig;
pub use crate::core::{Pid, SchedulerError, SchedulerResult};
pub use crate::monitoring::init_tracing;
pub use crate::process::{
    ExecutionConfig, ProcessControl, ProcessRecord, ProcessState, Scheduler, SchedulerTask,
    TaskExit, UnixControl,
};
pub use crate::shell::{Command, Reply};
