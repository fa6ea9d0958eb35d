/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 *
 * The `Display` text of each variant is the diagnostic shown to the user,
 * so command handlers can report errors by printing them unchanged.
 */

use super::types::Pid;
use miette::Diagnostic;
use thiserror::Error;

/// Scheduler operation result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Scheduler errors
///
/// None of these are fatal: every command that fails leaves the
/// process table, ready queue and running set untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum SchedulerError {
    #[error("The process ID must be a positive integer.")]
    #[diagnostic(
        code(scheduler::invalid_pid),
        help("Pass the numeric pid shown by `list`.")
    )]
    InvalidPid(String),

    #[error("Process {0} not found.")]
    #[diagnostic(
        code(scheduler::not_found),
        help("The process may not exist or may not be in a state that allows this command.")
    )]
    NotFound(Pid),

    #[error("Process table full, cannot track more processes.")]
    #[diagnostic(
        code(scheduler::table_full),
        help("The process was started but runs unmanaged. Kill finished processes to free slots.")
    )]
    TableFull { os_pid: Pid, capacity: usize },

    #[error("failed to start {0}")]
    #[diagnostic(
        code(scheduler::spawn_failed),
        help("Check that the program exists and is executable.")
    )]
    SpawnFailed(String),

    #[error("failed to send {signal} to {pid}: {reason}")]
    #[diagnostic(code(scheduler::signal_failed))]
    Signal {
        pid: Pid,
        signal: &'static str,
        reason: String,
    },

    #[error("invalid command")]
    #[diagnostic(
        code(scheduler::invalid_command),
        help("Known commands: run, stop, resume, kill, list, exit.")
    )]
    InvalidCommand(String),
}
