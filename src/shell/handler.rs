/*!
 * Command Handler
 * Runs parsed commands against the scheduler and renders replies
 */

use super::command::Command;
use crate::core::errors::SchedulerError;
use crate::core::types::Pid;
use crate::process::scheduler::Scheduler;
use crate::process::traits::ProcessControl;
use crate::process::types::ProcessRecord;
use miette::Diagnostic;
use std::fmt;
use tracing::debug;

/// User-visible result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print (successful `run`, blank line)
    Silent,
    Stopping(Pid),
    Resuming(Pid),
    Killed(Pid),
    Listing(Vec<ProcessRecord>),
    Farewell,
    Failed(SchedulerError),
}

impl Reply {
    #[inline]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Silent)
    }

    /// The scheduler has shut down and the loop must stop
    #[inline]
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Farewell)
    }

    /// Diagnostic hint for a failed command
    pub fn help(&self) -> Option<String> {
        match self {
            Self::Failed(err) => err.help().map(|h| h.to_string()),
            _ => None,
        }
    }
}

/// Wrap a failure, logging its diagnostic code and hint
fn failed(err: SchedulerError) -> Reply {
    let code = err.code().map(|c| c.to_string());
    let reply = Reply::Failed(err);
    debug!(
        code = code.as_deref(),
        help = reply.help().as_deref(),
        "Command failed: {}",
        reply
    );
    reply
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silent => Ok(()),
            Self::Stopping(pid) => write!(f, "stopping {}", pid),
            Self::Resuming(pid) => write!(f, "resuming {}", pid),
            Self::Killed(pid) => write!(f, "{} killed", pid),
            Self::Listing(records) if records.is_empty() => f.write_str("No active processes."),
            Self::Listing(records) => {
                for (i, record) in records.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}", record)?;
                }
                Ok(())
            }
            Self::Farewell => f.write_str("bye!"),
            Self::Failed(err) => write!(f, "{}", err),
        }
    }
}

/// Run one command to completion
pub fn dispatch<C: ProcessControl>(scheduler: &mut Scheduler<C>, command: Command) -> Reply {
    debug!(?command, "Handling command");

    let result = match command {
        Command::Empty => Ok(Reply::Silent),
        Command::Run(config) => scheduler.run(&config).map(|_| Reply::Silent),
        Command::Stop(pid) => scheduler.stop(pid).map(|_| Reply::Stopping(pid)),
        Command::Resume(pid) => scheduler.resume(pid).map(|r| Reply::Resuming(r.pid)),
        Command::Kill(pid) => scheduler.kill(pid).map(|_| Reply::Killed(pid)),
        Command::List => Ok(Reply::Listing(scheduler.snapshot())),
        Command::Exit => {
            scheduler.shutdown();
            Ok(Reply::Farewell)
        }
    };

    result.unwrap_or_else(failed)
}

/// Parse and run a raw input line
pub fn execute<C: ProcessControl>(scheduler: &mut Scheduler<C>, line: &str) -> Reply {
    match Command::parse_line(line) {
        Ok(command) => dispatch(scheduler, command),
        Err(err) => failed(err),
    }
}
