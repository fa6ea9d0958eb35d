/*!
 * Process Executor
 * Spawns OS processes and drives them with Unix signals
 *
 * Suspend/resume is the scheduling mechanism itself: a process outside
 * the running set is held with SIGSTOP and released with SIGCONT.
 */

use super::traits::ProcessControl;
use super::types::ExecutionConfig;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Pid;
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid as NixPid;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Process control backed by fork/exec, `kill(2)` and `waitpid(2)`
#[derive(Debug, Default)]
pub struct UnixControl;

impl UnixControl {
    pub fn new() -> Self {
        info!("Unix process control initialized");
        Self
    }

    fn send(&self, pid: Pid, signal: Signal) -> SchedulerResult<()> {
        kill(NixPid::from_raw(pid), signal).map_err(|e| SchedulerError::Signal {
            pid,
            signal: signal.as_str(),
            reason: e.desc().to_string(),
        })?;
        debug!(pid, signal = signal.as_str(), "Signal delivered");
        Ok(())
    }
}

impl ProcessControl for UnixControl {
    fn spawn(&mut self, config: &ExecutionConfig) -> SchedulerResult<Pid> {
        let path = config.program_path();

        // stdin stays with the shell; output goes straight to the terminal
        let child = Command::new(&path)
            .arg0(&config.command)
            .args(&config.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| SchedulerError::SpawnFailed(format!("{}: {}", path.display(), e)))?;

        let pid = Pid::try_from(child.id()).map_err(|_| {
            SchedulerError::SpawnFailed(format!("{}: pid out of range", path.display()))
        })?;

        info!(pid, command = %config.command, args = ?config.args, "Spawned OS process");

        // Exit status is collected through waitpid in try_reap
        drop(child);
        Ok(pid)
    }

    fn suspend(&mut self, pid: Pid) -> SchedulerResult<()> {
        self.send(pid, Signal::SIGSTOP)
    }

    fn resume(&mut self, pid: Pid) -> SchedulerResult<()> {
        self.send(pid, Signal::SIGCONT)
    }

    /// SIGTERM followed by SIGCONT, so a suspended target can act on it
    fn terminate(&mut self, pid: Pid) -> SchedulerResult<()> {
        self.send(pid, Signal::SIGTERM)?;
        if let Err(e) = self.send(pid, Signal::SIGCONT) {
            debug!(pid, error = %e, "Continue after terminate not delivered");
        }
        Ok(())
    }

    fn try_reap(&mut self, pid: Pid) -> bool {
        match waitpid(NixPid::from_raw(pid), Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::StillAlive) => false,
            Ok(WaitStatus::Exited(_, code)) => {
                debug!(pid, code, "Process exited");
                true
            }
            Ok(WaitStatus::Signaled(_, signal, _)) => {
                debug!(pid, signal = signal.as_str(), "Process killed by signal");
                true
            }
            Ok(status) => {
                debug!(pid, ?status, "Process changed state");
                false
            }
            // Not our child (anymore): nothing left to wait for
            Err(Errno::ECHILD) => true,
            Err(e) => {
                warn!(pid, error = %e, "waitpid failed");
                false
            }
        }
    }
}
