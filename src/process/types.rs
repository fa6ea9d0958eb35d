/*!
 * Process Types
 * Common types for process management
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Signaled to execute, occupies a running slot
    Running,
    /// Waiting in the ready queue for a free slot
    Ready,
    /// Suspended by the user, in no queue
    Stopped,
    /// Exited or terminated; the record is a tombstone
    Killed,
}

impl ProcessState {
    /// Numeric code printed by `list`
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Running => 0,
            Self::Ready => 1,
            Self::Stopped => 2,
            Self::Killed => 3,
        }
    }

    /// Whether the record holds a slot that `allocate` may reuse
    #[inline(always)]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Killed)
    }

    /// Whether the process belongs to the running set or the ready queue
    #[inline(always)]
    #[must_use]
    pub const fn is_scheduled(self) -> bool {
        matches!(self, Self::Running | Self::Ready)
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Running => "running",
            Self::Ready => "ready",
            Self::Stopped => "stopped",
            Self::Killed => "killed",
        };
        f.write_str(name)
    }
}

/// One tracked process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub state: ProcessState,
    /// Exit status has been collected (only meaningful once killed)
    #[serde(skip)]
    pub(crate) reaped: bool,
}

impl ProcessRecord {
    #[inline]
    #[must_use]
    pub const fn new(pid: Pid, state: ProcessState) -> Self {
        Self {
            pid,
            state,
            reaped: false,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ProcessState::Running)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_killed(&self) -> bool {
        matches!(self.state, ProcessState::Killed)
    }
}

/// `list` line format: `<pid>,<code>`
impl fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.pid, self.state.code())
    }
}

/// Configuration for process execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExecutionConfig {
    pub command: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl ExecutionConfig {
    #[inline]
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: vec![],
        }
    }

    #[inline]
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Path handed to exec
    ///
    /// Commands that are neither absolute nor explicitly relative are
    /// looked up in the current directory, never on `PATH`.
    #[must_use]
    pub fn program_path(&self) -> PathBuf {
        if self.command.starts_with('/') || self.command.starts_with('.') {
            PathBuf::from(&self.command)
        } else {
            PathBuf::from(format!("./{}", self.command))
        }
    }
}
