/*!
 * Command Parsing
 * Turns an input line into a typed scheduler command
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::MAX_ARGS;
use crate::core::types::Pid;
use crate::process::types::ExecutionConfig;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(ExecutionConfig),
    Stop(Pid),
    Resume(Pid),
    Kill(Pid),
    List,
    Exit,
    /// Blank line
    Empty,
}

/// Split a line into whitespace-separated tokens
///
/// Anything after the first CR or LF is dropped, and at most `MAX_ARGS`
/// tokens are kept.
pub fn tokenize(line: &str) -> Vec<&str> {
    let line = line.split(['\r', '\n']).next().unwrap_or_default();
    line.split_whitespace().take(MAX_ARGS).collect()
}

/// Parse a pid argument; it must be a positive integer
pub fn parse_pid(arg: Option<&str>) -> SchedulerResult<Pid> {
    let raw = arg.unwrap_or_default();
    match raw.parse::<Pid>() {
        Ok(pid) if pid > 0 => Ok(pid),
        _ => Err(SchedulerError::InvalidPid(raw.to_string())),
    }
}

impl Command {
    /// Build a command from tokens, the first being the command name
    pub fn parse(tokens: &[&str]) -> SchedulerResult<Self> {
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(Self::Empty);
        };
        let first = args.first().copied();

        match name {
            "run" => {
                let (&program, rest) = args
                    .split_first()
                    .ok_or_else(|| SchedulerError::InvalidCommand(name.to_string()))?;
                Ok(Self::Run(ExecutionConfig::new(program).with_args(rest.iter().copied())))
            }
            "stop" => parse_pid(first).map(Self::Stop),
            "resume" => parse_pid(first).map(Self::Resume),
            "kill" => parse_pid(first).map(Self::Kill),
            "list" => Ok(Self::List),
            "exit" => Ok(Self::Exit),
            other => Err(SchedulerError::InvalidCommand(other.to_string())),
        }
    }

    /// Tokenize and parse a raw input line
    pub fn parse_line(line: &str) -> SchedulerResult<Self> {
        Self::parse(&tokenize(line))
    }
}
