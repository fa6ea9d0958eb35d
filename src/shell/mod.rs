/*!
 * Shell Module
 * Line-oriented command interface to the scheduler
 */

pub mod command;
pub mod handler;
pub mod input;

pub use command::{parse_pid, tokenize, Command};
pub use handler::{dispatch, execute, Reply};
pub use input::{forward_lines, spawn_stdin_reader};
