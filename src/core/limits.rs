/*!
 * System Limits and Constants
 *
 * Centralized location for scheduler-wide limits, intervals, and magic numbers.
 * Every value here is a default; `SchedulerConfig` may override it at startup.
 */

use std::time::Duration;

// =============================================================================
// PROCESS TABLE
// =============================================================================

/// Maximum number of tracked process records
/// Tombstoned (killed) slots are reused before the table reports full
pub const DEFAULT_TABLE_CAPACITY: usize = 99;

/// Largest table capacity accepted from configuration
pub const MAX_TABLE_CAPACITY: usize = 4096;

// =============================================================================
// SCHEDULING
// =============================================================================

/// Number of processes allowed to run at the same time
pub const DEFAULT_MAX_RUNNING: usize = 3;

/// Largest concurrency limit accepted from configuration
pub const MAX_RUNNING_LIMIT: usize = 64;

/// Sleep between scheduler ticks (10ms)
/// Bounds how late a spontaneous exit is noticed by the reaper
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Longest tick interval accepted from configuration, in milliseconds (1min)
pub const MAX_TICK_MS: usize = 60_000;

/// Pause after forwarding an input line (20ms)
/// Lets the reply reach the terminal before the next prompt is drawn
pub const DEFAULT_INPUT_PACING: Duration = Duration::from_millis(20);

// =============================================================================
// SHELL
// =============================================================================

/// Interactive prompt shown before each input line
pub const DEFAULT_PROMPT: &str = "\x1B[34mcs205\x1B[0m$ ";

/// Maximum number of tokens kept from one input line (command name included)
pub const MAX_ARGS: usize = 9;
