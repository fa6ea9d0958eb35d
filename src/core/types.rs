/*!
 * Core Types
 * Common types used across the scheduler
 */

/// OS process ID type (matches the platform `pid_t`)
pub type Pid = i32;

/// Index of a slot in the process table
pub type SlotIndex = usize;
