/*!
 * Scheduler Configuration
 * Runtime settings with environment overrides
 */

use crate::core::limits::{
    DEFAULT_INPUT_PACING, DEFAULT_MAX_RUNNING, DEFAULT_PROMPT, DEFAULT_TABLE_CAPACITY,
    DEFAULT_TICK_INTERVAL, MAX_RUNNING_LIMIT, MAX_TABLE_CAPACITY, MAX_TICK_MS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Scheduler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SchedulerConfig {
    /// Concurrency limit (size of the running set)
    pub max_running: usize,
    /// Maximum number of tracked process records
    pub table_capacity: usize,
    /// Sleep between scheduler ticks
    pub tick_interval: Duration,
    /// Pause after forwarding an input line
    pub input_pacing: Duration,
    pub prompt: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_running: DEFAULT_MAX_RUNNING,
            table_capacity: DEFAULT_TABLE_CAPACITY,
            tick_interval: DEFAULT_TICK_INTERVAL,
            input_pacing: DEFAULT_INPUT_PACING,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl SchedulerConfig {
    /// Defaults overlaid with `COOPSCHED_*` environment variables
    ///
    /// Environment variables:
    /// - COOPSCHED_MAX_RUNNING: concurrency limit (1..=64)
    /// - COOPSCHED_TABLE_CAPACITY: process table size (1..=4096)
    /// - COOPSCHED_TICK_MS: tick interval in milliseconds (1..=60000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(n) = bounded(&lookup, "COOPSCHED_MAX_RUNNING", MAX_RUNNING_LIMIT) {
            config.max_running = n;
        }
        if let Some(n) = bounded(&lookup, "COOPSCHED_TABLE_CAPACITY", MAX_TABLE_CAPACITY) {
            config.table_capacity = n;
        }
        if let Some(ms) = bounded(&lookup, "COOPSCHED_TICK_MS", MAX_TICK_MS) {
            config.tick_interval = Duration::from_millis(ms as u64);
        }

        config
    }
}

/// Read an integer in `1..=max`, ignoring bad values with a warning
fn bounded<F>(lookup: &F, key: &str, max: usize) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Some(n),
        _ => {
            warn!(key, value = %raw, "Ignoring invalid configuration value");
            None
        }
    }
}
