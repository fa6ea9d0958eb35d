/*!
 * Process Module
 * Process table, scheduling queues, OS control, and the tick loop
 */

pub mod executor;
pub(crate) mod queue;
pub mod scheduler;
pub mod scheduler_task;
pub(crate) mod table;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use executor::UnixControl;
pub use scheduler::{Resumed, Scheduler, Spawned};
pub use scheduler_task::{SchedulerTask, TaskExit};
pub use traits::ProcessControl;
pub use types::{ExecutionConfig, ProcessRecord, ProcessState};
