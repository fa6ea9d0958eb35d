/*!
 * Scheduler Task
 * Tick loop that owns the scheduler
 *
 * Each tick handles at most one pending command, then runs the reaper,
 * then sleeps. Commands and exit detection never run concurrently.
 */

use super::scheduler::Scheduler;
use super::traits::ProcessControl;
use crate::shell::handler::{execute, Reply};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, info};

/// Why the tick loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskExit {
    /// `exit` command processed
    Exited,
    /// Input channel closed (end of input); treated like `exit`
    InputClosed,
}

/// Scheduler tick loop
pub struct SchedulerTask<C: ProcessControl> {
    scheduler: Scheduler<C>,
    commands: mpsc::UnboundedReceiver<String>,
    tick: Duration,
}

impl<C: ProcessControl> SchedulerTask<C> {
    pub fn new(
        scheduler: Scheduler<C>,
        commands: mpsc::UnboundedReceiver<String>,
        tick: Duration,
    ) -> Self {
        Self {
            scheduler,
            commands,
            tick,
        }
    }

    pub fn scheduler(&self) -> &Scheduler<C> {
        &self.scheduler
    }

    /// Run one tick without sleeping
    ///
    /// Replies are written to `out`. Returns `Some` once the loop must stop.
    pub fn tick<W: Write>(&mut self, out: &mut W) -> io::Result<Option<TaskExit>> {
        match self.commands.try_recv() {
            Ok(line) => {
                let reply = execute(&mut self.scheduler, &line);
                if !reply.is_silent() {
                    writeln!(out, "{}", reply)?;
                    out.flush()?;
                }
                if reply.is_exit() {
                    return Ok(Some(TaskExit::Exited));
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                debug!("Command channel closed");
                self.scheduler.shutdown();
                writeln!(out, "{}", Reply::Farewell)?;
                out.flush()?;
                return Ok(Some(TaskExit::InputClosed));
            }
        }

        self.scheduler.check_terminated();
        Ok(None)
    }

    /// Tick until `exit` or end of input, handing the scheduler back
    pub async fn run<W: Write>(mut self, out: &mut W) -> io::Result<(TaskExit, Scheduler<C>)> {
        info!(tick = ?self.tick, "Scheduler loop started");

        loop {
            if let Some(exit) = self.tick(out)? {
                info!(?exit, "Scheduler loop finished");
                return Ok((exit, self.scheduler));
            }
            tokio::time::sleep(self.tick).await;
        }
    }
}
