/*!
 * Cooperative Scheduler - Main Entry Point
 *
 * Reads commands from stdin and schedules the processes they start.
 */

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::info;

use coop_sched::shell::spawn_stdin_reader;
use coop_sched::{init_tracing, Scheduler, SchedulerConfig, SchedulerTask, UnixControl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SchedulerConfig::from_env();
    info!(?config, "Cooperative scheduler starting");

    let scheduler = Scheduler::new(&config, UnixControl::new());

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(config.prompt.clone(), config.input_pacing, command_tx);

    let task = SchedulerTask::new(scheduler, command_rx, config.tick_interval);
    let mut stdout = std::io::stdout();
    let (exit, _) = task
        .run(&mut stdout)
        .await
        .context("writing scheduler output")?;

    info!(?exit, "Cooperative scheduler exiting");

    // The stdin reader may still be blocked on a read; do not wait for it
    std::process::exit(0);
}
