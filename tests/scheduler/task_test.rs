/*!
 * Scheduler Task Tests
 * Tick loop ordering, end of input, and reaping without commands
 */

use super::common::{FakeControl, FIRST_PID};
use coop_sched::shell::forward_lines;
use coop_sched::{ProcessState, Scheduler, SchedulerTask, TaskExit};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK: Duration = Duration::from_millis(1);

fn task(limit: usize) -> (SchedulerTask<FakeControl>, mpsc::UnboundedSender<String>, FakeControl) {
    let control = FakeControl::new();
    let scheduler = Scheduler::with_limits(limit, 8, control.clone());
    let (tx, rx) = mpsc::unbounded_channel();
    (SchedulerTask::new(scheduler, rx, TICK), tx, control)
}

#[tokio::test]
async fn test_commands_processed_in_order() {
    let (task, tx, _control) = task(3);
    for line in ["run a", "run b", "list", "exit"] {
        tx.send(line.to_string()).unwrap();
    }

    let mut out = Vec::new();
    let (exit, scheduler) = task.run(&mut out).await.unwrap();

    assert_eq!(exit, TaskExit::Exited);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{},0\n{},0\nbye!\n", FIRST_PID, FIRST_PID + 1)
    );
    assert_eq!(scheduler.state_of(FIRST_PID), Some(ProcessState::Killed));
}

#[tokio::test]
async fn test_end_of_input_shuts_down() {
    let (task, tx, _control) = task(1);
    tx.send("run a".to_string()).unwrap();
    drop(tx);

    let mut out = Vec::new();
    let (exit, scheduler) = task.run(&mut out).await.unwrap();

    assert_eq!(exit, TaskExit::InputClosed);
    assert_eq!(String::from_utf8(out).unwrap(), "bye!\n");
    assert_eq!(scheduler.state_of(FIRST_PID), Some(ProcessState::Killed));
}

#[test]
fn test_one_command_per_tick_then_reap() {
    let (mut task, tx, control) = task(1);
    tx.send("run a".to_string()).unwrap();
    tx.send("run b".to_string()).unwrap();

    let mut out = Vec::new();
    assert_eq!(task.tick(&mut out).unwrap(), None);
    assert_eq!(task.scheduler().snapshot().len(), 1);

    assert_eq!(task.tick(&mut out).unwrap(), None);
    assert_eq!(task.scheduler().ready(), vec![FIRST_PID + 1]);

    // No command pending: the reaper still notices the exit
    control.exit(FIRST_PID);
    assert_eq!(task.tick(&mut out).unwrap(), None);
    assert_eq!(
        task.scheduler().state_of(FIRST_PID),
        Some(ProcessState::Killed)
    );
    assert_eq!(task.scheduler().running(), vec![FIRST_PID + 1]);
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_input_lines_forwarded() {
    let input: &[u8] = b"run a\nlist\n";
    let (tx, mut rx) = mpsc::unbounded_channel();

    forward_lines(input, String::new(), Duration::ZERO, tx).await;

    assert_eq!(rx.recv().await.as_deref(), Some("run a"));
    assert_eq!(rx.recv().await.as_deref(), Some("list"));
    // Sender dropped at end of input
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn test_undecodable_line_does_not_end_input() {
    let input: &[u8] = b"\xff\xfe\r\nrun a\nexit\n";
    let (task, tx, _control) = task(1);

    forward_lines(input, String::new(), Duration::ZERO, tx).await;

    let mut out = Vec::new();
    let (exit, scheduler) = task.run(&mut out).await.unwrap();

    // The garbage line is rejected and the following commands still run
    assert_eq!(exit, TaskExit::Exited);
    assert_eq!(String::from_utf8(out).unwrap(), "invalid command\nbye!\n");
    assert_eq!(scheduler.state_of(FIRST_PID), Some(ProcessState::Killed));
}
