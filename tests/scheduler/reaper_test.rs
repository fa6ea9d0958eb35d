/*!
 * Reaper Tests
 * Spontaneous exit detection and backfill
 */

use super::common::{scheduler, spawn_many, Event};
use coop_sched::{ExecutionConfig, ProcessState};
use pretty_assertions::assert_eq;

#[test]
fn test_nothing_exited() {
    let (mut sched, _control) = scheduler(2, 8);
    spawn_many(&mut sched, 3);

    assert!(sched.check_terminated().is_empty());
    assert_eq!(sched.running().len(), 2);
}

#[test]
fn test_exit_detected_and_backfilled() {
    let (mut sched, control) = scheduler(3, 8);
    let pids = spawn_many(&mut sched, 4);
    control.clear_events();

    control.exit(pids[1]);
    let exited = sched.check_terminated();

    assert_eq!(exited, vec![pids[1]]);
    assert_eq!(sched.state_of(pids[1]), Some(ProcessState::Killed));
    // Order of the survivors is kept, the promoted process goes last
    assert_eq!(sched.running(), vec![pids[0], pids[2], pids[3]]);
    assert!(sched.ready().is_empty());
    assert_eq!(control.events(), vec![Event::Resume(pids[3])]);
    assert!(sched.check_invariants().is_ok());
}

#[test]
fn test_stopped_process_not_polled() {
    let (mut sched, control) = scheduler(2, 8);
    let pids = spawn_many(&mut sched, 1);
    sched.stop(pids[0]).unwrap();

    control.exit(pids[0]);
    assert!(sched.check_terminated().is_empty());
    assert_eq!(sched.state_of(pids[0]), Some(ProcessState::Stopped));
}

#[test]
fn test_exit_is_reported_once() {
    let (mut sched, control) = scheduler(1, 8);
    let pids = spawn_many(&mut sched, 1);

    control.exit(pids[0]);
    assert_eq!(sched.check_terminated(), vec![pids[0]]);
    assert!(sched.check_terminated().is_empty());
    assert!(sched.running().is_empty());
}

#[test]
fn test_several_exits_in_one_pass() {
    let (mut sched, control) = scheduler(2, 8);
    let pids = spawn_many(&mut sched, 4);

    control.exit(pids[0]);
    control.exit(pids[1]);
    let exited = sched.check_terminated();

    assert_eq!(exited, vec![pids[0], pids[1]]);
    assert_eq!(sched.running(), vec![pids[2], pids[3]]);
    assert!(sched.check_invariants().is_ok());
}

#[test]
fn test_killed_process_collected_after_slot_reuse() {
    let (mut sched, control) = scheduler(1, 1);
    let pids = spawn_many(&mut sched, 1);
    let old = pids[0];

    // SIGTERM handler still running when the slot is handed out again
    control.linger_on_terminate(true);
    sched.kill(old).unwrap();
    sched.check_terminated();
    let fresh = sched.run(&ExecutionConfig::new("next")).unwrap();
    assert_eq!(sched.state_of(old), None);
    assert!(control.collected().is_empty());

    control.exit(old);
    sched.check_terminated();
    assert_eq!(control.collected(), vec![old]);

    // Collected once, never polled again
    sched.check_terminated();
    assert_eq!(control.collected(), vec![old]);
    assert_eq!(sched.state_of(fresh.pid), Some(ProcessState::Running));
}
