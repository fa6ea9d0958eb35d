/*!
 * Test Support
 * Recording process control for deterministic scheduler tests
 */

use coop_sched::{ExecutionConfig, Pid, ProcessControl, Scheduler, SchedulerError, SchedulerResult};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// First pid handed out by the fake
pub const FIRST_PID: Pid = 1000;

/// Control operation observed by the fake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Spawn(Pid),
    Suspend(Pid),
    Resume(Pid),
    Terminate(Pid),
}

#[derive(Debug)]
struct Inner {
    next_pid: Pid,
    events: Vec<Event>,
    exited: HashSet<Pid>,
    collected: Vec<Pid>,
    fail_spawn: bool,
    linger: bool,
}

/// Shared-handle fake: clone it, give one copy to the scheduler, inspect the other
#[derive(Debug, Clone)]
pub struct FakeControl {
    inner: Arc<Mutex<Inner>>,
}

impl FakeControl {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_pid: FIRST_PID,
                events: Vec::new(),
                exited: HashSet::new(),
                collected: Vec::new(),
                fail_spawn: false,
                linger: false,
            })),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.inner.lock().events.clone()
    }

    pub fn clear_events(&self) {
        self.inner.lock().events.clear();
    }

    /// Simulate the process exiting on its own
    pub fn exit(&self, pid: Pid) {
        self.inner.lock().exited.insert(pid);
    }

    pub fn fail_spawns(&self, fail: bool) {
        self.inner.lock().fail_spawn = fail;
    }

    /// Terminated processes keep running until `exit` is called for them
    pub fn linger_on_terminate(&self, linger: bool) {
        self.inner.lock().linger = linger;
    }

    /// Pids whose exit status was collected, in collection order
    pub fn collected(&self) -> Vec<Pid> {
        self.inner.lock().collected.clone()
    }
}

impl ProcessControl for FakeControl {
    fn spawn(&mut self, config: &ExecutionConfig) -> SchedulerResult<Pid> {
        let mut inner = self.inner.lock();
        if inner.fail_spawn {
            return Err(SchedulerError::SpawnFailed(
                config.program_path().display().to_string(),
            ));
        }
        let pid = inner.next_pid;
        inner.next_pid += 1;
        inner.events.push(Event::Spawn(pid));
        Ok(pid)
    }

    fn suspend(&mut self, pid: Pid) -> SchedulerResult<()> {
        self.inner.lock().events.push(Event::Suspend(pid));
        Ok(())
    }

    fn resume(&mut self, pid: Pid) -> SchedulerResult<()> {
        self.inner.lock().events.push(Event::Resume(pid));
        Ok(())
    }

    fn terminate(&mut self, pid: Pid) -> SchedulerResult<()> {
        let mut inner = self.inner.lock();
        inner.events.push(Event::Terminate(pid));
        if !inner.linger {
            inner.exited.insert(pid);
        }
        Ok(())
    }

    fn try_reap(&mut self, pid: Pid) -> bool {
        let mut inner = self.inner.lock();
        let exited = inner.exited.contains(&pid);
        if exited {
            inner.collected.push(pid);
        }
        exited
    }
}

/// Scheduler over a fake, plus the handle to inspect it
pub fn scheduler(limit: usize, capacity: usize) -> (Scheduler<FakeControl>, FakeControl) {
    let control = FakeControl::new();
    (Scheduler::with_limits(limit, capacity, control.clone()), control)
}

/// Start `n` processes and return their pids in spawn order
pub fn spawn_many(scheduler: &mut Scheduler<FakeControl>, n: usize) -> Vec<Pid> {
    (0..n)
        .map(|i| {
            scheduler
                .run(&ExecutionConfig::new(format!("worker{}", i)))
                .expect("spawn")
                .pid
        })
        .collect()
}
