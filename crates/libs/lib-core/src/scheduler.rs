//! # Delayed Tasks
//!
//! The wallet simulator needs exactly one thing from the outside world: "run this later".
//! [`Scheduler`] is that seam.
//!
//! - Production schedulers live with the runtime that drives them (the desktop crate runs
//!   jobs on its tokio runtime).
//! - [`ManualScheduler`] is a deterministic fake. Time only advances when you tell it to.
//!
//! Every scheduled job returns a [`ScheduledTask`] handle. Cancelling the handle guarantees
//! the job will not run if it has not started yet.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

/// Work to run once the delay elapses.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a job after a delay.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, job: Job) -> ScheduledTask;
}

/// Cancellation handle for a scheduled job.
#[derive(Debug, Clone, Default)]
pub struct ScheduledTask {
    cancelled: Arc<AtomicBool>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

struct PendingJob {
    due: Duration,
    seq: u64,
    task: ScheduledTask,
    job: Job,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingJob>,
}

/// A deterministic scheduler for testing.
///
/// Jobs fire in due-time order (ties in scheduling order) when [`advance`](Self::advance)
/// moves the virtual clock past their deadline. Jobs run outside the internal lock, so a job
/// may schedule further work.
#[derive(Default)]
pub struct ManualScheduler {
    inner: Mutex<ManualInner>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    pub fn now(&self) -> Duration {
        self.inner.lock().now
    }

    /// Jobs scheduled and neither run nor cancelled.
    pub fn pending(&self) -> usize {
        self.inner
            .lock()
            .pending
            .iter()
            .filter(|p| !p.task.is_cancelled())
            .count()
    }

    /// Advance the virtual clock and run every job that became due. Returns how many ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.inner.lock().now + by;
        let mut ran = 0;

        loop {
            let next = {
                let mut inner = self.inner.lock();
                inner.pending.retain(|p| !p.task.is_cancelled());

                let due = inner
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);

                match due {
                    Some(i) => {
                        let job = inner.pending.remove(i);
                        inner.now = inner.now.max(job.due);
                        Some(job)
                    }
                    None => {
                        inner.now = target;
                        None
                    }
                }
            };

            match next {
                Some(pending) => {
                    if !pending.task.is_cancelled() {
                        (pending.job)();
                        ran += 1;
                    }
                }
                None => break,
            }
        }

        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> ScheduledTask {
        let task = ScheduledTask::new();
        let mut inner = self.inner.lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let due = inner.now + delay;
        inner.pending.push(PendingJob {
            due,
            seq,
            task: task.clone(),
            job,
        });
        task
    }
}
