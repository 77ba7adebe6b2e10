//! Tokio-backed [`Scheduler`] for delayed jobs.

use std::time::Duration;

use lib_core::scheduler::{Job, ScheduledTask, Scheduler};
use tokio::runtime::Handle;

use crate::utils::runtime::TOKIO_RT;

/// Runs each job after `tokio::time::sleep(delay)` unless its handle was cancelled first.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Scheduler on the process-wide runtime.
    pub fn new() -> Self {
        Self::with_handle(TOKIO_RT.handle().clone())
    }

    pub fn with_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> ScheduledTask {
        let task = ScheduledTask::new();
        let guard = task.clone();

        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if guard.is_cancelled() {
                tracing::debug!("Scheduled job cancelled before firing");
                return;
            }
            job();
        });

        task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap()
    }

    #[test]
    fn test_job_fires_after_delay() {
        let rt = runtime();
        let scheduler = TokioScheduler::with_handle(rt.handle().clone());
        let (tx, rx) = mpsc::channel();

        scheduler.schedule(
            Duration::from_millis(20),
            Box::new(move || {
                tx.send("fired").unwrap();
            }),
        );

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok("fired"));
    }

    #[test]
    fn test_cancelled_job_does_not_fire() {
        let rt = runtime();
        let scheduler = TokioScheduler::with_handle(rt.handle().clone());
        let (tx, rx) = mpsc::channel::<()>();

        let task = scheduler.schedule(
            Duration::from_millis(50),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        task.cancel();

        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }
}
