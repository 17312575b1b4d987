//! Delayed task execution with cancellation.
//!
//! `ResponseScheduler` runs a closure on the tokio runtime once a delay has
//! elapsed. Every task gets a child `CancellationToken` of the scheduler's
//! root token, so a single task can be cancelled through its handle and all
//! outstanding tasks can be cancelled at once on teardown.
//!
//! Cancellation only prevents tasks that have not fired yet. A task that has
//! already woken up may still run; callers that mutate shared state must
//! also check that the state they captured is still current (the session
//! controller does this with its generation counter).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle to a task scheduled with [`ResponseScheduler::schedule`].
///
/// Dropping the handle does not cancel the task.
#[derive(Debug)]
pub struct ScheduledTask {
    id: u64,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Prevent the task from running if it has not fired yet.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the task body has run or the task was cancelled and exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

#[derive(Debug, Clone)]
pub struct ResponseScheduler {
    root: Arc<Mutex<CancellationToken>>,
    next_id: Arc<AtomicU64>,
}

impl Default for ResponseScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseScheduler {
    pub fn new() -> Self {
        Self {
            root: Arc::new(Mutex::new(CancellationToken::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Run `task` after at least `delay`, unless cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, task: F) -> ScheduledTask
    where
        F: FnOnce() + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let token = self
            .root
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .child_token();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    debug!(task_id = id, "Scheduled task cancelled before firing");
                }
                _ = tokio::time::sleep(delay) => {
                    if task_token.is_cancelled() {
                        debug!(task_id = id, "Scheduled task cancelled at deadline");
                    } else {
                        task();
                    }
                }
            }
        });

        debug!(task_id = id, delay_ms = delay.as_millis() as u64, "Task scheduled");
        ScheduledTask { id, token, handle }
    }

    /// Cancel every outstanding task. Tasks scheduled afterwards run normally.
    pub fn cancel_all(&self) {
        let mut root = self.root.lock().unwrap_or_else(PoisonError::into_inner);
        root.cancel();
        *root = CancellationToken::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let task_count = Arc::clone(&count);
        (count, move || {
            task_count.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn task_runs_after_delay() {
        let scheduler = ResponseScheduler::new();
        let (count, task) = counter();

        let handle = scheduler.schedule(Duration::from_millis(1500), task);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(501)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!handle.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_never_runs() {
        let scheduler = ResponseScheduler::new();
        let (count, task) = counter();

        let handle = scheduler.schedule(Duration::from_millis(100), task);
        handle.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(handle.is_cancelled());
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_all_stops_outstanding_tasks_only() {
        let scheduler = ResponseScheduler::new();
        let (first_count, first) = counter();
        let (second_count, second) = counter();

        let _first = scheduler.schedule(Duration::from_millis(100), first);
        scheduler.cancel_all();
        let _second = scheduler.schedule(Duration::from_millis(100), second);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(first_count.load(Ordering::SeqCst), 0);
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn task_ids_are_unique() {
        let scheduler = ResponseScheduler::new();
        let a = scheduler.schedule(Duration::from_millis(1), || {});
        let b = scheduler.schedule(Duration::from_millis(1), || {});
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_runs_on_next_yield() {
        let scheduler = ResponseScheduler::new();
        let (count, task) = counter();

        let _handle = scheduler.schedule(Duration::ZERO, task);
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
