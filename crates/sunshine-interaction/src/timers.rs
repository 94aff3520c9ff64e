//! Cancellable scheduled tasks for UI affordances.
//!
//! Attention triggers, tooltips and similar decorative timers carry no
//! correctness obligation beyond "eventually fires", but they must never
//! act on a widget that was torn down. Each timer is owned by its
//! orchestrator and cancelled on teardown; a cancelled timer is a no-op,
//! not an error.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A delayed task that is cancelled when its owner goes away.
///
/// Dropping the task cancels it, so storing these in the owning component
/// gives teardown-safe timers for free.
#[derive(Debug)]
pub struct ScheduledTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Runs `work` after `delay` unless cancelled first.
    pub fn spawn<F>(delay: Duration, work: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let child = token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = child.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    work.await;
                }
            }
        });

        Self { token, handle }
    }

    /// Cancels the task. Idempotent; a task that already fired is unaffected.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the underlying task has run to completion (fired or cancelled).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn test_fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let _task = ScheduledTask::spawn(Duration::from_millis(10), async move {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancel_prevents_firing() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let task = ScheduledTask::spawn(Duration::from_millis(20), async move {
            flag.store(true, Ordering::SeqCst);
        });
        task.cancel();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(task.is_finished());
    }

    #[tokio::test]
    async fn test_drop_cancels() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        {
            let _task = ScheduledTask::spawn(Duration::from_millis(20), async move {
                flag.store(true, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
