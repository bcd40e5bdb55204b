//! Cancellable task primitives
//!
//! A task is a future raced against a cancellation signal. Cancellation
//! resolves the task to `Err(TaskError::Cancelled)`; it never leaves a
//! half-applied effect because the simulated work only takes effect at
//! completion.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Terminal task failures shared by every boundary task
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// The task was cancelled before completing
    #[error("operation cancelled")]
    Cancelled,
}

/// Handle used to cancel an in-flight task
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    inner: Arc<CancelInner>,
}

#[derive(Debug, Default)]
struct CancelInner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancelHandle {
    /// Create an un-cancelled handle
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; idempotent
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    /// Whether cancellation has been requested
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once cancellation is requested
    pub async fn cancelled(&self) {
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        // Register interest before the flag check so a cancel() landing
        // in between cannot be missed.
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Run `work` to completion unless cancelled first
    pub async fn run<T>(&self, work: impl Future<Output = T>) -> Result<T, TaskError> {
        tokio::select! {
            _ = self.cancelled() => Err(TaskError::Cancelled),
            value = work => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn uncancelled_work_completes() {
        let handle = CancelHandle::new();
        let result = handle
            .run(async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                7
            })
            .await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_start_short_circuits() {
        let handle = CancelHandle::new();
        handle.cancel();
        let result = handle
            .run(async {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                7
            })
            .await;
        assert_eq!(result, Err(TaskError::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_mid_flight_resolves_to_cancelled() {
        let handle = CancelHandle::new();
        let canceller = handle.clone();
        let task = tokio::spawn(async move {
            handle
                .run(async {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    7
                })
                .await
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        canceller.cancel();
        assert_eq!(task.await.unwrap(), Err(TaskError::Cancelled));
    }
}
