//! Handles to in-flight store operations.
//!
//! Every store operation runs on a spawned task that first waits out the
//! simulated latency. The handle is a future of the operation's result and
//! can cancel the operation while it is still waiting.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::{Result, StoreError};

/// An in-flight store operation.
///
/// Dropping the handle detaches the operation; it still completes.
#[derive(Debug)]
pub struct Pending<T> {
    handle: JoinHandle<Result<T>>,
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl<T: Send + 'static> Pending<T> {
    /// Run `op` after `delay` on a new task. Must be called within a Tokio
    /// runtime.
    pub(crate) fn spawn<F>(delay: Duration, op: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => op(),
                // A dropped sender disables this branch; only an explicit
                // cancel ends the wait early.
                Ok(()) = &mut cancel_rx => Err(StoreError::Cancelled),
            }
        });

        Self {
            handle,
            cancel_tx: Some(cancel_tx),
        }
    }
}

impl<T> Pending<T> {
    /// Cancel the operation if it has not started yet.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Returns true once the operation has finished or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T> Future for Pending<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(e)) => Poll::Ready(Err(StoreError::Task(e.to_string()))),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn completes_after_delay() {
        let pending = Pending::spawn(Duration::from_millis(300), || Ok(42));
        let start = tokio::time::Instant::now();
        assert_eq!(pending.await.unwrap(), 42);
        assert_eq!(start.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_delay() {
        let mut pending = Pending::spawn(Duration::from_secs(1), || Ok(()));
        tokio::task::yield_now().await;
        pending.cancel();
        assert!(matches!(pending.await, Err(StoreError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_completion_is_ignored() {
        let mut pending = Pending::spawn(Duration::from_millis(10), || Ok("done"));
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(20)).await;
        tokio::task::yield_now().await;
        pending.cancel();
        assert_eq!(pending.await.unwrap(), "done");
    }

    #[tokio::test(start_paused = true)]
    async fn operation_errors_are_returned() {
        let pending: Pending<()> = Pending::spawn(Duration::ZERO, || {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        });
        assert!(matches!(pending.await, Err(StoreError::Io(_))));
    }
}
