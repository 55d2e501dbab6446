//! Delayed work bound to the lifetime of its handle.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};

use crate::services::ServiceError;

/// Errors surfaced when awaiting a [`ScheduledTask`].
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("scheduled task was cancelled")]
    Cancelled,
    #[error("scheduled task panicked")]
    Panicked,
}

impl From<JoinError> for TaskError {
    fn from(err: JoinError) -> Self {
        if err.is_cancelled() {
            TaskError::Cancelled
        } else {
            TaskError::Panicked
        }
    }
}

impl From<TaskError> for ServiceError {
    fn from(_: TaskError) -> Self {
        ServiceError::Internal
    }
}

/// A job that runs after a fixed delay on the tokio runtime.
///
/// The job is aborted when the handle is dropped, so a request handler that
/// is torn down (for example because the client went away) releases its
/// timer instead of finishing the work for nobody.
pub struct ScheduledTask<T> {
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> ScheduledTask<T> {
    /// Run `job` once `delay` has elapsed.
    pub fn schedule<F>(delay: Duration, job: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            job()
        });

        Self { handle }
    }
}

impl<T> Future for ScheduledTask<T> {
    type Output = Result<T, TaskError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().handle)
            .poll(cx)
            .map_err(TaskError::from)
    }
}

impl<T> Drop for ScheduledTask<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
