//! Delayed callbacks with cancellable handles

use std::fmt;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::{ClientError, ClientResult};

pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Runs a callback once after a delay
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle;
}

/// Handle to a scheduled callback
///
/// Dropping the handle leaves the timer running; only `cancel` stops it.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for a timer that cannot be cancelled
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Stop the callback if it has not run yet. Repeated calls are no-ops.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Tokio-backed scheduler: one sleeping task per timer, aborted on cancel
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Scheduler bound to the runtime of the calling task
    pub fn current() -> ClientResult<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| ClientError::Config(format!("no tokio runtime: {}", e)))
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        let abort = task.abort_handle();
        TimerHandle::new(move || abort.abort())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let scheduler = TokioScheduler::current().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let _handle = scheduler.schedule(
            Duration::from_secs(5),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_callback() {
        let scheduler = TokioScheduler::current().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let mut handle = scheduler.schedule(
            Duration::from_secs(5),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        handle.cancel();
        handle.cancel();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_current_outside_runtime() {
        assert!(matches!(TokioScheduler::current(), Err(ClientError::Config(_))));
    }
}
