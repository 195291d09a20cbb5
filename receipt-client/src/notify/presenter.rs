//! Notification presenter

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use shared::models::PrintOutcome;
use tracing::debug;

use super::scheduler::{Scheduler, TimerHandle};
use super::surface::{Notification, NotificationId, NotificationSurface};

/// Shows one transient notification per print outcome
///
/// Each notification removes itself after `ttl`; no queueing or dedup.
#[derive(Clone)]
pub struct NotificationPresenter {
    surface: Arc<dyn NotificationSurface>,
    scheduler: Arc<dyn Scheduler>,
    ttl: Duration,
}

impl NotificationPresenter {
    pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

    pub fn new(surface: Arc<dyn NotificationSurface>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            surface,
            scheduler,
            ttl: Self::DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn show(&self, outcome: &PrintOutcome) -> NotificationHandle {
        let notification = Notification::from_outcome(outcome);
        let id = notification.id;
        self.surface.insert(notification);
        debug!(%id, success = outcome.success, "Notification shown");

        let surface = self.surface.clone();
        let timer = self.scheduler.schedule(
            self.ttl,
            Box::new(move || {
                if surface.remove(id) {
                    debug!(%id, "Notification expired");
                }
            }),
        );

        NotificationHandle {
            id,
            surface: self.surface.clone(),
            timer: Mutex::new(timer),
        }
    }
}

impl std::fmt::Debug for NotificationPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationPresenter")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// A displayed notification
pub struct NotificationHandle {
    id: NotificationId,
    surface: Arc<dyn NotificationSurface>,
    timer: Mutex<TimerHandle>,
}

impl NotificationHandle {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Early dismissal (click). Safe to call after expiry or repeatedly.
    pub fn dismiss(&self) {
        self.timer.lock().cancel();
        if self.surface.remove(self.id) {
            debug!(id = %self.id, "Notification dismissed");
        }
    }
}

impl std::fmt::Debug for NotificationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHandle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
