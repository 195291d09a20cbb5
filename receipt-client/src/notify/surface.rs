//! Where notifications are displayed

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use shared::models::PrintOutcome;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// One on-screen status message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Raw error text, for diagnostics
    pub detail: Option<String>,
}

impl Notification {
    pub fn from_outcome(outcome: &PrintOutcome) -> Self {
        let (kind, title) = if outcome.success {
            (NotificationKind::Success, "Печать выполнена")
        } else {
            (NotificationKind::Error, "Ошибка печати")
        };
        Self {
            id: NotificationId::new(),
            kind,
            title: title.to_string(),
            message: outcome.message.clone(),
            detail: outcome.error.clone(),
        }
    }
}

/// Display target for notifications
pub trait NotificationSurface: Send + Sync {
    fn insert(&self, notification: Notification);

    /// Remove a notification; `false` when it was already gone
    fn remove(&self, id: NotificationId) -> bool;
}

/// Surface kept in memory, inspectable by the embedding application
#[derive(Debug, Clone, Default)]
pub struct InMemorySurface {
    inner: Arc<Mutex<SurfaceState>>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    visible: Vec<Notification>,
    removals: usize,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications currently displayed, oldest first
    pub fn visible(&self) -> Vec<Notification> {
        self.inner.lock().visible.clone()
    }

    pub fn is_visible(&self, id: NotificationId) -> bool {
        self.inner.lock().visible.iter().any(|n| n.id == id)
    }

    /// Successful removals since creation; repeated removals of the same
    /// id are not counted
    pub fn removals(&self) -> usize {
        self.inner.lock().removals
    }
}

impl NotificationSurface for InMemorySurface {
    fn insert(&self, notification: Notification) {
        self.inner.lock().visible.push(notification);
    }

    fn remove(&self, id: NotificationId) -> bool {
        let mut state = self.inner.lock();
        let Some(pos) = state.visible.iter().position(|n| n.id == id) else {
            return false;
        };
        state.visible.remove(pos);
        state.removals += 1;
        true
    }
}
