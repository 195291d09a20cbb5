//! Terminal rendering of print notifications

use receipt_client::InMemorySurface;
use receipt_client::notify::{Notification, NotificationId, NotificationKind, NotificationSurface};

/// Prints each notification once; removals only update the in-memory view
#[derive(Debug, Clone, Default)]
pub struct ConsoleSurface {
    inner: InMemorySurface,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One line per notification; error detail goes on the second line
pub fn render(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "[OK]",
        NotificationKind::Error => "[ERROR]",
    };
    let mut out = format!("{} {}: {}", marker, notification.title, notification.message);
    if let Some(detail) = &notification.detail {
        out.push_str("\n        ");
        out.push_str(detail);
    }
    out
}

impl NotificationSurface for ConsoleSurface {
    fn insert(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => println!("{}", render(&notification)),
            NotificationKind::Error => eprintln!("{}", render(&notification)),
        }
        self.inner.insert(notification);
    }

    fn remove(&self, id: NotificationId) -> bool {
        self.inner.remove(id)
    }
}
