//! Transient print-status notifications
//!
//! - [`NotificationSurface`]: where messages are drawn
//! - [`Scheduler`]: delayed removal with cancellable [`TimerHandle`]s
//! - [`NotificationPresenter`]: one message per [`PrintOutcome`](shared::models::PrintOutcome)

mod presenter;
mod scheduler;
mod surface;

pub use presenter::{NotificationHandle, NotificationPresenter};
pub use scheduler::{Scheduler, TimerCallback, TimerHandle, TokioScheduler};
pub use surface::{
    InMemorySurface, Notification, NotificationId, NotificationKind, NotificationSurface,
};
