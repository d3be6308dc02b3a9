use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use super::NotificationId;
use crate::app::AppEvent;

/// Arms a one-shot expiry timer for a displayed notification.
///
/// Implementations must deliver the expiry back through the same serialized
/// event stream the center is driven from.
pub trait ExpiryScheduler {
    fn schedule(&self, id: NotificationId, after: Duration);
}

/// Sleeps on the tokio runtime, then sends [`AppEvent::NotificationExpired`].
#[derive(Debug, Clone)]
pub struct ChannelScheduler {
    events: UnboundedSender<AppEvent>,
}

impl ChannelScheduler {
    pub fn new(events: UnboundedSender<AppEvent>) -> Self {
        Self { events }
    }
}

impl ExpiryScheduler for ChannelScheduler {
    fn schedule(&self, id: NotificationId, after: Duration) {
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // The loop is gone when the app is shutting down.
            if events.send(AppEvent::NotificationExpired(id)).is_err() {
                tracing::trace!(%id, "event loop closed before expiry");
            }
        });
    }
}
