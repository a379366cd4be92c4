use crate::domain::{
    entities::Notification,
    error::{DomainError, DomainResult},
    events::{AppEvent, SharedEventBus},
    repositories::DynNotificationStore,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

#[cfg(test)]
use mockall::automock;

/// Coordinates read/unread mutations between the remote store and the local
/// event protocol. Every mutation is remote-first: the matching local event
/// is published only after the store call succeeds, so a failed remote call
/// can never produce a false "read" signal.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationSyncService: Send + Sync {
    async fn mark_one_read(&self, notification_id: &str) -> DomainResult<()>;

    /// Marks everything read. Returns the unread count the server reports as
    /// cleared, when it reports one.
    async fn mark_all_read(&self) -> DomainResult<Option<i64>>;

    /// Fetches and broadcasts the authoritative unread count. This is the
    /// only source of the displayed value; local arithmetic is never final.
    async fn refresh_unread_count(&self) -> DomainResult<i64>;

    /// Normalizes a provider payload, announces it locally, and triggers an
    /// independent count refresh.
    async fn ingest_push_event(&self, raw: Value) -> DomainResult<Notification>;
}

pub type DynNotificationSyncService = Arc<dyn NotificationSyncService>;

#[derive(Clone)]
pub struct DefaultNotificationSyncService {
    store: DynNotificationStore,
    events: SharedEventBus,
}

impl DefaultNotificationSyncService {
    pub fn new(store: DynNotificationStore, events: SharedEventBus) -> Self {
        Self { store, events }
    }
}

#[async_trait]
impl NotificationSyncService for DefaultNotificationSyncService {
    async fn mark_one_read(&self, notification_id: &str) -> DomainResult<()> {
        self.store
            .mark_read(notification_id)
            .await
            .map_err(DomainError::mutation_failed)?;
        self.events
            .publish(&AppEvent::notification_read(notification_id));
        Ok(())
    }

    async fn mark_all_read(&self) -> DomainResult<Option<i64>> {
        let ack = self
            .store
            .mark_all_read()
            .await
            .map_err(DomainError::mutation_failed)?;

        // Two events, in this order: a consumer listening only to the count
        // event still converges to zero.
        self.events.publish(&AppEvent::AllNotificationsRead);
        self.events.publish(&AppEvent::count_updated(0));
        Ok(ack.count)
    }

    async fn refresh_unread_count(&self) -> DomainResult<i64> {
        let count = self.store.unread_count().await?;
        self.events.publish(&AppEvent::count_updated(count));
        Ok(count)
    }

    async fn ingest_push_event(&self, raw: Value) -> DomainResult<Notification> {
        let notification = Notification::from_push_payload(&raw)?;
        self.events
            .publish(&AppEvent::new_notification(notification.clone()));

        // The push channel already showed the notification to the user, so
        // the follow-up count refresh is fire-and-forget; a failure here is
        // only logged.
        let service = self.clone();
        tokio::spawn(async move {
            if let Err(error) = service.refresh_unread_count().await {
                warn!("unread count refresh after push ingest failed: {}", error);
            }
        });

        Ok(notification)
    }
}
