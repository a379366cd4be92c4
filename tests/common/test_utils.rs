use chrono::Utc;
use donorlink::domain::{
    entities::{
        DeviceTokenRegistration, Notification, NotificationKind, NotificationPage,
        NotificationSettings, PageInfo,
    },
    error::{DomainError, DomainResult},
    repositories::{MarkAllReadAck, MarkReadAck, NotificationStore},
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;

pub fn test_notification(id: &str, kind: NotificationKind, is_read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        kind,
        created_at: Utc::now(),
        is_read,
        title: format!("{} notification", kind),
        message: "test message".to_string(),
        blood_type: None,
        actor_name: None,
        actor_image_ref: None,
        metadata: HashMap::new(),
    }
}

pub fn push_payload(id: &str, kind: &str) -> Value {
    json!({
        "notification": {"title": "Test push", "body": "body"},
        "data": {"type": kind, "id": id}
    })
}

/// Server-side stand-in: owns the notification set the way the backend does,
/// so read mutations and the unread count stay consistent with each other.
#[derive(Default)]
pub struct InMemoryNotificationStore {
    notifications: Mutex<Vec<Notification>>,
    settings: Mutex<NotificationSettings>,
    registered_tokens: Mutex<Vec<DeviceTokenRegistration>>,
}

impl InMemoryNotificationStore {
    pub fn with_unread(count: usize) -> Self {
        let store = Self::default();
        for index in 0..count {
            store.insert(test_notification(
                &format!("seed-{}", index),
                NotificationKind::BloodNeeded,
                false,
            ));
        }
        store
    }

    /// Simulates the backend receiving a new notification out-of-band.
    pub fn insert(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }

    pub fn registered_tokens(&self) -> Vec<DeviceTokenRegistration> {
        self.registered_tokens.lock().clone()
    }
}

#[async_trait::async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn list(&self, page: u32, limit: u32) -> DomainResult<NotificationPage> {
        let notifications = self.notifications.lock();
        let total = notifications.len() as u64;
        let pages = if limit == 0 {
            0
        } else {
            (total as u32 + limit - 1) / limit
        };
        let start = ((page.max(1) - 1) * limit) as usize;
        let slice = notifications
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(NotificationPage {
            notifications: slice,
            pagination: PageInfo {
                total,
                page,
                limit,
                pages,
            },
        })
    }

    async fn mark_read(&self, notification_id: &str) -> DomainResult<MarkReadAck> {
        let mut notifications = self.notifications.lock();
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| {
                DomainError::NotFoundError(format!(
                    "Notification with id {} not found",
                    notification_id
                ))
            })?;
        notification.mark_as_read();
        Ok(MarkReadAck {
            success: true,
            message: "marked read".to_string(),
            notification_id: notification_id.to_string(),
        })
    }

    async fn mark_all_read(&self) -> DomainResult<MarkAllReadAck> {
        let mut notifications = self.notifications.lock();
        let cleared = notifications.iter().filter(|n| !n.is_read).count() as i64;
        for notification in notifications.iter_mut() {
            notification.mark_as_read();
        }
        Ok(MarkAllReadAck {
            success: true,
            message: "all read".to_string(),
            count: Some(cleared),
        })
    }

    async fn unread_count(&self) -> DomainResult<i64> {
        let notifications = self.notifications.lock();
        Ok(notifications.iter().filter(|n| !n.is_read).count() as i64)
    }

    async fn fetch_settings(&self) -> DomainResult<NotificationSettings> {
        Ok(self.settings.lock().clone())
    }

    async fn update_settings(
        &self,
        settings: &NotificationSettings,
    ) -> DomainResult<NotificationSettings> {
        *self.settings.lock() = settings.clone();
        Ok(settings.clone())
    }

    async fn register_device_token(
        &self,
        registration: &DeviceTokenRegistration,
    ) -> DomainResult<()> {
        self.registered_tokens.lock().push(registration.clone());
        Ok(())
    }
}
