use serde::{Deserialize, Serialize};

use crate::domain::entities::Notification;

/// The closed set of in-process events the sync protocol is built on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppEvent {
    NotificationRead { notification_id: String },
    AllNotificationsRead,
    NotificationCountUpdated { count: i64 },
    NewNotification { notification: Notification },
}

/// Discriminant used to register interest in one event name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppEventKind {
    NotificationRead,
    AllNotificationsRead,
    NotificationCountUpdated,
    NewNotification,
}

impl AppEvent {
    pub fn kind(&self) -> AppEventKind {
        match self {
            AppEvent::NotificationRead { .. } => AppEventKind::NotificationRead,
            AppEvent::AllNotificationsRead => AppEventKind::AllNotificationsRead,
            AppEvent::NotificationCountUpdated { .. } => AppEventKind::NotificationCountUpdated,
            AppEvent::NewNotification { .. } => AppEventKind::NewNotification,
        }
    }

    pub fn notification_read(notification_id: impl Into<String>) -> Self {
        Self::NotificationRead {
            notification_id: notification_id.into(),
        }
    }

    pub fn count_updated(count: i64) -> Self {
        Self::NotificationCountUpdated { count }
    }

    pub fn new_notification(notification: Notification) -> Self {
        Self::NewNotification { notification }
    }
}
