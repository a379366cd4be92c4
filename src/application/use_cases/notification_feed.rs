use crate::domain::{
    entities::NotificationPage,
    error::DomainResult,
    repositories::DynNotificationStore,
    services::DynNotificationSyncService,
};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Screen-facing operations for the notification list. Reads go straight to
/// the store; read/unread mutations go through the sync service so the badge
/// event protocol fires.
pub struct NotificationFeedUseCases {
    store: DynNotificationStore,
    sync: DynNotificationSyncService,
}

impl NotificationFeedUseCases {
    pub fn new(store: DynNotificationStore, sync: DynNotificationSyncService) -> Self {
        Self { store, sync }
    }

    pub async fn list_page(&self, page: u32, limit: u32) -> DomainResult<NotificationPage> {
        self.store.list(page, limit).await
    }

    pub async fn first_page(&self) -> DomainResult<NotificationPage> {
        self.list_page(1, DEFAULT_PAGE_SIZE).await
    }

    pub async fn mark_as_read(&self, notification_id: &str) -> DomainResult<()> {
        self.sync.mark_one_read(notification_id).await
    }

    /// Returns the unread count the server reports as cleared, when known.
    pub async fn mark_all_read(&self) -> DomainResult<Option<i64>> {
        self.sync.mark_all_read().await
    }
}
