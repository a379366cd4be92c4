use donorlink::domain::{
    entities::{
        DeviceTokenRegistration, Notification, NotificationPage, NotificationSettings,
    },
    error::DomainResult,
    repositories::{MarkAllReadAck, MarkReadAck, NotificationStore},
    services::NotificationSyncService,
};

mockall::mock! {
    pub NotificationStore {}
    #[async_trait::async_trait]
    impl NotificationStore for NotificationStore {
        async fn list(&self, page: u32, limit: u32) -> DomainResult<NotificationPage>;
        async fn mark_read(&self, notification_id: &str) -> DomainResult<MarkReadAck>;
        async fn mark_all_read(&self) -> DomainResult<MarkAllReadAck>;
        async fn unread_count(&self) -> DomainResult<i64>;
        async fn fetch_settings(&self) -> DomainResult<NotificationSettings>;
        async fn update_settings(&self, settings: &NotificationSettings) -> DomainResult<NotificationSettings>;
        async fn register_device_token(&self, registration: &DeviceTokenRegistration) -> DomainResult<()>;
    }
}

mockall::mock! {
    pub NotificationSyncService {}
    #[async_trait::async_trait]
    impl NotificationSyncService for NotificationSyncService {
        async fn mark_one_read(&self, notification_id: &str) -> DomainResult<()>;
        async fn mark_all_read(&self) -> DomainResult<Option<i64>>;
        async fn refresh_unread_count(&self) -> DomainResult<i64>;
        async fn ingest_push_event(&self, raw: serde_json::Value) -> DomainResult<Notification>;
    }
}
