use crate::domain::{
    entities::{DeviceTokenRegistration, NotificationPage, NotificationSettings},
    error::DomainResult,
    repositories::{DynNotificationStore, MarkAllReadAck, MarkReadAck, NotificationStore},
};
use async_trait::async_trait;
use moka::future::Cache;

use super::config::CacheConfig;

/// Read-through page cache over a notification store.
///
/// Each screen reads recent pages without refetching on every render; the
/// cache is not a canonical copy. Read-flag mutations flow through and drop
/// every cached page, since any of them may hold a now-stale `is_read`.
pub struct CachedNotificationStore {
    inner: DynNotificationStore,
    pages: Cache<(u32, u32), NotificationPage>,
}

impl CachedNotificationStore {
    pub fn new(inner: DynNotificationStore, config: &CacheConfig) -> Self {
        let pages = Cache::builder()
            .max_capacity(config.page_cache_capacity)
            .time_to_live(config.page_cache_ttl)
            .build();
        Self { inner, pages }
    }

    pub fn invalidate_pages(&self) {
        self.pages.invalidate_all();
    }
}

#[async_trait]
impl NotificationStore for CachedNotificationStore {
    async fn list(&self, page: u32, limit: u32) -> DomainResult<NotificationPage> {
        if let Some(cached) = self.pages.get(&(page, limit)).await {
            return Ok(cached);
        }
        let fresh = self.inner.list(page, limit).await?;
        self.pages.insert((page, limit), fresh.clone()).await;
        Ok(fresh)
    }

    async fn mark_read(&self, notification_id: &str) -> DomainResult<MarkReadAck> {
        let ack = self.inner.mark_read(notification_id).await?;
        self.pages.invalidate_all();
        Ok(ack)
    }

    async fn mark_all_read(&self) -> DomainResult<MarkAllReadAck> {
        let ack = self.inner.mark_all_read().await?;
        self.pages.invalidate_all();
        Ok(ack)
    }

    async fn unread_count(&self) -> DomainResult<i64> {
        self.inner.unread_count().await
    }

    async fn fetch_settings(&self) -> DomainResult<NotificationSettings> {
        self.inner.fetch_settings().await
    }

    async fn update_settings(
        &self,
        settings: &NotificationSettings,
    ) -> DomainResult<NotificationSettings> {
        self.inner.update_settings(settings).await
    }

    async fn register_device_token(
        &self,
        registration: &DeviceTokenRegistration,
    ) -> DomainResult<()> {
        self.inner.register_device_token(registration).await
    }
}
