use crate::domain::{
    entities::{DeviceTokenRegistration, NotificationPage, NotificationSettings},
    error::DomainResult,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadAck {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub notification_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadAck {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Unread count cleared by the call, when the server reports it.
    #[serde(default)]
    pub count: Option<i64>,
}

/// Remote collaborator boundary over the server-owned notification store.
/// The server is canonical for the notification set, read flags and the
/// unread count; the client only caches.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn list(&self, page: u32, limit: u32) -> DomainResult<NotificationPage>;
    async fn mark_read(&self, notification_id: &str) -> DomainResult<MarkReadAck>;
    async fn mark_all_read(&self) -> DomainResult<MarkAllReadAck>;
    async fn unread_count(&self) -> DomainResult<i64>;
    async fn fetch_settings(&self) -> DomainResult<NotificationSettings>;
    async fn update_settings(
        &self,
        settings: &NotificationSettings,
    ) -> DomainResult<NotificationSettings>;
    async fn register_device_token(
        &self,
        registration: &DeviceTokenRegistration,
    ) -> DomainResult<()>;
}

pub type DynNotificationStore = Arc<dyn NotificationStore>;
