use crate::domain::{
    entities::{DevicePlatform, DeviceTokenRegistration, Notification, NotificationSettings},
    repositories::DynNotificationStore,
    services::sync_service::DynNotificationSyncService,
};
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// UI-facing boundary for the in-app transient banner shown on foreground
/// delivery. Not a system notification.
pub trait BannerPresenter: Send + Sync {
    fn present(&self, notification: &Notification);
}

#[derive(Default)]
pub struct NoopBannerPresenter;

impl BannerPresenter for NoopBannerPresenter {
    fn present(&self, _notification: &Notification) {}
}

/// Where the host app should navigate after the user acted on a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    NotificationList,
}

/// Adapts the provider's three delivery modes (foreground message, background
/// tap, cold start via notification) into exactly one
/// [`NotificationSyncService::ingest_push_event`] call plus a navigation
/// hint.
///
/// Every entry point is called from provider SDK callbacks, so nothing here
/// returns an error: malformed payloads and registration failures are logged
/// and dropped.
pub struct PushIngestService {
    sync: DynNotificationSyncService,
    store: DynNotificationStore,
    banner: Arc<dyn BannerPresenter>,
    settings: RwLock<NotificationSettings>,
}

impl PushIngestService {
    pub fn new(
        sync: DynNotificationSyncService,
        store: DynNotificationStore,
        banner: Arc<dyn BannerPresenter>,
    ) -> Self {
        Self {
            sync,
            store,
            banner,
            settings: RwLock::new(NotificationSettings::default()),
        }
    }

    /// Replaces the settings snapshot that gates the foreground banner.
    /// Ingestion itself is never gated; the unread count must stay in sync
    /// even when banners are muted.
    pub fn apply_settings(&self, settings: NotificationSettings) {
        *self.settings.write() = settings;
    }

    pub async fn handle_foreground_message(&self, raw: Value) {
        match self.sync.ingest_push_event(raw).await {
            Ok(notification) => {
                if self.settings.read().allows(notification.kind) {
                    self.banner.present(&notification);
                } else {
                    debug!(kind = %notification.kind, "banner muted by notification settings");
                }
            }
            Err(error) => warn!("dropping malformed foreground push payload: {}", error),
        }
    }

    /// Background tap on a system notification. The raw payload may not have
    /// survived, in which case ingestion is skipped; navigation still
    /// happens.
    pub async fn handle_notification_tap(&self, raw: Option<Value>) -> NavigationTarget {
        match raw {
            Some(raw) => self.ingest_best_effort(raw).await,
            None => debug!("notification tap without payload, skipping ingest"),
        }
        NavigationTarget::NotificationList
    }

    /// App launch caused by a notification. Returns `None` for a plain cold
    /// start so the host app keeps its default route.
    pub async fn handle_cold_start(&self, raw: Option<Value>) -> Option<NavigationTarget> {
        let raw = raw?;
        self.ingest_best_effort(raw).await;
        Some(NavigationTarget::NotificationList)
    }

    /// Registers a provider-issued device token with the backend. Called on
    /// token issuance and refresh.
    pub async fn register_device_token(
        &self,
        token: String,
        platform: DevicePlatform,
        device_id: Option<String>,
    ) {
        let registration = DeviceTokenRegistration::new(token, platform, device_id);
        if let Err(error) = self.store.register_device_token(&registration).await {
            warn!("device token registration failed: {}", error);
        }
    }

    async fn ingest_best_effort(&self, raw: Value) {
        if let Err(error) = self.sync.ingest_push_event(raw).await {
            warn!("dropping malformed push payload: {}", error);
        }
    }
}
