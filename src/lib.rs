pub mod application;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use application::{NotificationFeedUseCases, NotificationSettingsUseCases};
use domain::{
    error::DomainResult,
    events::{EventBus, SharedEventBus},
    repositories::DynNotificationStore,
    services::{
        BannerPresenter, DefaultNotificationSyncService, DynNotificationSyncService,
        PushIngestService, UnreadBadgeController,
    },
};
use infrastructure::{
    BadgeConfig, CacheConfig, CachedNotificationStore, HttpConfig, HttpNotificationStore,
};

/// Composition root for a host app: wires the HTTP store, the page cache,
/// the event bus, the sync service and push ingestion together. Screens hang
/// off the use-case structs; badges are created per consumer with
/// [`NotificationStack::badge`].
pub struct NotificationStack {
    pub events: SharedEventBus,
    pub store: DynNotificationStore,
    pub sync: DynNotificationSyncService,
    pub push: Arc<PushIngestService>,
    pub feed: Arc<NotificationFeedUseCases>,
    pub settings: Arc<NotificationSettingsUseCases>,
    http_store: Arc<HttpNotificationStore>,
    badge_config: BadgeConfig,
}

impl NotificationStack {
    pub fn new(
        http: &HttpConfig,
        cache: &CacheConfig,
        badge_config: BadgeConfig,
        banner: Arc<dyn BannerPresenter>,
    ) -> DomainResult<Self> {
        let http_store = Arc::new(HttpNotificationStore::new(http)?);
        let store: DynNotificationStore =
            Arc::new(CachedNotificationStore::new(http_store.clone(), cache));
        let events: SharedEventBus = Arc::new(EventBus::new());
        let sync: DynNotificationSyncService = Arc::new(DefaultNotificationSyncService::new(
            store.clone(),
            events.clone(),
        ));
        let push = Arc::new(PushIngestService::new(sync.clone(), store.clone(), banner));
        let feed = Arc::new(NotificationFeedUseCases::new(store.clone(), sync.clone()));
        let settings = Arc::new(NotificationSettingsUseCases::new(store.clone()));

        Ok(Self {
            events,
            store,
            sync,
            push,
            feed,
            settings,
            http_store,
            badge_config,
        })
    }

    /// Sets or clears the bearer token used for every backend call.
    pub fn set_auth_token(&self, token: Option<String>) {
        self.http_store.set_auth_token(token);
    }

    /// One badge per consumer; each converges independently through the
    /// event protocol. Callers own the start/stop lifecycle.
    pub fn badge(&self) -> UnreadBadgeController {
        UnreadBadgeController::with_poll_interval(
            self.sync.clone(),
            self.events.clone(),
            self.badge_config.poll_interval,
        )
    }
}
