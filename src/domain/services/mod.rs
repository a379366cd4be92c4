pub mod badge_controller;
pub mod push_ingest;
pub mod sync_service;

pub use badge_controller::{BadgePhase, UnreadBadgeController, DEFAULT_POLL_INTERVAL};
pub use push_ingest::{BannerPresenter, NavigationTarget, NoopBannerPresenter, PushIngestService};
pub use sync_service::{
    DefaultNotificationSyncService, DynNotificationSyncService, NotificationSyncService,
};

#[cfg(test)]
pub use sync_service::MockNotificationSyncService;
