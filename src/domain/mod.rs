pub mod entities;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

pub use entities::{
    DevicePlatform, DeviceTokenRegistration, Notification, NotificationKind, NotificationPage,
    NotificationSettings, PageInfo,
};

pub use error::{DomainError, DomainResult};

pub use events::{AppEvent, AppEventKind, EventBus, SharedEventBus, SubscriptionHandle};

pub use repositories::{DynNotificationStore, MarkAllReadAck, MarkReadAck, NotificationStore};

pub use services::{
    BadgePhase, BannerPresenter, DefaultNotificationSyncService, DynNotificationSyncService,
    NavigationTarget, NoopBannerPresenter, NotificationSyncService, PushIngestService,
    UnreadBadgeController,
};
