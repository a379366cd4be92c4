pub mod notification_feed;
pub mod settings;

pub use notification_feed::{NotificationFeedUseCases, DEFAULT_PAGE_SIZE};
pub use settings::NotificationSettingsUseCases;
