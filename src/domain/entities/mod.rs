pub mod device_token;
pub mod notification;
pub mod notification_settings;

pub use device_token::{DevicePlatform, DeviceTokenRegistration};
pub use notification::{Notification, NotificationKind, NotificationPage, PageInfo};
pub use notification_settings::NotificationSettings;
