pub mod notification_store;

pub use notification_store::{
    DynNotificationStore, MarkAllReadAck, MarkReadAck, NotificationStore,
};

#[cfg(test)]
pub use notification_store::MockNotificationStore;
