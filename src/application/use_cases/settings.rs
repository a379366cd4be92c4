use crate::domain::{
    entities::NotificationSettings, error::DomainResult, repositories::DynNotificationStore,
};

/// Load/save lifecycle for the notification settings screen: fetched on
/// mount, toggled locally on the entity, persisted only on explicit save.
pub struct NotificationSettingsUseCases {
    store: DynNotificationStore,
}

impl NotificationSettingsUseCases {
    pub fn new(store: DynNotificationStore) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> DomainResult<NotificationSettings> {
        self.store.fetch_settings().await
    }

    pub async fn save(
        &self,
        settings: &NotificationSettings,
    ) -> DomainResult<NotificationSettings> {
        self.store.update_settings(settings).await
    }
}
