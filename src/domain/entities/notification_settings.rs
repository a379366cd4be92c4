use serde::{Deserialize, Serialize};

use super::notification::NotificationKind;

/// Per-user push notification switches. Fetched when the settings screen
/// mounts, mutated locally on toggle, and persisted only on explicit save, so
/// the local copy may diverge from the server until then.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub push_notifications_enabled: bool,
    pub blood_requests_enabled: bool,
    pub request_updates_enabled: bool,
    pub donation_reminders_enabled: bool,
    pub system_announcements_enabled: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            push_notifications_enabled: true,
            blood_requests_enabled: true,
            request_updates_enabled: true,
            donation_reminders_enabled: true,
            system_announcements_enabled: true,
        }
    }
}

impl NotificationSettings {
    /// Toggles the master switch. Disabling it forces every subtype flag off;
    /// the invariant is enforced here, at the toggle point, not continuously.
    pub fn set_push_enabled(&mut self, enabled: bool) {
        self.push_notifications_enabled = enabled;
        if !enabled {
            self.blood_requests_enabled = false;
            self.request_updates_enabled = false;
            self.donation_reminders_enabled = false;
            self.system_announcements_enabled = false;
        }
    }

    pub fn allows(&self, kind: NotificationKind) -> bool {
        if !self.push_notifications_enabled {
            return false;
        }
        match kind {
            NotificationKind::BloodNeeded => self.blood_requests_enabled,
            NotificationKind::RequestAccepted
            | NotificationKind::DonorChanged
            | NotificationKind::RequestCancelled
            | NotificationKind::DonationCompleted => self.request_updates_enabled,
            NotificationKind::DonationReminder => self.donation_reminders_enabled,
            NotificationKind::SystemAnnouncement => self.system_announcements_enabled,
        }
    }
}
