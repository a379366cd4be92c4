use crate::domain::error::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    BloodNeeded,
    RequestAccepted,
    DonationReminder,
    SystemAnnouncement,
    DonorChanged,
    RequestCancelled,
    DonationCompleted,
}

impl NotificationKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "blood_needed" => Some(NotificationKind::BloodNeeded),
            "request_accepted" => Some(NotificationKind::RequestAccepted),
            "donation_reminder" => Some(NotificationKind::DonationReminder),
            "system_announcement" => Some(NotificationKind::SystemAnnouncement),
            "donor_changed" => Some(NotificationKind::DonorChanged),
            "request_cancelled" => Some(NotificationKind::RequestCancelled),
            "donation_completed" => Some(NotificationKind::DonationCompleted),
            _ => None,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NotificationKind::BloodNeeded => write!(f, "blood_needed"),
            NotificationKind::RequestAccepted => write!(f, "request_accepted"),
            NotificationKind::DonationReminder => write!(f, "donation_reminder"),
            NotificationKind::SystemAnnouncement => write!(f, "system_announcement"),
            NotificationKind::DonorChanged => write!(f, "donor_changed"),
            NotificationKind::RequestCancelled => write!(f, "request_cancelled"),
            NotificationKind::DonationCompleted => write!(f, "donation_completed"),
        }
    }
}

/// A server-owned notification. The id is assigned by the backend and opaque
/// to the client; `is_read` is the only field the client ever mutates, and
/// only from false to true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub actor_name: Option<String>,
    #[serde(default)]
    pub actor_image_ref: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

const DEFAULT_PUSH_TITLE: &str = "New Notification";

impl Notification {
    pub fn mark_as_read(&mut self) {
        self.is_read = true;
    }

    /// Normalizes an opaque provider payload into a `Notification`.
    ///
    /// Expected shape: `{notification?: {title?, body?}, data: {type, id |
    /// notificationId, ...}}`. Missing title/body fall back to defaults; a
    /// missing or unknown `data.type`, or a payload without a server id, is
    /// malformed.
    pub fn from_push_payload(raw: &Value) -> DomainResult<Self> {
        let data = raw
            .get("data")
            .and_then(Value::as_object)
            .ok_or_else(|| DomainError::MalformedPayload("missing data object".to_string()))?;

        let kind_str = data
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| DomainError::MalformedPayload("missing data.type".to_string()))?;
        let kind = NotificationKind::parse(kind_str).ok_or_else(|| {
            DomainError::MalformedPayload(format!("unknown notification type: {}", kind_str))
        })?;

        // Identity is server-assigned; a payload carrying neither id form
        // cannot be represented locally.
        let id = data
            .get("id")
            .or_else(|| data.get("notificationId"))
            .and_then(Value::as_str)
            .ok_or_else(|| DomainError::MalformedPayload("missing notification id".to_string()))?
            .to_string();

        let display = raw.get("notification").and_then(Value::as_object);
        let title = display
            .and_then(|n| n.get("title"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PUSH_TITLE)
            .to_string();
        let message = display
            .and_then(|n| n.get("body"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let created_at = data
            .get("createdAt")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        let field = |key: &str| data.get(key).and_then(Value::as_str).map(str::to_string);

        let consumed = [
            "type",
            "id",
            "notificationId",
            "createdAt",
            "bloodType",
            "actorName",
            "actorImageRef",
        ];
        let metadata = data
            .iter()
            .filter(|(key, _)| !consumed.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            id,
            kind,
            created_at,
            is_read: false,
            title,
            message,
            blood_type: field("bloodType"),
            actor_name: field("actorName"),
            actor_image_ref: field("actorImageRef"),
            metadata,
        })
    }
}

/// One page of the server-owned notification list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    pub pagination: PageInfo,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}
