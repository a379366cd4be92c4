use crate::domain::{
    entities::{DeviceTokenRegistration, NotificationPage, NotificationSettings},
    error::{DomainError, DomainResult},
    repositories::{MarkAllReadAck, MarkReadAck, NotificationStore},
};
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;

use crate::infrastructure::config::HttpConfig;

#[derive(Debug, Deserialize)]
struct UnreadCountBody {
    count: i64,
}

#[derive(Debug, Deserialize)]
struct RegisterTokenBody {
    success: bool,
    #[serde(default)]
    message: String,
}

/// reqwest-backed implementation of the notification store boundary.
///
/// Transport failures surface as `NetworkError`, non-2xx responses as
/// `ServerError`; retry policy stays with the caller.
pub struct HttpNotificationStore {
    client: Client,
    base_url: String,
    bearer_token: RwLock<Option<String>>,
}

impl HttpNotificationStore {
    pub fn new(config: &HttpConfig) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: RwLock::new(None),
        })
    }

    /// Sets or clears the auth token attached to every request. Token
    /// persistence is the host app's concern.
    pub fn set_auth_token(&self, token: Option<String>) {
        *self.bearer_token.write() = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.bearer_token.read().as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> DomainResult<Response> {
        let response = self.authorized(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DomainError::ServerError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> DomainResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|error| DomainError::MalformedPayload(format!("response body: {}", error)))
    }
}

#[async_trait]
impl NotificationStore for HttpNotificationStore {
    async fn list(&self, page: u32, limit: u32) -> DomainResult<NotificationPage> {
        let request = self
            .client
            .get(self.url("/notifications"))
            .query(&[("page", page), ("limit", limit)]);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    async fn mark_read(&self, notification_id: &str) -> DomainResult<MarkReadAck> {
        let request = self
            .client
            .put(self.url(&format!("/notifications/{}/read", notification_id)));
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    async fn mark_all_read(&self) -> DomainResult<MarkAllReadAck> {
        let request = self.client.put(self.url("/notifications/read-all"));
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    async fn unread_count(&self) -> DomainResult<i64> {
        let request = self.client.get(self.url("/notifications/unread-count"));
        let response = self.send(request).await?;
        let body: UnreadCountBody = Self::decode(response).await?;
        Ok(body.count)
    }

    async fn fetch_settings(&self) -> DomainResult<NotificationSettings> {
        let request = self.client.get(self.url("/notifications/settings"));
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    async fn update_settings(
        &self,
        settings: &NotificationSettings,
    ) -> DomainResult<NotificationSettings> {
        let request = self
            .client
            .put(self.url("/notifications/settings"))
            .json(settings);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    async fn register_device_token(
        &self,
        registration: &DeviceTokenRegistration,
    ) -> DomainResult<()> {
        let request = self
            .client
            .post(self.url("/notifications/register-token"))
            .json(registration);
        let response = self.send(request).await?;
        let body: RegisterTokenBody = Self::decode(response).await?;
        if !body.success {
            return Err(DomainError::InternalError(format!(
                "token registration rejected: {}",
                body.message
            )));
        }
        Ok(())
    }
}
