use std::time::Duration;

use crate::domain::services::DEFAULT_POLL_INTERVAL;

use super::env::get_env_or;

/// Backend API connection settings.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl HttpConfig {
    /// Reads connection settings from the environment, falling back to the
    /// defaults. A `.env` file is honored when present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::default();
        let timeout_secs = get_env_or(
            "DONORLINK_API_TIMEOUT_SECS",
            &defaults.request_timeout.as_secs().to_string(),
        )
        .parse()
        .unwrap_or(defaults.request_timeout.as_secs());

        Self {
            base_url: get_env_or("DONORLINK_API_BASE_URL", &defaults.base_url),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Unread badge polling settings.
#[derive(Debug, Clone)]
pub struct BadgeConfig {
    pub poll_interval: Duration,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Read-through page cache settings.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub page_cache_capacity: u64,
    pub page_cache_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            page_cache_capacity: 64,
            page_cache_ttl: Duration::from_secs(30),
        }
    }
}
