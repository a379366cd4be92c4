pub mod cached_store;
pub mod config;
pub mod env;
pub mod http;

pub use cached_store::CachedNotificationStore;
pub use config::{BadgeConfig, CacheConfig, HttpConfig};
pub use env::{get_env_or, get_envv};
pub use http::HttpNotificationStore;
