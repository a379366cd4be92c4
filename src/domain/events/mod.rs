pub mod app_events;
pub mod event_bus;

pub use app_events::{AppEvent, AppEventKind};
pub use event_bus::{EventBus, SharedEventBus, SubscriptionHandle};
