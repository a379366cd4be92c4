use parking_lot::Mutex;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::{AppEvent, AppEventKind};

pub type EventHandler = Arc<dyn Fn(&AppEvent) + Send + Sync>;

/// Opaque token returned by [`EventBus::subscribe`]. Passing it back to
/// [`EventBus::unsubscribe`] removes exactly that registration; doing so twice
/// is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionHandle {
    id: Uuid,
    kind: AppEventKind,
}

/// In-process, synchronous publish/subscribe channel.
///
/// One instance is shared by `Arc` across the whole process; it is created at
/// startup and never torn down. Dispatch is synchronous: all handlers for an
/// event run to completion, in registration order, before `publish` returns.
/// A panicking handler is isolated and logged so the remaining handlers still
/// run.
pub struct EventBus {
    subscribers: Mutex<HashMap<AppEventKind, Vec<(Uuid, EventHandler)>>>,
}

pub type SharedEventBus = Arc<EventBus>;

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(HashMap::new()),
        }
    }

    pub fn subscribe(
        &self,
        kind: AppEventKind,
        handler: impl Fn(&AppEvent) + Send + Sync + 'static,
    ) -> SubscriptionHandle {
        let id = Uuid::new_v4();
        let mut subscribers = self.subscribers.lock();
        subscribers
            .entry(kind)
            .or_default()
            .push((id, Arc::new(handler)));
        SubscriptionHandle { id, kind }
    }

    pub fn unsubscribe(&self, handle: &SubscriptionHandle) {
        let mut subscribers = self.subscribers.lock();
        if let Some(handlers) = subscribers.get_mut(&handle.kind) {
            handlers.retain(|(id, _)| *id != handle.id);
        }
    }

    pub fn publish(&self, event: &AppEvent) {
        // Snapshot the handler list so handlers may re-enter the bus
        // (subscribe, unsubscribe, publish) without deadlocking.
        let handlers: Vec<EventHandler> = {
            let subscribers = self.subscribers.lock();
            subscribers
                .get(&event.kind())
                .map(|handlers| handlers.iter().map(|(_, h)| h.clone()).collect())
                .unwrap_or_default()
        };

        for handler in handlers {
            if catch_unwind(AssertUnwindSafe(|| handler(event))).is_err() {
                warn!(event = ?event.kind(), "event handler panicked, continuing dispatch");
            }
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self, kind: AppEventKind) -> usize {
        self.subscribers
            .lock()
            .get(&kind)
            .map(Vec::len)
            .unwrap_or(0)
    }
}
