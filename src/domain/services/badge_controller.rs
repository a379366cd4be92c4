use crate::domain::{
    events::{AppEvent, AppEventKind, SharedEventBus, SubscriptionHandle},
    services::sync_service::DynNotificationSyncService,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgePhase {
    Uninitialized,
    Loading,
    Ready,
    Disposed,
}

#[derive(Debug)]
struct BadgeState {
    phase: BadgePhase,
    count: u64,
}

/// One consumer's view of the unread count.
///
/// Every instance owns its own copy of the count; instances converge through
/// the event protocol, not shared state. Three signal sources feed it: the
/// initial fetch on `start`, the recurring poll, and bus events. Count values
/// are applied exclusively inside the `NotificationCountUpdated` handler, at
/// event-dispatch time, so whichever update arrives last wins regardless of
/// the order the underlying requests were issued in.
pub struct UnreadBadgeController {
    sync: DynNotificationSyncService,
    events: SharedEventBus,
    poll_interval: Duration,
    state: Arc<Mutex<BadgeState>>,
    subscriptions: Mutex<Vec<SubscriptionHandle>>,
    poll_cancel: Mutex<Option<CancellationToken>>,
}

impl UnreadBadgeController {
    pub fn new(sync: DynNotificationSyncService, events: SharedEventBus) -> Self {
        Self::with_poll_interval(sync, events, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(
        sync: DynNotificationSyncService,
        events: SharedEventBus,
        poll_interval: Duration,
    ) -> Self {
        Self {
            sync,
            events,
            poll_interval,
            state: Arc::new(Mutex::new(BadgeState {
                phase: BadgePhase::Uninitialized,
                count: 0,
            })),
            subscriptions: Mutex::new(Vec::new()),
            poll_cancel: Mutex::new(None),
        }
    }

    /// The displayed value. Never negative; retains the last known count
    /// while a refresh is in flight.
    pub fn count(&self) -> u64 {
        self.state.lock().count
    }

    pub fn phase(&self) -> BadgePhase {
        self.state.lock().phase
    }

    /// Subscribes, arms the poll timer and performs the initial fetch.
    /// No-op unless the controller is still `Uninitialized`.
    pub async fn start(&self) {
        {
            let mut state = self.state.lock();
            if state.phase != BadgePhase::Uninitialized {
                return;
            }
            state.phase = BadgePhase::Loading;
        }

        // Subscriptions go in before the initial fetch so its count event is
        // already observable.
        let handles = [
            self.subscribe_count_updates(),
            self.subscribe_all_read(),
            self.subscribe_single_read(),
        ];
        self.subscriptions.lock().extend(handles);

        let cancel = CancellationToken::new();
        *self.poll_cancel.lock() = Some(cancel.clone());
        self.spawn_poll_loop(cancel);

        fetch_authoritative(&self.sync, &self.state).await;
    }

    /// Unsubscribes and cancels the poll deterministically. Idempotent; the
    /// controller is `Disposed` afterwards and every later call is a no-op.
    pub fn stop(&self) {
        {
            let mut state = self.state.lock();
            if state.phase == BadgePhase::Disposed {
                return;
            }
            state.phase = BadgePhase::Disposed;
        }

        for handle in self.subscriptions.lock().drain(..) {
            self.events.unsubscribe(&handle);
        }
        if let Some(cancel) = self.poll_cancel.lock().take() {
            cancel.cancel();
        }
    }

    fn subscribe_count_updates(&self) -> SubscriptionHandle {
        let state = self.state.clone();
        self.events
            .subscribe(AppEventKind::NotificationCountUpdated, move |event| {
                if let AppEvent::NotificationCountUpdated { count } = event {
                    apply_count(&state, *count);
                }
            })
    }

    fn subscribe_all_read(&self) -> SubscriptionHandle {
        let state = self.state.clone();
        self.events
            .subscribe(AppEventKind::AllNotificationsRead, move |_| {
                // This event's semantics guarantee zero; no fetch needed.
                apply_count(&state, 0);
            })
    }

    fn subscribe_single_read(&self) -> SubscriptionHandle {
        let sync = self.sync.clone();
        let state = self.state.clone();
        self.events
            .subscribe(AppEventKind::NotificationRead, move |_| {
                // A single read only says the count went stale, not what it
                // is now; refetch instead of decrementing locally.
                let sync = sync.clone();
                let state = state.clone();
                tokio::spawn(async move {
                    fetch_authoritative(&sync, &state).await;
                });
            })
    }

    fn spawn_poll_loop(&self, cancel: CancellationToken) {
        let sync = self.sync.clone();
        let state = self.state.clone();
        let poll_interval = self.poll_interval;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The interval's first tick fires immediately; `start` already
            // performs that fetch.
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => fetch_authoritative(&sync, &state).await,
                }
            }
        });
    }
}

fn apply_count(state: &Arc<Mutex<BadgeState>>, count: i64) {
    let mut state = state.lock();
    if state.phase == BadgePhase::Disposed {
        return;
    }
    state.phase = BadgePhase::Ready;
    // The server is the source of truth, but never display a negative.
    state.count = count.max(0) as u64;
}

/// Runs one authoritative count refresh. The refreshed value reaches the
/// badge through the `NotificationCountUpdated` event, not the return value,
/// which keeps updates ordered by arrival. Failures retain the previous
/// count; a transient error never blanks or zeroes the badge.
async fn fetch_authoritative(
    sync: &DynNotificationSyncService,
    state: &Arc<Mutex<BadgeState>>,
) {
    {
        let mut guard = state.lock();
        match guard.phase {
            BadgePhase::Disposed => return,
            BadgePhase::Ready => guard.phase = BadgePhase::Loading,
            _ => {}
        }
    }

    if let Err(error) = sync.refresh_unread_count().await {
        debug!("badge count fetch failed, keeping last value: {}", error);
    }

    let mut guard = state.lock();
    if guard.phase == BadgePhase::Loading {
        guard.phase = BadgePhase::Ready;
    }
}
