use crate::common::{init, push_payload, test_notification, InMemoryNotificationStore, MockNotificationStore};
use anyhow::Result;
use donorlink::domain::{
    entities::NotificationKind,
    error::DomainError,
    events::{AppEvent, AppEventKind, EventBus, SharedEventBus},
    services::{
        DefaultNotificationSyncService, NotificationSyncService, UnreadBadgeController,
    },
};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn collector(bus: &EventBus) -> Arc<Mutex<Vec<AppEvent>>> {
    let collected = Arc::new(Mutex::new(Vec::new()));
    for kind in [
        AppEventKind::NotificationRead,
        AppEventKind::AllNotificationsRead,
        AppEventKind::NotificationCountUpdated,
        AppEventKind::NewNotification,
    ] {
        let collected = collected.clone();
        bus.subscribe(kind, move |event| collected.lock().push(event.clone()));
    }
    collected
}

#[tokio::test]
async fn test_failed_mark_read_never_publishes_a_read_event() -> Result<()> {
    init();

    let mut store = MockNotificationStore::new();
    store
        .expect_mark_read()
        .times(1)
        .returning(|_| Err(DomainError::NetworkError("no route to host".to_string())));

    let events: SharedEventBus = Arc::new(EventBus::new());
    let collected = collector(&events);
    let sync = DefaultNotificationSyncService::new(Arc::new(store), events);

    let result = sync.mark_one_read("n-1").await;
    assert!(matches!(result, Err(DomainError::RemoteMutationFailed(_))));
    assert_eq!(collected.lock().len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_two_badges_converge_to_zero_after_mark_all_read() -> Result<()> {
    init();

    let store = Arc::new(InMemoryNotificationStore::with_unread(5));
    let events: SharedEventBus = Arc::new(EventBus::new());
    let sync = Arc::new(DefaultNotificationSyncService::new(store, events.clone()));

    let header_badge = UnreadBadgeController::with_poll_interval(
        sync.clone(),
        events.clone(),
        Duration::from_secs(3600),
    );
    let tab_badge = UnreadBadgeController::with_poll_interval(
        sync.clone(),
        events.clone(),
        Duration::from_secs(3600),
    );
    header_badge.start().await;
    tab_badge.start().await;
    assert_eq!(header_badge.count(), 5);
    assert_eq!(tab_badge.count(), 5);

    let cleared = sync.mark_all_read().await?;
    assert_eq!(cleared, Some(5));
    assert_eq!(header_badge.count(), 0);
    assert_eq!(tab_badge.count(), 0);

    header_badge.stop();
    tab_badge.stop();
    Ok(())
}

#[tokio::test]
async fn test_push_ingest_announces_and_refreshes_every_badge() -> Result<()> {
    init();

    let store = Arc::new(InMemoryNotificationStore::with_unread(2));
    let events: SharedEventBus = Arc::new(EventBus::new());
    let collected = collector(&events);
    let sync = Arc::new(DefaultNotificationSyncService::new(
        store.clone(),
        events.clone(),
    ));

    let badge = UnreadBadgeController::with_poll_interval(
        sync.clone(),
        events.clone(),
        Duration::from_secs(3600),
    );
    badge.start().await;
    assert_eq!(badge.count(), 2);

    // The backend stores the notification before the push fans out.
    store.insert(test_notification(
        "n-push",
        NotificationKind::BloodNeeded,
        false,
    ));
    sync.ingest_push_event(push_payload("n-push", "blood_needed"))
        .await?;

    // The post-ingest refresh is fire-and-forget; give it a beat.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(badge.count(), 3);

    let new_notification_seen = collected
        .lock()
        .iter()
        .any(|event| matches!(event, AppEvent::NewNotification { notification } if notification.id == "n-push"));
    assert!(new_notification_seen);

    badge.stop();
    Ok(())
}

#[tokio::test]
async fn test_single_read_converges_via_refetch_not_decrement() -> Result<()> {
    init();

    let store = Arc::new(InMemoryNotificationStore::with_unread(3));
    let events: SharedEventBus = Arc::new(EventBus::new());
    let sync = Arc::new(DefaultNotificationSyncService::new(
        store.clone(),
        events.clone(),
    ));

    let badge = UnreadBadgeController::with_poll_interval(
        sync.clone(),
        events.clone(),
        Duration::from_secs(3600),
    );
    badge.start().await;
    assert_eq!(badge.count(), 3);

    sync.mark_one_read("seed-0").await?;
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(badge.count(), 2);

    badge.stop();
    Ok(())
}
