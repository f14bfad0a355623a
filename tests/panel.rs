//! Integration tests exercising the full panel flow: seed the store,
//! dispatch mark-as-read requests, and verify the selector views the UI
//! would render.

use notifold::{
    NotificationItem, NotificationStore, Request, Snapshot, select_notifications,
    select_unread_count,
};
use serde_json::json;

/// The populated seed configuration: two unread items, one already read.
fn seeded_store() -> NotificationStore {
    NotificationStore::seeded(vec![
        NotificationItem::new("abc123", "Notification First"),
        NotificationItem {
            id: "abc456".into(),
            text: "Notification Second".into(),
            read: true,
        },
        NotificationItem::new("abc789", "Notification Third"),
    ])
}

/// Seed, mark one item read, race a stale id, and check every view the
/// UI consumes along the way.
#[test]
fn full_panel_roundtrip() {
    let mut store = seeded_store();

    // Initial render: three items, badge shows 2.
    let snap = store.snapshot();
    assert_eq!(select_notifications(&snap).len(), 3);
    assert_eq!(select_unread_count(&snap), 2);

    // User presses the per-item control on the first notification.
    let snap = store.dispatch(Request::mark_as_read("abc123"));
    assert_eq!(select_unread_count(&snap), 1);

    let items = select_notifications(&snap);
    assert!(items[0].read, "abc123 should now be read");
    assert!(items[1].read, "abc456 was read in the seed");
    assert!(!items[2].read, "abc789 must be untouched");

    // A stale id (item gone or never existed) is a silent no-op.
    let snap = store.dispatch(Request::mark_as_read("zzz"));
    assert_eq!(select_unread_count(&snap), 1);
    assert_eq!(snap, store.snapshot());
}

/// The empty seed configuration is just as valid as the populated one.
#[test]
fn empty_seed_configuration() {
    let mut store = NotificationStore::empty();

    let snap = store.snapshot();
    assert!(select_notifications(&snap).is_empty());
    assert_eq!(select_unread_count(&snap), 0);

    // Any mark-as-read against an empty panel is a no-op.
    let snap = store.dispatch(Request::mark_as_read("abc123"));
    assert!(select_notifications(&snap).is_empty());
    assert_eq!(select_unread_count(&snap), 0);
}

/// Explicit empty seed and `empty()` behave identically.
#[test]
fn explicit_empty_seed_matches_empty_constructor() {
    let seeded = NotificationStore::seeded(Vec::new());
    let empty = NotificationStore::empty();
    assert_eq!(seeded.snapshot(), empty.snapshot());
}

/// Marking every item read drains the badge to zero and never below.
#[test]
fn marking_everything_read_reaches_zero() {
    let mut store = seeded_store();

    for id in ["abc123", "abc456", "abc789"] {
        store.dispatch(Request::mark_as_read(id));
    }

    let snap = store.snapshot();
    assert_eq!(select_unread_count(&snap), 0);
    assert!(select_notifications(&snap).iter().all(|item| item.read));

    // Once everything is read, further requests change nothing.
    let again = store.dispatch(Request::mark_as_read("abc123"));
    assert_eq!(again, snap);
}

/// Dispatch order is the application order, and insertion order survives
/// any sequence of mutations.
#[test]
fn insertion_order_survives_mutation_sequences() {
    let mut store = seeded_store();
    let original_ids: Vec<String> = store
        .snapshot()
        .iter()
        .map(|item| item.id.clone())
        .collect();

    for id in ["abc789", "zzz", "abc123", "abc789"] {
        store.dispatch(Request::mark_as_read(id));
    }

    let ids: Vec<String> = store
        .snapshot()
        .iter()
        .map(|item| item.id.clone())
        .collect();
    assert_eq!(ids, original_ids);
}

/// A consumer holding a pre-mutation snapshot keeps reading a consistent
/// old view while the store advances.
#[test]
fn old_snapshots_stay_consistent_for_slow_readers() {
    let mut store = seeded_store();
    let held: Snapshot = store.snapshot();

    store.dispatch(Request::mark_as_read("abc123"));
    store.dispatch(Request::mark_as_read("abc789"));

    assert_eq!(select_unread_count(&held), 2);
    assert!(!select_notifications(&held)[0].read);

    assert_eq!(select_unread_count(&store.snapshot()), 0);
}

/// Raw JSON requests from the UI boundary: known kinds apply, unknown
/// kinds fail loudly without touching state.
#[test]
fn raw_request_boundary() {
    let mut store = seeded_store();

    let snap = store
        .dispatch_value(json!({ "kind": "markAsRead", "id": "abc789" }))
        .expect("markAsRead is a known kind");
    assert_eq!(select_unread_count(&snap), 1);

    let before = store.snapshot();
    let err = store
        .dispatch_value(json!({ "kind": "dismiss", "id": "abc123" }))
        .expect_err("dismiss is not a known kind");
    assert_eq!(err.to_string(), "unsupported request kind: \"dismiss\"");
    assert_eq!(store.snapshot(), before);
}

/// The snapshot JSON contract the rendering layer consumes.
#[test]
fn snapshot_json_contract() {
    let mut store = seeded_store();
    store.dispatch(Request::mark_as_read("abc123"));

    let value = serde_json::to_value(store.snapshot()).expect("serialization should succeed");
    assert_eq!(
        value,
        json!([
            { "id": "abc123", "text": "Notification First", "read": true },
            { "id": "abc456", "text": "Notification Second", "read": true },
            { "id": "abc789", "text": "Notification Third", "read": false },
        ])
    );
}
