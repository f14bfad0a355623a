//! Read-only selectors over a snapshot.
//!
//! Selectors are pure: they derive a view from whatever snapshot they are
//! handed and never mutate it. The unread count is recomputed on every
//! call; panels hold a handful of items, so a fresh O(n) scan beats
//! carrying cache-invalidation state.

use crate::item::NotificationItem;
use crate::snapshot::Snapshot;

/// The full ordered notification list, in store order.
///
/// The returned slice borrows from the snapshot and cannot be used to
/// mutate the stored items.
pub fn select_notifications(snapshot: &Snapshot) -> &[NotificationItem] {
    snapshot.items()
}

/// Number of unread items in the snapshot.
pub fn select_unread_count(snapshot: &Snapshot) -> usize {
    snapshot.iter().filter(|item| !item.read).count()
}
