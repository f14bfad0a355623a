//! Immutable point-in-time snapshots of the notification collection.
//!
//! A [`Snapshot`] is the complete state of the panel at one moment. The
//! backing storage is an `Arc<[NotificationItem]>`, so cloning a snapshot
//! is cheap and a reader holding an old snapshot keeps a fully valid view
//! after the store has moved on. Mutations never happen in place: the one
//! state transition, [`Snapshot::marked_read`], produces a new snapshot
//! and leaves the old one untouched.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::item::NotificationItem;

/// The complete, immutable state of the notification collection at one
/// point in time.
///
/// Insertion order is significant and preserved across transitions. `id`
/// values are expected to be unique within the collection; the snapshot
/// accepts seed data as-is and does not police duplicates.
///
/// # Examples
///
/// ```
/// use notifold::{NotificationItem, Snapshot};
///
/// let snap = Snapshot::seeded(vec![NotificationItem::new("a", "first")]);
/// assert_eq!(snap.len(), 1);
///
/// let next = snap.marked_read("a");
/// assert!(next.items()[0].read);
/// assert!(!snap.items()[0].read); // the old snapshot is unchanged
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    items: Arc<[NotificationItem]>,
}

impl Snapshot {
    /// Build a snapshot from an explicit seed collection.
    ///
    /// The seed is taken as-is: order is preserved and no validation is
    /// performed. An empty seed is valid and equivalent to
    /// [`Snapshot::empty`].
    pub fn seeded(items: impl IntoIterator<Item = NotificationItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// The empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pure transition: a snapshot identical to this one except that the
    /// item with the matching `id` has `read == true`.
    ///
    /// If no item matches, or the matching item is already read, the
    /// returned snapshot shares this snapshot's backing allocation --
    /// a no-op by construction, not an error. Applying the transition
    /// twice with the same `id` yields the same result as applying it
    /// once.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the item to mark as read.
    pub fn marked_read(&self, id: &str) -> Self {
        // Only allocate when there is actually something to flip.
        let needs_update = self.items.iter().any(|item| item.id == id && !item.read);
        if !needs_update {
            return self.clone();
        }

        let items = self
            .items
            .iter()
            .cloned()
            .map(|item| {
                if item.id == id {
                    item.into_read()
                } else {
                    item
                }
            })
            .collect();
        Self { items }
    }

    /// The ordered items, in store order.
    ///
    /// The slice is shared and immutable; callers cannot mutate stored
    /// items through it.
    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    /// Iterate over the items in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, NotificationItem> {
        self.items.iter()
    }

    /// Number of items in the snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self { items: Arc::new([]) }
    }
}

impl FromIterator<NotificationItem> for Snapshot {
    fn from_iter<I: IntoIterator<Item = NotificationItem>>(iter: I) -> Self {
        Self::seeded(iter)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a NotificationItem;
    type IntoIter = std::slice::Iter<'a, NotificationItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Deserialize through a Vec because `#[serde(transparent)]` cannot derive
// a Deserialize impl for the `Arc<[T]>` field.
impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<NotificationItem>::deserialize(deserializer)?;
        Ok(Self::seeded(items))
    }
}
