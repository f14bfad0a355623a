//! The notification store: single owner of the current snapshot and the
//! serialization point for mutation requests.
//!
//! All reads and mutations happen on one logical thread of control (the
//! UI event loop), so exclusivity comes from `&mut self` on
//! [`NotificationStore::dispatch`] rather than a lock: the borrow checker
//! guarantees one request at a time, each fully applied before the next
//! is considered. The current snapshot is replaced atomically; readers
//! holding an earlier [`Snapshot`] keep a valid, fully consistent view.

use serde_json::Value;

use crate::error::DispatchError;
use crate::item::NotificationItem;
use crate::request::Request;
use crate::snapshot::Snapshot;

/// Owns the canonical notification collection and applies mutation
/// requests to it.
///
/// Construct it from an explicit seed via [`seeded`](Self::seeded) or
/// start empty via [`empty`](Self::empty) / `Default`; the two are
/// operationally identical afterwards.
///
/// # Examples
///
/// ```
/// use notifold::{NotificationItem, NotificationStore, Request, select_unread_count};
///
/// let mut store = NotificationStore::seeded(vec![
///     NotificationItem::new("abc123", "Notification First"),
/// ]);
/// assert_eq!(select_unread_count(&store.snapshot()), 1);
///
/// store.dispatch(Request::mark_as_read("abc123"));
/// assert_eq!(select_unread_count(&store.snapshot()), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    current: Snapshot,
}

impl NotificationStore {
    /// Create a store seeded with an explicit collection.
    ///
    /// The seed becomes the initial snapshot as-is, order preserved. The
    /// caller is responsible for id uniqueness within the seed.
    pub fn seeded(items: impl IntoIterator<Item = NotificationItem>) -> Self {
        Self {
            current: Snapshot::seeded(items),
        }
    }

    /// Create a store with an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The current snapshot. Cheap to call: clones an `Arc`, never the
    /// items themselves.
    pub fn snapshot(&self) -> Snapshot {
        self.current.clone()
    }

    /// Apply one mutation request, install the resulting snapshot as
    /// current, and return it.
    ///
    /// Requests dispatched in sequence are applied in that sequence.
    /// A `MarkAsRead` for an id that is absent or already read leaves
    /// the snapshot unchanged; that is defined behavior, not an error.
    pub fn dispatch(&mut self, request: Request) -> Snapshot {
        let next = match request {
            Request::MarkAsRead { ref id } => {
                let next = self.current.marked_read(id);
                tracing::debug!(
                    id = %id,
                    matched = next != self.current,
                    "mark-as-read dispatched"
                );
                next
            }
        };
        self.current = next;
        self.snapshot()
    }

    /// Decode a raw request value from the UI boundary and dispatch it.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedRequest`] if the value does not
    /// decode to a known request; the snapshot is left untouched in that
    /// case.
    pub fn dispatch_value(&mut self, value: Value) -> Result<Snapshot, DispatchError> {
        let request = Request::from_value(value)?;
        Ok(self.dispatch(request))
    }

    /// Convenience wrapper: dispatch a [`Request::MarkAsRead`] for `id`.
    pub fn mark_as_read(&mut self, id: impl Into<String>) -> Snapshot {
        self.dispatch(Request::mark_as_read(id))
    }
}
