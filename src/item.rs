//! The notification item type.

use serde::{Deserialize, Serialize};

/// A single notification entry in the panel.
///
/// `id` and `text` are fixed at creation time. `read` starts out `false`
/// and only ever transitions to `true`; there is no way to mark an item
/// unread again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    /// Opaque unique identifier, assigned by the caller at creation.
    pub id: String,
    /// Display text shown in the panel.
    pub text: String,
    /// Whether the user has seen this notification.
    pub read: bool,
}

impl NotificationItem {
    /// Create a new, unread notification.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier within the collection this item will join.
    /// * `text` - Display text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            read: false,
        }
    }

    /// Copy of this item with `read` set to `true`.
    ///
    /// Already-read items come back unchanged, which is what makes the
    /// store-level mark-as-read idempotent.
    pub(crate) fn into_read(mut self) -> Self {
        self.read = true;
        self
    }
}
