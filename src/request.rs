//! Mutation request contract between the UI collaborator and the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DispatchError;

/// A tagged mutation request consumed by the store.
///
/// The JSON shape on the UI boundary is `{"kind": "markAsRead", "id": ...}`.
/// A single variant exists today; adding a mutation later means adding a
/// variant here and a match arm in the store, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Request {
    /// Mark the item with the given `id` as read. Carries only the id.
    MarkAsRead {
        /// Identifier of the notification to mark.
        id: String,
    },
}

impl Request {
    /// Shorthand for [`Request::MarkAsRead`].
    pub fn mark_as_read(id: impl Into<String>) -> Self {
        Self::MarkAsRead { id: id.into() }
    }

    /// Decode a raw request value arriving from the UI boundary.
    ///
    /// A request whose `kind` is not recognized fails with
    /// [`DispatchError::UnsupportedRequest`] rather than being silently
    /// dropped, so a newer UI talking to an older store gets a loud,
    /// typed answer.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedRequest`] for an unknown or
    /// missing `kind`, or a malformed payload for a known kind.
    pub fn from_value(value: Value) -> Result<Self, DispatchError> {
        // Pull the tag out first so the error can name the offending kind
        // instead of echoing a serde parse message.
        let kind = value
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_owned();

        serde_json::from_value(value).map_err(|_| DispatchError::UnsupportedRequest { kind })
    }
}
