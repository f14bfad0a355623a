//! State container for a client-side notification panel.
//!
//! The crate is the single source of truth for an ordered collection of
//! notifications: a [`NotificationStore`] owns the current [`Snapshot`],
//! a tagged [`Request`] is the only way to mutate it, and pure selectors
//! derive the views the UI renders (full list, unread count). Rendering,
//! layout, and styling are external collaborators that read snapshots and
//! dispatch requests; nothing here does I/O.

mod error;
mod item;
mod request;
mod select;
mod snapshot;
mod store;

pub use error::DispatchError;
pub use item::NotificationItem;
pub use request::Request;
pub use select::{select_notifications, select_unread_count};
pub use snapshot::Snapshot;
pub use store::NotificationStore;
