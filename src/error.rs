//! Crate-level error types for request dispatch.
//!
//! The taxonomy is deliberately small: applying a known request never
//! fails. Marking an unknown `id` as read is a defined no-op, so the only
//! error lives at the decode seam where raw requests enter the store.

/// Error returned when a raw mutation request cannot be dispatched.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// The request carried a `kind` this store does not understand,
    /// or a malformed payload for a known kind.
    ///
    /// Surfaced as a typed error instead of being silently dropped so
    /// callers can tell "no-op by contract" apart from "request never
    /// understood".
    #[error("unsupported request kind: {kind:?}")]
    UnsupportedRequest {
        /// The offending `kind` tag, empty if it was missing entirely.
        kind: String,
    },
}
