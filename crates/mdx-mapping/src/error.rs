//! # Mapping Errors
//!
//! Every variant here signals a defect — a table out of sync with a
//! vocabulary, or a caller querying an event with no status effect. None
//! of them is a transient condition; callers must propagate, never retry.

use thiserror::Error;

use mdx_core::CanonicalEventKey;

/// Error raised by the translation and derivation operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The input symbol is outside the closed provider-reason domain, or
    /// is an informational reason with no translation entry.
    #[error("unknown provider reason: {0:?}")]
    UnknownReason(String),

    /// The canonical key has no outbound mapping — an Agency event type
    /// was added without updating the outbound table.
    #[error("no provider reason mapped for agency event {0}")]
    UnmappedEvent(CanonicalEventKey),

    /// The event intentionally has no status effect; the caller should
    /// have checked applicability first.
    #[error("event {0} has no status effect")]
    NoStatusForEvent(CanonicalEventKey),
}
