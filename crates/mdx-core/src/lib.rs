//! # mdx-core — Foundational Types for the Mobility Data Exchange
//!
//! This crate is the bedrock of the MDX workspace. It defines the closed
//! event vocabularies shared by the Agency and Provider API dialects, the
//! canonical event key that bridges them, and the status event record
//! handed to persistence collaborators. Every other crate in the workspace
//! depends on `mdx-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed vocabularies as enums.** `EventType`, `EventTypeReason`,
//!    `DeviceStatus`, `EventSource`, and `ProviderReason` are compile-time
//!    enums with stable snake_case identifiers. No bare strings for event
//!    symbols — an unknown symbol fails at the parse boundary, once.
//!
//! 2. **Identifier/label split.** The stable `as_str()` identifier drives
//!    all mapping logic and serialization; the human-readable `label()` is
//!    a side lookup for presentation layers and is never consulted by any
//!    translation or derivation path.
//!
//! 3. **Structural event keys.** `CanonicalEventKey` is an event type plus
//!    an optional reason qualifier. A bare key and a qualified key over the
//!    same event type are distinct values and may map to different outcomes.
//!
//! 4. **UTC-only timestamps.** `StatusEvent` records carry `DateTime<Utc>`;
//!    at-most-once application keyed on (device, timestamp) belongs to the
//!    event store, not to this crate.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mdx-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod event;
pub mod vocabulary;

// Re-export primary types for ergonomic imports.
pub use error::VocabularyError;
pub use event::{CanonicalEventKey, StatusEvent};
pub use vocabulary::{
    DeviceStatus, EventSource, EventType, EventTypeReason, ProviderReason, DEVICE_STATUS_COUNT,
    EVENT_TYPE_COUNT, EVENT_TYPE_REASON_COUNT, PROVIDER_REASON_COUNT,
};
