//! # mdx-mapping — Event-Taxonomy Mapping Engine
//!
//! Translates vehicle status events between the Agency and Provider API
//! dialects and between the legacy and current Agency schema revisions,
//! and derives a device's status from the latest event it received.
//!
//! ## Control Flow
//!
//! Inbound (polling a provider): a raw provider `event_type_reason` is
//! parsed into a [`mdx_core::ProviderReason`], translated to a canonical
//! event key ([`translate::provider_reason_to_agency_event`]), migrated if
//! it originated in the legacy schema ([`migration::migrate_legacy_key`]),
//! and handed to status derivation ([`status::derive_status_for_key`]).
//! Outbound (serving a provider-dialect response): a stored canonical key
//! is folded back to a provider reason
//! ([`translate::agency_event_to_provider_reason`]), with
//! [`translate::outbound_reason`] resolving records stored under either
//! schema revision.
//!
//! ## Concurrency
//!
//! Every operation is a pure function over static tables built once per
//! process. There is no shared mutable state and no locking; unlimited
//! concurrent callers are safe.
//!
//! ## Error Policy
//!
//! A lookup miss means the static tables are out of sync with the
//! vocabularies — a defect, not a runtime incident. Errors propagate as
//! hard failures and are never swallowed or retried. Run
//! [`validate::check_consistency`] at startup or in CI to catch table
//! drift before it can corrupt reported statuses.

pub mod error;
pub mod migration;
pub mod status;
pub mod tables;
pub mod translate;
pub mod validate;

// Re-export the operation surface for ergonomic imports.
pub use error::MappingError;
pub use migration::{demote_to_legacy, migrate_legacy_key};
pub use status::{derive_status, derive_status_for_key};
pub use translate::{
    agency_event_to_provider_reason, ingest_provider_event, legacy_agency_event_to_provider_reason,
    legacy_provider_reason_to_agency_event, outbound_reason, provider_reason_to_agency_event,
};
pub use validate::{check_consistency, ConsistencyReport, ConsistencyViolation};
