//! # Static Mapping Tables
//!
//! Source of truth for every dialect and schema-revision mapping. The
//! tables are ordered slices; hash-map views are built once per process
//! behind `OnceLock` and only ever exposed by shared reference. Entry
//! order matters for the migration inverse, where the first matching
//! entry wins.
//!
//! When we poll providers we cast the provider `event_type_reason` into
//! the Agency nomenclature with [`PROVIDER_REASON_TO_AGENCY_EVENT`]. When
//! we are ourselves polled we fold canonical keys back with
//! [`AGENCY_EVENT_TO_PROVIDER_REASON`]. The `LEGACY_*` tables cover the
//! pre-qualifier Agency schema still present in stored records.
//!
//! Table contents follow the MDS provider API listing:
//! <https://github.com/openmobilityfoundation/mobility-data-specification/tree/dev/provider>

use std::collections::HashMap;
use std::sync::OnceLock;

use mdx_core::{CanonicalEventKey, DeviceStatus, EventType, EventTypeReason, ProviderReason};

use crate::status::derive_status;

/// Shorthand for table literals.
const fn bare(event_type: EventType) -> CanonicalEventKey {
    CanonicalEventKey::bare(event_type)
}

/// Shorthand for table literals.
const fn qualified(event_type: EventType, reason: EventTypeReason) -> CanonicalEventKey {
    CanonicalEventKey::with_reason(event_type, reason)
}

/// Provider reasons that are informational only: they never translate to
/// an Agency event and deliberately have no entry in
/// [`PROVIDER_REASON_TO_AGENCY_EVENT`].
pub const INFORMATIONAL_REASONS: &[ProviderReason] =
    &[ProviderReason::Telemetry, ProviderReason::BatteryCharged];

/// Current inbound table: provider `event_type_reason` to canonical
/// Agency event key. Grouped by the provider-API status the reason
/// implies.
pub const PROVIDER_REASON_TO_AGENCY_EVENT: &[(ProviderReason, CanonicalEventKey)] = &[
    // available
    (ProviderReason::ServiceStart, bare(EventType::ServiceStart)),
    (ProviderReason::UserDropOff, bare(EventType::TripEnd)),
    (
        ProviderReason::RebalanceDropOff,
        bare(EventType::ProviderDropOff),
    ),
    // The agency side has no maintenance_drop_off; this is the closest.
    (
        ProviderReason::MaintenanceDropOff,
        qualified(EventType::ProviderDropOff, EventTypeReason::Maintenance),
    ),
    (ProviderReason::AgencyDropOff, bare(EventType::AgencyDropOff)),
    // reserved
    (ProviderReason::UserPickUp, bare(EventType::TripStart)),
    // unavailable
    (
        ProviderReason::Maintenance,
        qualified(EventType::ServiceEnd, EventTypeReason::Maintenance),
    ),
    (
        ProviderReason::LowBattery,
        qualified(EventType::ServiceEnd, EventTypeReason::LowBattery),
    ),
    // removed
    (ProviderReason::ServiceEnd, bare(EventType::ServiceEnd)),
    // The agency side has no rebalance_pick_up.
    (
        ProviderReason::RebalancePickUp,
        qualified(EventType::ProviderPickUp, EventTypeReason::Rebalance),
    ),
    (
        ProviderReason::MaintenancePickUp,
        qualified(EventType::ProviderPickUp, EventTypeReason::Maintenance),
    ),
    (ProviderReason::AgencyPickUp, bare(EventType::CityPickUp)),
];

/// Legacy inbound table: the pre-qualifier schema stored provider reasons
/// as bare Agency event types.
pub const LEGACY_PROVIDER_REASON_TO_AGENCY_EVENT: &[(ProviderReason, CanonicalEventKey)] = &[
    (ProviderReason::ServiceStart, bare(EventType::ServiceStart)),
    (ProviderReason::UserDropOff, bare(EventType::TripEnd)),
    (
        ProviderReason::RebalanceDropOff,
        bare(EventType::RebalanceDropOff),
    ),
    (
        ProviderReason::MaintenanceDropOff,
        bare(EventType::MaintenanceDropOff),
    ),
    (ProviderReason::UserPickUp, bare(EventType::TripStart)),
    (ProviderReason::Maintenance, bare(EventType::Maintenance)),
    (ProviderReason::LowBattery, bare(EventType::LowBattery)),
    (ProviderReason::ServiceEnd, bare(EventType::ServiceEnd)),
    (
        ProviderReason::RebalancePickUp,
        bare(EventType::RebalancePickUp),
    ),
    (
        ProviderReason::MaintenancePickUp,
        bare(EventType::MaintenancePickUp),
    ),
];

/// Current outbound table: canonical Agency event key to provider
/// `event_type_reason`.
///
/// A superset of the inbound table's image: Agency-only keys (register,
/// reserve, trip_enter, ...) must still resolve for outbound responses.
/// Several keys fold onto the same provider reason; the reverse (one key,
/// two reasons) is forbidden and checked by the consistency validator.
pub const AGENCY_EVENT_TO_PROVIDER_REASON: &[(CanonicalEventKey, ProviderReason)] = &[
    (bare(EventType::Register), ProviderReason::ServiceEnd),
    (bare(EventType::ServiceStart), ProviderReason::ServiceStart),
    (bare(EventType::ServiceEnd), ProviderReason::ServiceEnd),
    (
        qualified(EventType::ServiceEnd, EventTypeReason::LowBattery),
        ProviderReason::LowBattery,
    ),
    (
        qualified(EventType::ServiceEnd, EventTypeReason::Maintenance),
        ProviderReason::Maintenance,
    ),
    (
        qualified(EventType::ServiceEnd, EventTypeReason::Compliance),
        ProviderReason::ServiceEnd,
    ),
    (
        qualified(EventType::ServiceEnd, EventTypeReason::OffHours),
        ProviderReason::ServiceEnd,
    ),
    (
        bare(EventType::ProviderDropOff),
        ProviderReason::RebalanceDropOff,
    ),
    // Not in the agency API but in the provider API.
    (
        qualified(EventType::ProviderDropOff, EventTypeReason::Maintenance),
        ProviderReason::MaintenanceDropOff,
    ),
    (bare(EventType::ProviderPickUp), ProviderReason::ServiceEnd),
    (
        qualified(EventType::ProviderPickUp, EventTypeReason::Rebalance),
        ProviderReason::RebalancePickUp,
    ),
    (
        qualified(EventType::ProviderPickUp, EventTypeReason::Maintenance),
        ProviderReason::MaintenancePickUp,
    ),
    (
        qualified(EventType::ProviderPickUp, EventTypeReason::Charge),
        ProviderReason::MaintenancePickUp,
    ),
    (
        qualified(EventType::ProviderPickUp, EventTypeReason::Compliance),
        ProviderReason::ServiceEnd,
    ),
    // No city_pick_up in the provider API.
    (bare(EventType::CityPickUp), ProviderReason::AgencyPickUp),
    (bare(EventType::Reserve), ProviderReason::UserPickUp),
    (
        bare(EventType::CancelReservation),
        ProviderReason::UserDropOff,
    ),
    (bare(EventType::TripStart), ProviderReason::UserPickUp),
    (bare(EventType::TripEnter), ProviderReason::UserPickUp),
    (bare(EventType::TripLeave), ProviderReason::ServiceEnd),
    (bare(EventType::TripEnd), ProviderReason::UserDropOff),
    (bare(EventType::Deregister), ProviderReason::ServiceEnd),
    (
        qualified(EventType::Deregister, EventTypeReason::Missing),
        ProviderReason::ServiceEnd,
    ),
    (
        qualified(EventType::Deregister, EventTypeReason::Decommissioned),
        ProviderReason::ServiceEnd,
    ),
    // Not in the agency API; retained for completeness, not reachable
    // from the inbound table.
    (bare(EventType::AgencyDropOff), ProviderReason::AgencyDropOff), // not used
    (bare(EventType::AgencyPickUp), ProviderReason::AgencyPickUp),   // not used
    (
        bare(EventType::BatteryCharged),
        ProviderReason::MaintenanceDropOff,
    ), // not used
];

/// Legacy outbound table: bare legacy event type to provider reason.
pub const LEGACY_AGENCY_EVENT_TO_PROVIDER_REASON: &[(EventType, ProviderReason)] = &[
    (EventType::ServiceStart, ProviderReason::ServiceStart),
    (EventType::CancelReservation, ProviderReason::UserDropOff),
    (EventType::TripEnd, ProviderReason::UserDropOff),
    (EventType::RebalanceDropOff, ProviderReason::RebalanceDropOff),
    (
        EventType::MaintenanceDropOff,
        ProviderReason::MaintenanceDropOff,
    ),
    (EventType::BatteryCharged, ProviderReason::MaintenanceDropOff),
    (EventType::Reserve, ProviderReason::UserPickUp),
    (EventType::TripStart, ProviderReason::UserPickUp),
    (EventType::TripEnter, ProviderReason::UserPickUp),
    // Dubious mapping inherited from production data; flagged for product
    // review, behavior preserved.
    (EventType::TripLeave, ProviderReason::UserPickUp),
    (EventType::LowBattery, ProviderReason::LowBattery),
    (EventType::Maintenance, ProviderReason::Maintenance),
    (EventType::Deregister, ProviderReason::ServiceEnd),
    (EventType::ServiceEnd, ProviderReason::ServiceEnd),
    (EventType::Register, ProviderReason::ServiceEnd),
    (EventType::RebalancePickUp, ProviderReason::RebalancePickUp),
    (
        EventType::MaintenancePickUp,
        ProviderReason::MaintenancePickUp,
    ),
];

/// Schema-revision migration table: legacy Agency key to current Agency
/// key. Keys absent here migrate as themselves (identity default), so the
/// migration is total by construction.
pub const LEGACY_TO_CURRENT_AGENCY_EVENT: &[(CanonicalEventKey, CanonicalEventKey)] = &[
    (bare(EventType::ServiceStart), bare(EventType::ServiceStart)),
    (bare(EventType::TripEnd), bare(EventType::TripEnd)),
    (
        bare(EventType::RebalanceDropOff),
        bare(EventType::ProviderDropOff),
    ),
    (
        bare(EventType::MaintenanceDropOff),
        qualified(EventType::ProviderDropOff, EventTypeReason::Maintenance),
    ),
    (bare(EventType::TripStart), bare(EventType::TripStart)),
    (
        bare(EventType::Maintenance),
        qualified(EventType::ServiceEnd, EventTypeReason::Maintenance),
    ),
    (
        bare(EventType::LowBattery),
        qualified(EventType::ServiceEnd, EventTypeReason::LowBattery),
    ),
    (bare(EventType::ServiceEnd), bare(EventType::ServiceEnd)),
    (
        bare(EventType::RebalancePickUp),
        qualified(EventType::ProviderPickUp, EventTypeReason::Rebalance),
    ),
    (
        bare(EventType::MaintenancePickUp),
        qualified(EventType::ProviderPickUp, EventTypeReason::Maintenance),
    ),
];

// ─── Precomputed map views ──────────────────────────────────────────

/// Inbound map view of [`PROVIDER_REASON_TO_AGENCY_EVENT`].
pub(crate) fn provider_to_agency() -> &'static HashMap<ProviderReason, CanonicalEventKey> {
    static MAP: OnceLock<HashMap<ProviderReason, CanonicalEventKey>> = OnceLock::new();
    MAP.get_or_init(|| PROVIDER_REASON_TO_AGENCY_EVENT.iter().copied().collect())
}

/// Inbound map view of [`LEGACY_PROVIDER_REASON_TO_AGENCY_EVENT`].
pub(crate) fn legacy_provider_to_agency() -> &'static HashMap<ProviderReason, CanonicalEventKey> {
    static MAP: OnceLock<HashMap<ProviderReason, CanonicalEventKey>> = OnceLock::new();
    MAP.get_or_init(|| {
        LEGACY_PROVIDER_REASON_TO_AGENCY_EVENT
            .iter()
            .copied()
            .collect()
    })
}

/// Outbound map view of [`AGENCY_EVENT_TO_PROVIDER_REASON`].
pub(crate) fn agency_to_provider() -> &'static HashMap<CanonicalEventKey, ProviderReason> {
    static MAP: OnceLock<HashMap<CanonicalEventKey, ProviderReason>> = OnceLock::new();
    MAP.get_or_init(|| AGENCY_EVENT_TO_PROVIDER_REASON.iter().copied().collect())
}

/// Outbound map view of [`LEGACY_AGENCY_EVENT_TO_PROVIDER_REASON`].
pub(crate) fn legacy_agency_to_provider() -> &'static HashMap<EventType, ProviderReason> {
    static MAP: OnceLock<HashMap<EventType, ProviderReason>> = OnceLock::new();
    MAP.get_or_init(|| {
        LEGACY_AGENCY_EVENT_TO_PROVIDER_REASON
            .iter()
            .copied()
            .collect()
    })
}

/// Forward map view of [`LEGACY_TO_CURRENT_AGENCY_EVENT`].
pub(crate) fn legacy_to_current() -> &'static HashMap<CanonicalEventKey, CanonicalEventKey> {
    static MAP: OnceLock<HashMap<CanonicalEventKey, CanonicalEventKey>> = OnceLock::new();
    MAP.get_or_init(|| LEGACY_TO_CURRENT_AGENCY_EVENT.iter().copied().collect())
}

/// Fiber-wise inverse of the migration table, precomputed instead of
/// scanned per call. On a value collision the first entry in table order
/// wins, matching the scan semantics the inverse replaces.
pub(crate) fn current_to_legacy() -> &'static HashMap<CanonicalEventKey, CanonicalEventKey> {
    static MAP: OnceLock<HashMap<CanonicalEventKey, CanonicalEventKey>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut inverse = HashMap::new();
        for (old, new) in LEGACY_TO_CURRENT_AGENCY_EVENT {
            inverse.entry(*new).or_insert(*old);
        }
        inverse
    })
}

/// Canonical key to device status, composed from the outbound table and
/// the per-reason status derivation. Keys with no outbound mapping have
/// no status effect.
pub(crate) fn key_to_status() -> &'static HashMap<CanonicalEventKey, DeviceStatus> {
    static MAP: OnceLock<HashMap<CanonicalEventKey, DeviceStatus>> = OnceLock::new();
    MAP.get_or_init(|| {
        AGENCY_EVENT_TO_PROVIDER_REASON
            .iter()
            .map(|(key, reason)| (*key, derive_status(*reason)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_domain_excludes_informational_reasons() {
        for reason in INFORMATIONAL_REASONS {
            assert!(!provider_to_agency().contains_key(reason));
        }
    }

    #[test]
    fn test_map_views_preserve_entry_counts() {
        // A shrunken map view means a duplicate key in the source slice.
        assert_eq!(
            provider_to_agency().len(),
            PROVIDER_REASON_TO_AGENCY_EVENT.len()
        );
        assert_eq!(
            agency_to_provider().len(),
            AGENCY_EVENT_TO_PROVIDER_REASON.len()
        );
        assert_eq!(
            legacy_to_current().len(),
            LEGACY_TO_CURRENT_AGENCY_EVENT.len()
        );
    }

    #[test]
    fn test_migration_inverse_covers_all_values() {
        for (_, new) in LEGACY_TO_CURRENT_AGENCY_EVENT {
            assert!(current_to_legacy().contains_key(new));
        }
    }

    #[test]
    fn test_every_outbound_key_has_a_status() {
        for (key, _) in AGENCY_EVENT_TO_PROVIDER_REASON {
            assert!(key_to_status().contains_key(key), "no status for {key}");
        }
    }
}
