//! # Dialect Translation
//!
//! Pure lookups over the static tables in [`crate::tables`]. Inbound
//! translation turns a provider `event_type_reason` into a canonical
//! Agency event key; outbound translation folds a canonical key back to
//! the single provider reason a polled response must carry.

use std::str::FromStr;

use mdx_core::{CanonicalEventKey, DeviceStatus, ProviderReason, StatusEvent};

use crate::error::MappingError;
use crate::status::derive_status;
use crate::tables;

/// Translate a provider-dialect reason to a canonical Agency event key.
///
/// Total over the translation domain: every provider reason except the
/// informational set ([`tables::INFORMATIONAL_REASONS`]) has exactly one
/// entry. A miss is [`MappingError::UnknownReason`] — a config defect,
/// not a data error, since the domain is closed and validated at load.
pub fn provider_reason_to_agency_event(
    reason: ProviderReason,
) -> Result<CanonicalEventKey, MappingError> {
    tables::provider_to_agency()
        .get(&reason)
        .copied()
        .ok_or_else(|| MappingError::UnknownReason(reason.to_string()))
}

/// Legacy-schema variant of [`provider_reason_to_agency_event`]: the
/// resulting keys are bare legacy event types.
pub fn legacy_provider_reason_to_agency_event(
    reason: ProviderReason,
) -> Result<CanonicalEventKey, MappingError> {
    tables::legacy_provider_to_agency()
        .get(&reason)
        .copied()
        .ok_or_else(|| MappingError::UnknownReason(reason.to_string()))
}

/// Translate a canonical Agency event key to a provider-dialect reason.
///
/// Defined over every key reachable from the inbound table plus the
/// Agency-only keys a provider never sends. A miss is
/// [`MappingError::UnmappedEvent`]: an Agency event type was added
/// without updating the outbound table.
pub fn agency_event_to_provider_reason(
    key: &CanonicalEventKey,
) -> Result<ProviderReason, MappingError> {
    tables::agency_to_provider()
        .get(key)
        .copied()
        .ok_or(MappingError::UnmappedEvent(*key))
}

/// Legacy-schema variant of [`agency_event_to_provider_reason`], keyed on
/// bare legacy event types.
pub fn legacy_agency_event_to_provider_reason(
    key: &CanonicalEventKey,
) -> Result<ProviderReason, MappingError> {
    if key.reason.is_some() {
        // Qualified keys cannot come from the legacy schema.
        return Err(MappingError::UnmappedEvent(*key));
    }
    tables::legacy_agency_to_provider()
        .get(&key.event_type)
        .copied()
        .ok_or(MappingError::UnmappedEvent(*key))
}

/// Resolve the provider reason for a stored event under either schema
/// revision.
///
/// Records written after the schema migration carry a reason qualifier
/// or a bare key the current outbound table knows; anything else is a
/// legacy record and resolves through the legacy table.
pub fn outbound_reason(event: &StatusEvent) -> Result<ProviderReason, MappingError> {
    let key = &event.key;
    if key.reason.is_some() || tables::agency_to_provider().contains_key(key) {
        agency_event_to_provider_reason(key)
    } else {
        legacy_agency_event_to_provider_reason(key)
    }
}

/// Inbound convenience for the polling collaborator: parse a raw provider
/// `event_type_reason` string and return the canonical key together with
/// the status the event implies.
///
/// An out-of-vocabulary string surfaces as
/// [`MappingError::UnknownReason`], same as an unlisted reason.
pub fn ingest_provider_event(
    raw_reason: &str,
) -> Result<(CanonicalEventKey, DeviceStatus), MappingError> {
    let reason = ProviderReason::from_str(raw_reason)
        .map_err(|_| MappingError::UnknownReason(raw_reason.to_owned()))?;
    let key = provider_reason_to_agency_event(reason)?;
    Ok((key, derive_status(reason)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mdx_core::{EventSource, EventType, EventTypeReason};
    use uuid::Uuid;

    fn stored(key: CanonicalEventKey) -> StatusEvent {
        StatusEvent::new(Uuid::new_v4(), Utc::now(), EventSource::ProviderApi, key)
    }

    #[test]
    fn test_rebalance_pick_up_both_directions() {
        let key = provider_reason_to_agency_event(ProviderReason::RebalancePickUp).unwrap();
        assert_eq!(
            key,
            CanonicalEventKey::with_reason(EventType::ProviderPickUp, EventTypeReason::Rebalance)
        );
        assert_eq!(
            agency_event_to_provider_reason(&key).unwrap(),
            ProviderReason::RebalancePickUp
        );
    }

    #[test]
    fn test_informational_reason_is_unknown() {
        assert_eq!(
            provider_reason_to_agency_event(ProviderReason::Telemetry),
            Err(MappingError::UnknownReason("telemetry".into()))
        );
    }

    #[test]
    fn test_agency_only_keys_resolve() {
        // Flagged "not used" upstream; must still resolve for outbound
        // completeness.
        for (key, expected) in [
            (
                CanonicalEventKey::bare(EventType::AgencyDropOff),
                ProviderReason::AgencyDropOff,
            ),
            (
                CanonicalEventKey::bare(EventType::BatteryCharged),
                ProviderReason::MaintenanceDropOff,
            ),
        ] {
            assert_eq!(agency_event_to_provider_reason(&key).unwrap(), expected);
        }
    }

    #[test]
    fn test_unmapped_key_fails() {
        let key = CanonicalEventKey::with_reason(EventType::TripEnd, EventTypeReason::Charge);
        assert_eq!(
            agency_event_to_provider_reason(&key),
            Err(MappingError::UnmappedEvent(key))
        );
    }

    #[test]
    fn test_outbound_reason_current_record() {
        let event = stored(CanonicalEventKey::with_reason(
            EventType::ServiceEnd,
            EventTypeReason::Maintenance,
        ));
        assert_eq!(outbound_reason(&event).unwrap(), ProviderReason::Maintenance);
    }

    #[test]
    fn test_outbound_reason_legacy_record() {
        // rebalance_pick_up as a bare key exists only in the legacy schema.
        let event = stored(CanonicalEventKey::bare(EventType::RebalancePickUp));
        assert_eq!(
            outbound_reason(&event).unwrap(),
            ProviderReason::RebalancePickUp
        );
    }

    #[test]
    fn test_outbound_reason_bare_current_record() {
        // trip_end is bare in both schemas; the current table wins.
        let event = stored(CanonicalEventKey::bare(EventType::TripEnd));
        assert_eq!(outbound_reason(&event).unwrap(), ProviderReason::UserDropOff);
    }

    #[test]
    fn test_ingest_known_reason() {
        let (key, status) = ingest_provider_event("maintenance_pick_up").unwrap();
        assert_eq!(
            key,
            CanonicalEventKey::with_reason(EventType::ProviderPickUp, EventTypeReason::Maintenance)
        );
        assert_eq!(status, DeviceStatus::Removed);
    }

    #[test]
    fn test_ingest_unknown_symbol() {
        assert_eq!(
            ingest_provider_event("flux_capacitor_event"),
            Err(MappingError::UnknownReason("flux_capacitor_event".into()))
        );
    }
}
