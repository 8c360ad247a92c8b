//! Integration suite for the dialect mappings.
//!
//! Exercises the composition properties across tables:
//!
//! ```text
//! Legacy:  Provider --legacy inbound--> Agency --legacy outbound--> Provider
//! Current: Provider --inbound--------> Agency --outbound---------> Provider
//!                          \--migration--/
//! ```

use mdx_core::{CanonicalEventKey, DeviceStatus, EventType, EventTypeReason, ProviderReason};
use mdx_mapping::{
    agency_event_to_provider_reason, check_consistency, demote_to_legacy, derive_status_for_key,
    ingest_provider_event, legacy_agency_event_to_provider_reason,
    legacy_provider_reason_to_agency_event, migrate_legacy_key, provider_reason_to_agency_event,
    tables, MappingError,
};

/// outbound after inbound is the identity on the current domain.
#[test]
fn current_round_trip_is_identity() {
    for (reason, key) in tables::PROVIDER_REASON_TO_AGENCY_EVENT {
        assert_eq!(
            agency_event_to_provider_reason(key).unwrap(),
            *reason,
            "round trip broken for {reason}"
        );
    }
}

/// Same identity over the legacy tables.
#[test]
fn legacy_round_trip_is_identity() {
    for (reason, _) in tables::LEGACY_PROVIDER_REASON_TO_AGENCY_EVENT {
        let key = legacy_provider_reason_to_agency_event(*reason).unwrap();
        assert_eq!(
            legacy_agency_event_to_provider_reason(&key).unwrap(),
            *reason,
            "legacy round trip broken for {reason}"
        );
    }
}

/// Migrating the legacy inbound result equals the current inbound result.
#[test]
fn migration_agrees_with_current_mapping() {
    for (reason, old_key) in tables::LEGACY_PROVIDER_REASON_TO_AGENCY_EVENT {
        let migrated = migrate_legacy_key(old_key);
        let current = provider_reason_to_agency_event(*reason).unwrap();
        assert_eq!(migrated, current, "divergence for {reason}");
    }
}

/// Migrating an already-current key changes nothing.
#[test]
fn migration_fixes_current_keys() {
    for (_, key) in tables::PROVIDER_REASON_TO_AGENCY_EVENT {
        assert_eq!(migrate_legacy_key(key), *key);
    }
}

/// Applying the migration twice equals applying it once.
#[test]
fn migration_is_idempotent_on_legacy_domain() {
    for (_, old_key) in tables::LEGACY_PROVIDER_REASON_TO_AGENCY_EVENT {
        let once = migrate_legacy_key(old_key);
        assert_eq!(migrate_legacy_key(&once), once);
    }
}

/// demote(migrate(old)) == old and migrate(demote(new)) == new.
#[test]
fn migration_is_invertible_over_its_table() {
    for (old, new) in tables::LEGACY_TO_CURRENT_AGENCY_EVENT {
        assert_eq!(demote_to_legacy(&migrate_legacy_key(old)), *old);
        assert_eq!(migrate_legacy_key(&demote_to_legacy(new)), *new);
    }
}

/// rebalance_pick_up maps to provider_pick_up/rebalance and back.
#[test]
fn rebalance_pick_up_scenario() {
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

/// service_end/low_battery derives an unavailable device.
#[test]
fn low_battery_status_scenario() {
    let key = CanonicalEventKey::with_reason(EventType::ServiceEnd, EventTypeReason::LowBattery);
    assert_eq!(derive_status_for_key(&key).unwrap(), DeviceStatus::Unavailable);
}

/// rebalance_drop_off migrates to provider_drop_off and stays there.
#[test]
fn rebalance_drop_off_migration_scenario() {
    let old = CanonicalEventKey::bare(EventType::RebalanceDropOff);
    let new = migrate_legacy_key(&old);
    assert_eq!(new, CanonicalEventKey::bare(EventType::ProviderDropOff));
    assert_eq!(migrate_legacy_key(&new), new);
}

/// An out-of-vocabulary symbol fails the ingest path loudly.
#[test]
fn unknown_symbol_scenario() {
    assert_eq!(
        ingest_provider_event("flux_capacitor_event"),
        Err(MappingError::UnknownReason("flux_capacitor_event".into()))
    );
}

/// The shipped tables pass the full consistency walk.
#[test]
fn shipped_tables_are_consistent() {
    if let Err(report) = check_consistency() {
        panic!("{report}");
    }
}

/// Every key the inbound path can produce has a derivable status.
#[test]
fn inbound_image_has_total_status_coverage() {
    for (_, key) in tables::PROVIDER_REASON_TO_AGENCY_EVENT {
        assert!(derive_status_for_key(key).is_ok(), "no status for {key}");
    }
}
