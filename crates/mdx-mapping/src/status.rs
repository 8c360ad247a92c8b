//! # Device Status Derivation
//!
//! A device's status is never stored as an independent source of truth;
//! it is a function of the most recent relevant event. The caller must
//! persist the event record and the derived status in one transaction so
//! a crash between the two writes cannot leave a stale status behind.
//!
//! Status groupings follow the provider API listing:
//! <https://github.com/openmobilityfoundation/mobility-data-specification/tree/dev/provider>

use mdx_core::{CanonicalEventKey, DeviceStatus, ProviderReason};

use crate::error::MappingError;
use crate::tables;

/// Derive the device status implied by a provider-dialect reason.
///
/// Total over the provider vocabulary: informational reasons derive
/// `Unknown` (telemetry) or `Available` (battery charged) rather than
/// failing, matching the provider-API status groupings.
pub fn derive_status(reason: ProviderReason) -> DeviceStatus {
    match reason {
        // available
        ProviderReason::ServiceStart
        | ProviderReason::UserDropOff
        | ProviderReason::RebalanceDropOff
        | ProviderReason::MaintenanceDropOff
        | ProviderReason::AgencyDropOff
        | ProviderReason::BatteryCharged => DeviceStatus::Available,
        // reserved
        ProviderReason::UserPickUp => DeviceStatus::Reserved,
        // unavailable
        ProviderReason::Maintenance | ProviderReason::LowBattery => DeviceStatus::Unavailable,
        // removed
        ProviderReason::ServiceEnd
        | ProviderReason::RebalancePickUp
        | ProviderReason::MaintenancePickUp
        | ProviderReason::AgencyPickUp => DeviceStatus::Removed,
        // telemetry carries no status transition
        ProviderReason::Telemetry => DeviceStatus::Unknown,
    }
}

/// Derive the device status implied by a canonical Agency event key.
///
/// Defined for every key the outbound table resolves. Keys outside that
/// set have no status effect and fail with
/// [`MappingError::NoStatusForEvent`]; callers on the agency path should
/// check applicability before querying.
pub fn derive_status_for_key(key: &CanonicalEventKey) -> Result<DeviceStatus, MappingError> {
    tables::key_to_status()
        .get(key)
        .copied()
        .ok_or(MappingError::NoStatusForEvent(*key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdx_core::{EventType, EventTypeReason};

    #[test]
    fn test_low_battery_service_end_is_unavailable() {
        let key = CanonicalEventKey::with_reason(EventType::ServiceEnd, EventTypeReason::LowBattery);
        assert_eq!(derive_status_for_key(&key).unwrap(), DeviceStatus::Unavailable);
    }

    #[test]
    fn test_trip_start_is_reserved() {
        let key = CanonicalEventKey::bare(EventType::TripStart);
        assert_eq!(derive_status_for_key(&key).unwrap(), DeviceStatus::Reserved);
    }

    #[test]
    fn test_telemetry_reason_is_unknown() {
        assert_eq!(derive_status(ProviderReason::Telemetry), DeviceStatus::Unknown);
    }

    #[test]
    fn test_no_status_for_unmapped_key() {
        let key = CanonicalEventKey::bare(EventType::Telemetry);
        assert_eq!(
            derive_status_for_key(&key),
            Err(MappingError::NoStatusForEvent(key))
        );
    }

    #[test]
    fn test_pick_ups_remove_from_field() {
        for reason in [
            ProviderReason::ServiceEnd,
            ProviderReason::RebalancePickUp,
            ProviderReason::MaintenancePickUp,
            ProviderReason::AgencyPickUp,
        ] {
            assert_eq!(derive_status(reason), DeviceStatus::Removed);
        }
    }
}
