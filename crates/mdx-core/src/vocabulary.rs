//! # Event Vocabularies — Single Source of Truth
//!
//! Defines the closed symbol sets shared by the Agency and Provider API
//! dialects. These are the ONE set of definitions used across the entire
//! workspace. Every `match` on a vocabulary enum must be exhaustive —
//! adding a symbol forces every consumer to handle it at compile time.
//!
//! ## Invariant
//!
//! A single definition per vocabulary prevents dialect drift: the mapping
//! tables in `mdx-mapping` join on these enums, so a symbol cannot exist
//! in one table under a spelling the other table does not know.
//!
//! Symbol sets follow the Mobility Data Specification agency and provider
//! APIs:
//! <https://github.com/openmobilityfoundation/mobility-data-specification>

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VocabularyError;

/// An event type in the Agency-dialect vocabulary.
///
/// The first thirteen variants are the event types listed in the MDS
/// agency API, in order. The next ten are provider-dialect reason names
/// retained as event types: the legacy (pre-qualifier) Agency schema
/// stored provider reasons directly as event types, so canonical keys over
/// these variants still occur in stored data and in the migration table.
/// `Telemetry` and `BatteryCharged` close the set: the former is in
/// neither MDS API, the latter is anticipated by a provider-spec revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Device registered with the agency.
    Register,
    /// Device made available for rental.
    ServiceStart,
    /// Device taken out of service.
    ServiceEnd,
    /// Provider placed the device in the field.
    ProviderDropOff,
    /// Provider collected the device from the field.
    ProviderPickUp,
    /// City authority collected the device.
    CityPickUp,
    /// User reserved the device.
    Reserve,
    /// User cancelled a reservation.
    CancelReservation,
    /// Trip began.
    TripStart,
    /// In-progress trip entered the jurisdiction.
    TripEnter,
    /// In-progress trip left the jurisdiction.
    TripLeave,
    /// Trip ended.
    TripEnd,
    /// Device deregistered from the agency.
    Deregister,
    // Provider-dialect names kept as event types for legacy-schema keys.
    /// Legacy: user ended a rental (provider dialect).
    UserDropOff,
    /// Legacy: rebalancing drop off (provider dialect).
    RebalanceDropOff,
    /// Legacy: maintenance drop off (provider dialect).
    MaintenanceDropOff,
    /// Legacy: agency drop off (provider dialect).
    AgencyDropOff,
    /// Legacy: user started a rental (provider dialect).
    UserPickUp,
    /// Legacy: device entered maintenance (provider dialect).
    Maintenance,
    /// Legacy: battery depleted (provider dialect).
    LowBattery,
    /// Legacy: rebalancing pick up (provider dialect).
    RebalancePickUp,
    /// Legacy: maintenance pick up (provider dialect).
    MaintenancePickUp,
    /// Legacy: agency pick up (provider dialect).
    AgencyPickUp,
    /// Telemetry received; in neither MDS API.
    Telemetry,
    /// Battery fully charged; anticipated by a provider-spec revision.
    BatteryCharged,
}

/// Total number of event types. Used for compile-time assertions.
pub const EVENT_TYPE_COUNT: usize = 25;

impl EventType {
    /// Returns all event types in canonical order.
    pub fn all() -> &'static [EventType] {
        &[
            Self::Register,
            Self::ServiceStart,
            Self::ServiceEnd,
            Self::ProviderDropOff,
            Self::ProviderPickUp,
            Self::CityPickUp,
            Self::Reserve,
            Self::CancelReservation,
            Self::TripStart,
            Self::TripEnter,
            Self::TripLeave,
            Self::TripEnd,
            Self::Deregister,
            Self::UserDropOff,
            Self::RebalanceDropOff,
            Self::MaintenanceDropOff,
            Self::AgencyDropOff,
            Self::UserPickUp,
            Self::Maintenance,
            Self::LowBattery,
            Self::RebalancePickUp,
            Self::MaintenancePickUp,
            Self::AgencyPickUp,
            Self::Telemetry,
            Self::BatteryCharged,
        ]
    }

    /// Returns the snake_case string identifier for this event type.
    ///
    /// This must match the serde serialization format; all mapping tables
    /// and wire representations join on this identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::ServiceStart => "service_start",
            Self::ServiceEnd => "service_end",
            Self::ProviderDropOff => "provider_drop_off",
            Self::ProviderPickUp => "provider_pick_up",
            Self::CityPickUp => "city_pick_up",
            Self::Reserve => "reserve",
            Self::CancelReservation => "cancel_reservation",
            Self::TripStart => "trip_start",
            Self::TripEnter => "trip_enter",
            Self::TripLeave => "trip_leave",
            Self::TripEnd => "trip_end",
            Self::Deregister => "deregister",
            Self::UserDropOff => "user_drop_off",
            Self::RebalanceDropOff => "rebalance_drop_off",
            Self::MaintenanceDropOff => "maintenance_drop_off",
            Self::AgencyDropOff => "agency_drop_off",
            Self::UserPickUp => "user_pick_up",
            Self::Maintenance => "maintenance",
            Self::LowBattery => "low_battery",
            Self::RebalancePickUp => "rebalance_pick_up",
            Self::MaintenancePickUp => "maintenance_pick_up",
            Self::AgencyPickUp => "agency_pick_up",
            Self::Telemetry => "telemetry",
            Self::BatteryCharged => "battery_charged",
        }
    }

    /// English display label. Presentation-layer use only: mapping and
    /// derivation logic must never branch on labels.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::ServiceStart => "Service start",
            Self::ServiceEnd => "Service end",
            Self::ProviderDropOff => "Provider drop off",
            Self::ProviderPickUp => "Provider pick up",
            Self::CityPickUp => "City pick up",
            Self::Reserve => "Reserve",
            Self::CancelReservation => "Cancel reservation",
            Self::TripStart => "Trip start",
            Self::TripEnter => "Trip enter",
            Self::TripLeave => "Trip leave",
            Self::TripEnd => "Trip end",
            Self::Deregister => "Deregister",
            Self::UserDropOff => "User drop off",
            Self::RebalanceDropOff => "Rebalance drop off",
            Self::MaintenanceDropOff => "Maintenance drop off",
            Self::AgencyDropOff => "Agency drop off",
            Self::UserPickUp => "User pick up",
            Self::Maintenance => "Maintenance",
            Self::LowBattery => "Low battery",
            Self::RebalancePickUp => "Rebalance pick up",
            Self::MaintenancePickUp => "Maintenance pick up",
            Self::AgencyPickUp => "Agency pick up",
            Self::Telemetry => "Received telemetry",
            Self::BatteryCharged => "Battery charged",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|et| et.as_str() == s)
            .copied()
            .ok_or_else(|| VocabularyError::unknown("event type", s))
    }
}

/// An optional qualifier attached to some event types.
///
/// Not every (event type, reason) pair is meaningful — only the pairs
/// present in the mapping tables are valid canonical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTypeReason {
    /// Battery depleted below the serviceable threshold.
    LowBattery,
    /// Device requires or is undergoing maintenance.
    Maintenance,
    /// Removed for regulatory compliance.
    Compliance,
    /// Removed outside of service hours.
    OffHours,
    /// Moved to rebalance fleet distribution.
    Rebalance,
    /// Collected for charging.
    Charge,
    /// Device cannot be located.
    Missing,
    /// Device permanently retired.
    Decommissioned,
}

/// Total number of event type reasons.
pub const EVENT_TYPE_REASON_COUNT: usize = 8;

impl EventTypeReason {
    /// Returns all reasons in canonical order.
    pub fn all() -> &'static [EventTypeReason] {
        &[
            Self::LowBattery,
            Self::Maintenance,
            Self::Compliance,
            Self::OffHours,
            Self::Rebalance,
            Self::Charge,
            Self::Missing,
            Self::Decommissioned,
        ]
    }

    /// Returns the snake_case string identifier for this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LowBattery => "low_battery",
            Self::Maintenance => "maintenance",
            Self::Compliance => "compliance",
            Self::OffHours => "off_hours",
            Self::Rebalance => "rebalance",
            Self::Charge => "charge",
            Self::Missing => "missing",
            Self::Decommissioned => "decommissioned",
        }
    }

    /// English display label for presentation layers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LowBattery => "Low battery",
            Self::Maintenance => "Maintenance",
            Self::Compliance => "Compliance",
            Self::OffHours => "Off hours",
            Self::Rebalance => "Rebalance",
            Self::Charge => "Charge",
            Self::Missing => "Missing",
            Self::Decommissioned => "Decommissioned",
        }
    }
}

impl std::fmt::Display for EventTypeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventTypeReason {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|r| r.as_str() == s)
            .copied()
            .ok_or_else(|| VocabularyError::unknown("event type reason", s))
    }
}

/// The operational status of a device.
///
/// Derived, never authoritative: a device's status is always a function of
/// the most recent relevant event, recomputed by `mdx-mapping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    /// Ready for rental.
    Available,
    /// Held by a user reservation.
    Reserved,
    /// In the field but not rentable.
    Unavailable,
    /// Collected out of the field.
    Removed,
    /// On an active trip.
    Trip,
    /// Outside the jurisdiction.
    Elsewhere,
    /// Registered but not yet in service.
    Inactive,
    /// No status-bearing event seen.
    Unknown,
}

/// Total number of device statuses.
pub const DEVICE_STATUS_COUNT: usize = 8;

impl DeviceStatus {
    /// Returns all statuses in canonical order.
    pub fn all() -> &'static [DeviceStatus] {
        &[
            Self::Available,
            Self::Reserved,
            Self::Unavailable,
            Self::Removed,
            Self::Trip,
            Self::Elsewhere,
            Self::Inactive,
            Self::Unknown,
        ]
    }

    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Unavailable => "unavailable",
            Self::Removed => "removed",
            Self::Trip => "trip",
            Self::Elsewhere => "elsewhere",
            Self::Inactive => "inactive",
            Self::Unknown => "unknown",
        }
    }

    /// English display label for presentation layers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Unavailable => "Unavailable",
            Self::Removed => "Removed",
            Self::Trip => "Trip",
            Self::Elsewhere => "Elsewhere",
            Self::Inactive => "Inactive",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceStatus {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|st| st.as_str() == s)
            .copied()
            .ok_or_else(|| VocabularyError::unknown("device status", s))
    }
}

/// Which API surface produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    /// Pushed by the provider to our agency API.
    AgencyApi,
    /// Pulled by us from the provider's API.
    ProviderApi,
}

impl EventSource {
    /// Returns the snake_case string identifier for this source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AgencyApi => "agency_api",
            Self::ProviderApi => "provider_api",
        }
    }
}

impl std::fmt::Display for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventSource {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agency_api" => Ok(Self::AgencyApi),
            "provider_api" => Ok(Self::ProviderApi),
            other => Err(VocabularyError::unknown("event source", other)),
        }
    }
}

/// An event reason in the Provider-dialect vocabulary.
///
/// The provider API carries a single flat `event_type_reason` field; the
/// agency API splits the same information into an event type plus an
/// optional qualifier. `mdx-mapping` owns the translation between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderReason {
    /// Device made available for rental.
    ServiceStart,
    /// User ended a rental.
    UserDropOff,
    /// Rebalancing drop off.
    RebalanceDropOff,
    /// Maintenance drop off.
    MaintenanceDropOff,
    /// Agency drop off.
    AgencyDropOff,
    /// User started a rental.
    UserPickUp,
    /// Device entered maintenance.
    Maintenance,
    /// Battery depleted.
    LowBattery,
    /// Device taken out of service.
    ServiceEnd,
    /// Rebalancing pick up.
    RebalancePickUp,
    /// Maintenance pick up.
    MaintenancePickUp,
    /// Agency pick up.
    AgencyPickUp,
    /// Telemetry received; informational only.
    Telemetry,
    /// Battery fully charged; informational only.
    BatteryCharged,
}

/// Total number of provider reasons.
pub const PROVIDER_REASON_COUNT: usize = 14;

impl ProviderReason {
    /// Returns all provider reasons in canonical order.
    pub fn all() -> &'static [ProviderReason] {
        &[
            Self::ServiceStart,
            Self::UserDropOff,
            Self::RebalanceDropOff,
            Self::MaintenanceDropOff,
            Self::AgencyDropOff,
            Self::UserPickUp,
            Self::Maintenance,
            Self::LowBattery,
            Self::ServiceEnd,
            Self::RebalancePickUp,
            Self::MaintenancePickUp,
            Self::AgencyPickUp,
            Self::Telemetry,
            Self::BatteryCharged,
        ]
    }

    /// Returns the snake_case string identifier for this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceStart => "service_start",
            Self::UserDropOff => "user_drop_off",
            Self::RebalanceDropOff => "rebalance_drop_off",
            Self::MaintenanceDropOff => "maintenance_drop_off",
            Self::AgencyDropOff => "agency_drop_off",
            Self::UserPickUp => "user_pick_up",
            Self::Maintenance => "maintenance",
            Self::LowBattery => "low_battery",
            Self::ServiceEnd => "service_end",
            Self::RebalancePickUp => "rebalance_pick_up",
            Self::MaintenancePickUp => "maintenance_pick_up",
            Self::AgencyPickUp => "agency_pick_up",
            Self::Telemetry => "telemetry",
            Self::BatteryCharged => "battery_charged",
        }
    }
}

impl std::fmt::Display for ProviderReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderReason {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|r| r.as_str() == s)
            .copied()
            .ok_or_else(|| VocabularyError::unknown("provider reason", s))
    }
}
