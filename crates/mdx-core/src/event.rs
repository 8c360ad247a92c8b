//! # Canonical Event Keys and Status Event Records
//!
//! The canonical event key is the internal join point between the Agency
//! and Provider dialects and between schema revisions: an event type plus
//! an optional reason qualifier. The legacy Agency schema used bare event
//! types only; the current schema qualifies some of them.
//!
//! ## Invariant
//!
//! `(X, None)` and `(X, Some(r))` are distinct keys. Equality is
//! structural over both fields, and the mapping tables may send them to
//! different outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::vocabulary::{EventSource, EventType, EventTypeReason};

/// A canonical (Agency-dialect) event key: event type plus optional
/// reason qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalEventKey {
    /// The event type.
    pub event_type: EventType,
    /// Optional qualifier; `None` for bare keys.
    pub reason: Option<EventTypeReason>,
}

impl CanonicalEventKey {
    /// A bare key with no reason qualifier.
    pub const fn bare(event_type: EventType) -> Self {
        Self {
            event_type,
            reason: None,
        }
    }

    /// A qualified key.
    pub const fn with_reason(event_type: EventType, reason: EventTypeReason) -> Self {
        Self {
            event_type,
            reason: Some(reason),
        }
    }

    /// True when the key carries a reason qualifier.
    pub fn is_qualified(&self) -> bool {
        self.reason.is_some()
    }
}

impl std::fmt::Display for CanonicalEventKey {
    /// Formats as `event_type` or `event_type/reason`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            Some(reason) => write!(f, "{}/{}", self.event_type, reason),
            None => write!(f, "{}", self.event_type),
        }
    }
}

impl From<EventType> for CanonicalEventKey {
    fn from(event_type: EventType) -> Self {
        Self::bare(event_type)
    }
}

impl From<(EventType, EventTypeReason)> for CanonicalEventKey {
    fn from((event_type, reason): (EventType, EventTypeReason)) -> Self {
        Self::with_reason(event_type, reason)
    }
}

/// A status-bearing event as handed to the event store.
///
/// The store must apply a given `(device_id, recorded_at)` pair at most
/// once, and must persist the event record and the derived device status
/// in the same transaction; this crate only shapes the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// The device the event concerns.
    pub device_id: Uuid,
    /// Provider-reported event time, UTC.
    pub recorded_at: DateTime<Utc>,
    /// Which API surface produced the event.
    pub source: EventSource,
    /// The canonical event key, post-translation.
    pub key: CanonicalEventKey,
}

impl StatusEvent {
    /// Construct a record from an already-canonical key.
    pub fn new(
        device_id: Uuid,
        recorded_at: DateTime<Utc>,
        source: EventSource,
        key: CanonicalEventKey,
    ) -> Self {
        Self {
            device_id,
            recorded_at,
            source,
            key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_and_qualified_are_distinct() {
        let bare = CanonicalEventKey::bare(EventType::ServiceEnd);
        let qualified =
            CanonicalEventKey::with_reason(EventType::ServiceEnd, EventTypeReason::Maintenance);
        assert_ne!(bare, qualified);
        assert!(!bare.is_qualified());
        assert!(qualified.is_qualified());
    }

    #[test]
    fn test_structural_equality() {
        let a = CanonicalEventKey::with_reason(EventType::ProviderPickUp, EventTypeReason::Rebalance);
        let b = CanonicalEventKey::from((EventType::ProviderPickUp, EventTypeReason::Rebalance));
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CanonicalEventKey::bare(EventType::TripEnd).to_string(),
            "trip_end"
        );
        assert_eq!(
            CanonicalEventKey::with_reason(EventType::ServiceEnd, EventTypeReason::LowBattery)
                .to_string(),
            "service_end/low_battery"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let key = CanonicalEventKey::with_reason(EventType::Deregister, EventTypeReason::Missing);
        let json = serde_json::to_string(&key).unwrap();
        let parsed: CanonicalEventKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, parsed);
    }

    #[test]
    fn test_status_event_roundtrip() {
        let event = StatusEvent::new(
            Uuid::new_v4(),
            Utc::now(),
            EventSource::ProviderApi,
            CanonicalEventKey::bare(EventType::TripStart),
        );
        let json = serde_json::to_string(&event).unwrap();
        let parsed: StatusEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }
}
