//! Property tests over arbitrary canonical keys.
//!
//! The table-driven suites check the declared domains; these check the
//! totality claims over the whole key space, including keys no table
//! lists.

use proptest::prelude::*;

use mdx_core::{CanonicalEventKey, EventType, EventTypeReason};
use mdx_mapping::{demote_to_legacy, derive_status_for_key, migrate_legacy_key, MappingError};

fn arb_event_type() -> impl Strategy<Value = EventType> {
    proptest::sample::select(EventType::all().to_vec())
}

fn arb_key() -> impl Strategy<Value = CanonicalEventKey> {
    (
        arb_event_type(),
        proptest::option::of(proptest::sample::select(EventTypeReason::all().to_vec())),
    )
        .prop_map(|(event_type, reason)| CanonicalEventKey { event_type, reason })
}

proptest! {
    /// Migration is total and idempotent over the entire key space, not
    /// just the table domain: unlisted keys pass through unchanged and
    /// every result is a fixed point.
    #[test]
    fn migration_is_idempotent_everywhere(key in arb_key()) {
        let once = migrate_legacy_key(&key);
        prop_assert_eq!(migrate_legacy_key(&once), once);
    }

    /// Demotion is also total; demoting then migrating an arbitrary key
    /// either restores the key or lands on its current form.
    #[test]
    fn demote_is_total(key in arb_key()) {
        let legacy = demote_to_legacy(&key);
        let back = migrate_legacy_key(&legacy);
        prop_assert!(back == key || back == migrate_legacy_key(&key));
    }

    /// Status derivation for keys either succeeds or fails with the
    /// status-specific error, never anything else.
    #[test]
    fn status_errors_are_precise(key in arb_key()) {
        match derive_status_for_key(&key) {
            Ok(_) => {}
            Err(MappingError::NoStatusForEvent(k)) => prop_assert_eq!(k, key),
            Err(other) => return Err(TestCaseError::fail(format!("unexpected error: {other}"))),
        }
    }
}
