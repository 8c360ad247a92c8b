//! # Schema-Revision Migration
//!
//! Translates canonical keys between the legacy (bare event types only)
//! and current (reason-qualified) Agency schema revisions. The two
//! revisions overlap for most event types, so the migration table only
//! lists the refined subset and both directions default to identity.

use mdx_core::CanonicalEventKey;

use crate::tables;

/// Migrate a legacy Agency key to the current schema.
///
/// Table lookup with an identity default: keys without an explicit entry
/// pass through unchanged, which makes the migration total and never
/// failing. Applying it to an already-current key is a no-op; the
/// consistency validator enforces this idempotence.
pub fn migrate_legacy_key(old_key: &CanonicalEventKey) -> CanonicalEventKey {
    tables::legacy_to_current()
        .get(old_key)
        .copied()
        .unwrap_or(*old_key)
}

/// Demote a current Agency key to its legacy predecessor.
///
/// Fiber-wise inverse of [`migrate_legacy_key`] over a precomputed
/// reverse table; a key with no legacy predecessor returns as-is, since
/// it may have been introduced without a legacy ancestor.
pub fn demote_to_legacy(key: &CanonicalEventKey) -> CanonicalEventKey {
    tables::current_to_legacy()
        .get(key)
        .copied()
        .unwrap_or(*key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdx_core::{EventType, EventTypeReason};

    #[test]
    fn test_rebalance_drop_off_migrates() {
        let old = CanonicalEventKey::bare(EventType::RebalanceDropOff);
        let new = migrate_legacy_key(&old);
        assert_eq!(new, CanonicalEventKey::bare(EventType::ProviderDropOff));
        // Migrating a current key again changes nothing.
        assert_eq!(migrate_legacy_key(&new), new);
    }

    #[test]
    fn test_unlisted_key_passes_through() {
        let key = CanonicalEventKey::bare(EventType::Register);
        assert_eq!(migrate_legacy_key(&key), key);
        assert_eq!(demote_to_legacy(&key), key);
    }

    #[test]
    fn test_demote_qualified_key() {
        let current =
            CanonicalEventKey::with_reason(EventType::ProviderPickUp, EventTypeReason::Rebalance);
        assert_eq!(
            demote_to_legacy(&current),
            CanonicalEventKey::bare(EventType::RebalancePickUp)
        );
    }

    #[test]
    fn test_round_trips_over_table() {
        for (old, new) in tables::LEGACY_TO_CURRENT_AGENCY_EVENT {
            assert_eq!(demote_to_legacy(&migrate_legacy_key(old)), *old);
            assert_eq!(migrate_legacy_key(&demote_to_legacy(new)), *new);
        }
    }
}
