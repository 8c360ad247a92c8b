//! # Mapping-Table Consistency Validation
//!
//! Startup and CI-time verification that the static tables are mutually
//! consistent: round-trips are the identity, the migration is idempotent
//! and invertible, and every table is total over its declared domain.
//!
//! A violation means the tables have drifted from the vocabularies. That
//! is fatal configuration corruption: a process serving traffic with an
//! inconsistent vocabulary would silently misreport device status for an
//! entire provider, so callers must refuse to start instead.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use mdx_core::{CanonicalEventKey, ProviderReason};

use crate::migration::{demote_to_legacy, migrate_legacy_key};
use crate::tables;

/// A single inconsistency found while walking the mapping tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyViolation {
    /// A source slice lists the same key twice.
    #[error("{table}: duplicate entry for {entry}")]
    DuplicateEntry {
        /// Table name.
        table: &'static str,
        /// The duplicated key, rendered.
        entry: String,
    },

    /// An inbound result has no outbound entry at all.
    #[error("{dialect} outbound table is missing key {key} (from reason {reason})")]
    MissingOutbound {
        /// "current" or "legacy".
        dialect: &'static str,
        /// The inbound reason whose key is unmapped.
        reason: ProviderReason,
        /// The unmapped key.
        key: CanonicalEventKey,
    },

    /// Composing inbound then outbound did not return the original reason.
    #[error("{dialect} round trip broken: {reason} -> {key} -> {resolved}")]
    BrokenRoundTrip {
        /// "current" or "legacy".
        dialect: &'static str,
        /// The original provider reason.
        reason: ProviderReason,
        /// The canonical key it translated to.
        key: CanonicalEventKey,
        /// The reason the outbound table resolved instead.
        resolved: ProviderReason,
    },

    /// Migrating the legacy inbound result disagrees with the current
    /// inbound result for the same reason.
    #[error("migration diverges for {reason}: migrated {migrated}, current table says {current}")]
    MigrationDivergence {
        /// The provider reason in both inbound domains.
        reason: ProviderReason,
        /// Legacy inbound result after migration.
        migrated: CanonicalEventKey,
        /// Current inbound result.
        current: CanonicalEventKey,
    },

    /// Applying the migration to a key it should fix did not stabilize.
    #[error("migration not idempotent at {key}: once {once}, twice {twice}")]
    MigrationNotIdempotent {
        /// The starting key.
        key: CanonicalEventKey,
        /// Result of one application.
        once: CanonicalEventKey,
        /// Result of two applications.
        twice: CanonicalEventKey,
    },

    /// A migration table pair does not round-trip through the inverse.
    #[error("migration not invertible for ({old}, {new}): demote(migrate) = {got}")]
    MigrationNotInvertible {
        /// Legacy side of the pair.
        old: CanonicalEventKey,
        /// Current side of the pair.
        new: CanonicalEventKey,
        /// What the round trip produced.
        got: CanonicalEventKey,
    },

    /// A provider reason that must be translatable has no inbound entry.
    #[error("{table} is missing provider reason {reason}")]
    IncompleteDomain {
        /// Table name.
        table: &'static str,
        /// The uncovered reason.
        reason: ProviderReason,
    },

    /// An informational reason leaked into a translation table.
    #[error("{table} must not contain informational reason {reason}")]
    UnexpectedEntry {
        /// Table name.
        table: &'static str,
        /// The offending reason.
        reason: ProviderReason,
    },
}

/// Every violation found in one validation pass.
///
/// The validator walks all tables before reporting, so one run surfaces
/// the full drift rather than the first symptom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// The violations, in table-walk order.
    pub violations: Vec<ConsistencyViolation>,
}

impl std::error::Error for ConsistencyReport {}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} mapping table violation(s):", self.violations.len())?;
        for violation in &self.violations {
            writeln!(f, "  - {violation}")?;
        }
        Ok(())
    }
}

/// Walk every mapping table and verify the declared invariants.
///
/// Returns `Ok(())` when the tables are mutually consistent; otherwise
/// the full list of violations. Run once at process startup (refuse to
/// serve on `Err`) and in CI.
pub fn check_consistency() -> Result<(), ConsistencyReport> {
    let mut violations = Vec::new();

    check_duplicates(&mut violations);
    check_round_trip_current(&mut violations);
    check_round_trip_legacy(&mut violations);
    check_migration_matches_current(&mut violations);
    check_migration_idempotent(&mut violations);
    check_migration_invertible(&mut violations);
    check_domain_totality(&mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ConsistencyReport { violations })
    }
}

fn check_duplicates(violations: &mut Vec<ConsistencyViolation>) {
    fn walk<K: Eq + std::hash::Hash + ToString, V>(
        table: &'static str,
        entries: &[(K, V)],
        violations: &mut Vec<ConsistencyViolation>,
    ) {
        let mut seen = HashSet::new();
        for (key, _) in entries {
            if !seen.insert(key) {
                violations.push(ConsistencyViolation::DuplicateEntry {
                    table,
                    entry: key.to_string(),
                });
            }
        }
    }

    walk(
        "provider_reason_to_agency_event",
        tables::PROVIDER_REASON_TO_AGENCY_EVENT,
        violations,
    );
    walk(
        "agency_event_to_provider_reason",
        tables::AGENCY_EVENT_TO_PROVIDER_REASON,
        violations,
    );
    walk(
        "legacy_provider_reason_to_agency_event",
        tables::LEGACY_PROVIDER_REASON_TO_AGENCY_EVENT,
        violations,
    );
    walk(
        "legacy_agency_event_to_provider_reason",
        tables::LEGACY_AGENCY_EVENT_TO_PROVIDER_REASON,
        violations,
    );
    walk(
        "legacy_to_current_agency_event",
        tables::LEGACY_TO_CURRENT_AGENCY_EVENT,
        violations,
    );
}

/// Outbound after inbound must be the identity on the current domain.
fn check_round_trip_current(violations: &mut Vec<ConsistencyViolation>) {
    for (reason, key) in tables::PROVIDER_REASON_TO_AGENCY_EVENT {
        match crate::translate::agency_event_to_provider_reason(key) {
            Ok(resolved) if resolved == *reason => {}
            Ok(resolved) => violations.push(ConsistencyViolation::BrokenRoundTrip {
                dialect: "current",
                reason: *reason,
                key: *key,
                resolved,
            }),
            Err(_) => violations.push(ConsistencyViolation::MissingOutbound {
                dialect: "current",
                reason: *reason,
                key: *key,
            }),
        }
    }
}

/// Same identity over the legacy tables.
fn check_round_trip_legacy(violations: &mut Vec<ConsistencyViolation>) {
    for (reason, key) in tables::LEGACY_PROVIDER_REASON_TO_AGENCY_EVENT {
        match crate::translate::legacy_agency_event_to_provider_reason(key) {
            Ok(resolved) if resolved == *reason => {}
            Ok(resolved) => violations.push(ConsistencyViolation::BrokenRoundTrip {
                dialect: "legacy",
                reason: *reason,
                key: *key,
                resolved,
            }),
            Err(_) => violations.push(ConsistencyViolation::MissingOutbound {
                dialect: "legacy",
                reason: *reason,
                key: *key,
            }),
        }
    }
}

/// Migrating a legacy inbound result must land on the current inbound
/// result for the same provider reason.
fn check_migration_matches_current(violations: &mut Vec<ConsistencyViolation>) {
    for (reason, old_key) in tables::LEGACY_PROVIDER_REASON_TO_AGENCY_EVENT {
        let migrated = migrate_legacy_key(old_key);
        if let Some(current) = tables::provider_to_agency().get(reason) {
            if migrated != *current {
                violations.push(ConsistencyViolation::MigrationDivergence {
                    reason: *reason,
                    migrated,
                    current: *current,
                });
            }
        }
        // A reason missing from the current domain is reported by the
        // totality check, not here.
    }
}

/// Current keys are fixed points; legacy keys stabilize after one step.
fn check_migration_idempotent(violations: &mut Vec<ConsistencyViolation>) {
    for (_, current) in tables::PROVIDER_REASON_TO_AGENCY_EVENT {
        let migrated = migrate_legacy_key(current);
        if migrated != *current {
            violations.push(ConsistencyViolation::MigrationNotIdempotent {
                key: *current,
                once: *current,
                twice: migrated,
            });
        }
    }
    for (old, _) in tables::LEGACY_TO_CURRENT_AGENCY_EVENT {
        let once = migrate_legacy_key(old);
        let twice = migrate_legacy_key(&once);
        if once != twice {
            violations.push(ConsistencyViolation::MigrationNotIdempotent {
                key: *old,
                once,
                twice,
            });
        }
    }
}

/// Both round trips through the precomputed inverse must restore the
/// original table entry.
fn check_migration_invertible(violations: &mut Vec<ConsistencyViolation>) {
    for (old, new) in tables::LEGACY_TO_CURRENT_AGENCY_EVENT {
        let demoted = demote_to_legacy(&migrate_legacy_key(old));
        if demoted != *old {
            violations.push(ConsistencyViolation::MigrationNotInvertible {
                old: *old,
                new: *new,
                got: demoted,
            });
        }
        let promoted = migrate_legacy_key(&demote_to_legacy(new));
        if promoted != *new {
            violations.push(ConsistencyViolation::MigrationNotInvertible {
                old: *old,
                new: *new,
                got: promoted,
            });
        }
    }
}

/// The current inbound domain must be exactly the provider vocabulary
/// minus the informational set; the legacy domain must not stray outside
/// the current one.
fn check_domain_totality(violations: &mut Vec<ConsistencyViolation>) {
    for reason in ProviderReason::all() {
        let informational = tables::INFORMATIONAL_REASONS.contains(reason);
        let mapped = tables::provider_to_agency().contains_key(reason);
        if informational && mapped {
            violations.push(ConsistencyViolation::UnexpectedEntry {
                table: "provider_reason_to_agency_event",
                reason: *reason,
            });
        }
        if !informational && !mapped {
            violations.push(ConsistencyViolation::IncompleteDomain {
                table: "provider_reason_to_agency_event",
                reason: *reason,
            });
        }
    }

    for (reason, _) in tables::LEGACY_PROVIDER_REASON_TO_AGENCY_EVENT {
        if !tables::provider_to_agency().contains_key(reason) {
            violations.push(ConsistencyViolation::IncompleteDomain {
                table: "provider_reason_to_agency_event",
                reason: *reason,
            });
        }
    }
}
