//! # mdx-cli — Operational Checks for the Mobility Data Exchange
//!
//! Subcommand handlers live here; `main.rs` only assembles and
//! dispatches. The `vocab` module hosts the mapping-table consistency
//! gate run at deploy time and in CI.

pub mod vocab;
