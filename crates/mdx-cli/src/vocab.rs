//! # Vocab Subcommand
//!
//! Mapping-table consistency checks. A process serving translated events
//! with drifted tables would corrupt reported device status for an
//! entire provider, so deployment gates on this check passing.

use clap::Args;

use mdx_core::{EVENT_TYPE_COUNT, PROVIDER_REASON_COUNT};

/// Arguments for the vocab subcommand.
#[derive(Args, Debug)]
pub struct VocabArgs {
    #[command(subcommand)]
    pub command: VocabCommand,
}

/// Vocabulary operations.
#[derive(clap::Subcommand, Debug)]
pub enum VocabCommand {
    /// Walk every mapping table and verify round-trip, idempotence, and
    /// totality invariants.
    Check {
        /// Also log per-table entry counts.
        #[arg(long)]
        verbose: bool,
    },
}

/// Run the vocab subcommand.
pub fn run(args: VocabArgs) -> anyhow::Result<()> {
    match args.command {
        VocabCommand::Check { verbose } => check(verbose),
    }
}

fn check(verbose: bool) -> anyhow::Result<()> {
    if verbose {
        tracing::info!(
            event_types = EVENT_TYPE_COUNT,
            provider_reasons = PROVIDER_REASON_COUNT,
            inbound_entries = mdx_mapping::tables::PROVIDER_REASON_TO_AGENCY_EVENT.len(),
            outbound_entries = mdx_mapping::tables::AGENCY_EVENT_TO_PROVIDER_REASON.len(),
            migration_entries = mdx_mapping::tables::LEGACY_TO_CURRENT_AGENCY_EVENT.len(),
            "walking mapping tables"
        );
    }

    match mdx_mapping::check_consistency() {
        Ok(()) => {
            tracing::info!("mapping tables are consistent");
            Ok(())
        }
        Err(report) => {
            for violation in &report.violations {
                tracing::error!(%violation, "mapping table violation");
            }
            Err(anyhow::anyhow!(
                "{} mapping table violation(s); refusing to serve with drifted tables",
                report.violations.len()
            ))
        }
    }
}
