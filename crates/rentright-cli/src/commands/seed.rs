//! Seed command implementation.

use crate::cli::SeedArgs;
use crate::error::Result;
use crate::output::Formatter;
use rentright_store::{seed, SqliteStore};
use std::path::Path;

/// Counts reported after seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Listings written to the database
    pub stored: usize,
    /// Seed entries skipped as malformed
    pub skipped: usize,
    /// Stored listings without WWS data
    pub unassessed: usize,
}

/// Execute the seed command.
pub fn execute_seed(args: SeedArgs, formatter: &Formatter) -> Result<()> {
    let summary = seed_database(&args.file, &args.database)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Seeded {} listing(s) into {}",
            summary.stored,
            args.database.display()
        ))
    );
    if summary.unassessed > 0 {
        println!(
            "{}",
            formatter.info(&format!("{} listing(s) without WWS data", summary.unassessed))
        );
    }
    if summary.skipped > 0 {
        println!(
            "{}",
            formatter.warning(&format!("Skipped {} malformed seed entries", summary.skipped))
        );
    }

    Ok(())
}

/// Replace the database contents with the listings of a seed file.
pub fn seed_database(seed_file: &Path, database: &Path) -> Result<SeedSummary> {
    let report = seed::load_seed_file(seed_file)?;
    let mut store = SqliteStore::new(database)?;
    let stored = store.replace_all(&report.listings)?;

    Ok(SeedSummary {
        stored,
        skipped: report.skipped,
        unassessed: report.unassessed,
    })
}
