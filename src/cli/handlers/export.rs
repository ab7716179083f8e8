//! Export and consistency check handlers.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

use super::open_repository;
use crate::cli::ExportArgs;
use crate::cli::config::Config;
use crate::export::{to_json, write_export};

/// Handle the `export` command.
///
/// Dangling index entries found while exporting are dropped from the index
/// and reported on stderr.
pub fn handle_export(args: &ExportArgs, db_path: &Path, config: &Config) -> Result<()> {
    let repo = open_repository(db_path)?;
    let report = repo
        .export_all()
        .with_context(|| "failed to load notes for export")?;

    if args.stdout {
        println!("{}", to_json(&report.notes)?);
    } else {
        let dir = config.export_dir(args.out.as_ref());
        let path = write_export(&dir, Utc::now().date_naive(), &report.notes)
            .with_context(|| format!("failed to write export into {}", dir.display()))?;
        println!("Exported {} note(s) to {}", report.notes.len(), path.display());
    }

    if report.repaired > 0 {
        eprintln!(
            "Repaired {} index entr{} with no saved note",
            report.repaired,
            if report.repaired == 1 { "y" } else { "ies" }
        );
    }
    Ok(())
}

/// Handle the `check` command.
pub fn handle_check(db_path: &Path) -> Result<()> {
    let repo = open_repository(db_path)?;
    let repaired = repo
        .reconcile()
        .with_context(|| "failed to check the notes index")?;
    let count = repo.count().with_context(|| "failed to count notes")?;

    if repaired == 0 {
        println!("Index OK ({} note(s))", count);
    } else {
        println!(
            "Removed {} dangling index entr{} ({} note(s) remain)",
            repaired,
            if repaired == 1 { "y" } else { "ies" },
            count
        );
    }
    Ok(())
}
