//! JSON export artifact for downloaded backups of every note.

use crate::domain::ProfileNote;
use crate::infra::{FsError, write_atomic};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while producing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode export: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Returns the export file name for a given day, e.g.
/// `linkedin-notes-2024-01-15.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("linkedin-notes-{}.json", date.format("%Y-%m-%d"))
}

/// Encodes notes as the pretty-printed JSON array stored in export files.
pub fn to_json(notes: &[ProfileNote]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(notes)?)
}

/// Writes the export file for `date` into `dir` and returns its path.
pub fn write_export(
    dir: &Path,
    date: NaiveDate,
    notes: &[ProfileNote],
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(date));
    let json = to_json(notes)?;
    write_atomic(&path, json.as_bytes())?;
    tracing::info!(path = %path.display(), notes = notes.len(), "export written");
    Ok(path)
}
