//! Command handlers for the CLI.

mod completions;
mod export;
mod list;
mod metadata;
mod profile;

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::{ProfileId, ProfileNote, ProfileSnapshot, Tag};
use crate::repository::{NoteRepository, SaveOutcome};
use crate::store::SqliteStore;

// Re-export public items
pub use completions::handle_completions;
pub use export::{handle_check, handle_export};
pub use list::{handle_count, handle_list};
pub use metadata::{handle_tag, handle_tags, handle_untag};
pub use profile::{handle_id, handle_rm, handle_save, handle_show};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the repository backed by the storage database at `db_path`.
pub(crate) fn open_repository(db_path: &Path) -> Result<NoteRepository<SqliteStore>> {
    let store = SqliteStore::open(db_path)
        .with_context(|| format!("failed to open storage at {}", db_path.display()))?;
    Ok(NoteRepository::new(store))
}

/// Parses a profile argument given as a URL or a bare identifier.
pub(crate) fn parse_profile(input: &str) -> Result<ProfileId> {
    ProfileId::resolve(input).with_context(|| format!("invalid profile: {}", input))
}

/// Parses and normalizes tag arguments.
pub(crate) fn parse_tags(inputs: &[String]) -> Result<Vec<Tag>> {
    inputs
        .iter()
        .map(|s| Tag::new(s).with_context(|| format!("invalid tag: {:?}", s)))
        .collect()
}

/// Builds the display snapshot for a profile, preferring explicit values, then
/// what is already stored, then placeholders derived from the identifier.
pub(crate) fn snapshot_for(
    id: ProfileId,
    stored: Option<&ProfileNote>,
    name: Option<&str>,
    url: Option<&str>,
) -> ProfileSnapshot {
    let fallback = ProfileSnapshot::from_id(id);
    let name = name
        .map(str::to_string)
        .or_else(|| stored.map(|n| n.profile_name().to_string()))
        .unwrap_or(fallback.profile_name);
    let url = url
        .map(str::to_string)
        .or_else(|| stored.map(|n| n.profile_url().to_string()))
        .unwrap_or(fallback.profile_url);
    ProfileSnapshot::new(fallback.profile_id, name, url)
}

/// Prints what a save did to the given profile.
pub(crate) fn report_outcome(id: &ProfileId, outcome: &SaveOutcome) {
    match outcome {
        SaveOutcome::Saved(note) => {
            if note.tags().is_empty() {
                println!("Saved note for {}", id);
            } else {
                let tags: Vec<_> = note.tags().iter().map(Tag::as_str).collect();
                println!("Saved note for {} [{}]", id, tags.join(", "));
            }
        }
        SaveOutcome::Removed { existed: true } => {
            println!("Removed note for {} (no notes or tags left)", id)
        }
        SaveOutcome::Removed { existed: false } => println!("Nothing to save for {}", id),
        SaveOutcome::Unchanged(_) => println!("No changes for {}", id),
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
