//! Single-profile command handlers (id, show, save, rm).

use anyhow::{Context, Result, bail};
use chrono::Utc;
use std::path::Path;

use super::{open_repository, parse_profile, parse_tags, report_outcome, snapshot_for};
use crate::cli::output::{Output, OutputFormat, time_ago};
use crate::cli::{IdArgs, RmArgs, SaveArgs, ShowArgs};
use crate::domain::{Tag, extract_profile_id};

pub fn handle_id(args: &IdArgs) -> Result<()> {
    match extract_profile_id(&args.url) {
        Some(id) => {
            println!("{}", id);
            Ok(())
        }
        None => bail!("not a LinkedIn profile URL: {}", args.url),
    }
}

pub fn handle_show(args: &ShowArgs, db_path: &Path) -> Result<()> {
    let id = parse_profile(&args.profile)?;
    let repo = open_repository(db_path)?;

    let Some(note) = repo
        .get(&id)
        .with_context(|| format!("failed to read note for {}", id))?
    else {
        bail!("no note saved for {}", id);
    };

    match args.format {
        OutputFormat::Human => {
            let now = Utc::now();
            println!("{} ({})", note.profile_name(), note.profile_id());
            println!("{}", note.profile_url());
            if !note.tags().is_empty() {
                let tags: Vec<_> = note.tags().iter().map(Tag::as_str).collect();
                println!("Tags: {}", tags.join(", "));
            }
            println!(
                "Updated {} (created {})",
                time_ago(note.updated_at(), now),
                note.created_at().format("%Y-%m-%d")
            );
            if !note.notes().trim().is_empty() {
                println!();
                println!("{}", note.notes());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&note))?);
        }
    }
    Ok(())
}

pub fn handle_save(args: &SaveArgs, db_path: &Path) -> Result<()> {
    let id = parse_profile(&args.profile)?;
    let tags = parse_tags(&args.tags)?;
    let repo = open_repository(db_path)?;

    let stored = repo
        .get(&id)
        .with_context(|| format!("failed to read note for {}", id))?;
    let mut snapshot = snapshot_for(
        id.clone(),
        stored.as_ref(),
        args.name.as_deref(),
        args.url.as_deref(),
    );
    if let Some(image) = &args.image {
        snapshot = snapshot.image_url(image);
    }

    let outcome = repo
        .edit(&snapshot, |note| {
            note.set_notes(args.notes.as_str());
            note.set_tags(tags);
        })
        .with_context(|| format!("failed to save note for {}", id))?;

    report_outcome(&id, &outcome);
    Ok(())
}

pub fn handle_rm(args: &RmArgs, db_path: &Path) -> Result<()> {
    let id = parse_profile(&args.profile)?;
    let repo = open_repository(db_path)?;

    let existed = repo
        .delete(&id)
        .with_context(|| format!("failed to delete note for {}", id))?;

    if existed {
        println!("Deleted note for {}", id);
    } else {
        println!("No note saved for {}", id);
    }
    Ok(())
}
