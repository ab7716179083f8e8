//! Tag command handlers (tags, tag, untag).

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_repository, parse_profile, parse_tags, report_outcome, snapshot_for};
use crate::cli::output::{Output, OutputFormat, TagListing};
use crate::cli::{TagArgs, TagsArgs, UntagArgs};

pub fn handle_tags(args: &TagsArgs, db_path: &Path) -> Result<()> {
    let repo = open_repository(db_path)?;

    let listings: Vec<TagListing> = if args.counts {
        repo.tag_counts()
            .with_context(|| "failed to list tags")?
            .iter()
            .map(|t| TagListing {
                name: t.tag().to_string(),
                count: Some(t.count()),
            })
            .collect()
    } else {
        repo.list_all_tags()
            .with_context(|| "failed to list tags")?
            .iter()
            .map(|t| TagListing {
                name: t.to_string(),
                count: None,
            })
            .collect()
    };

    match args.format {
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No tags found.");
            }
            for t in &listings {
                match t.count {
                    Some(count) => println!("{} ({})", t.name, count),
                    None => println!("{}", t.name),
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}

pub fn handle_tag(args: &TagArgs, db_path: &Path) -> Result<()> {
    let id = parse_profile(&args.profile)?;
    let tags = parse_tags(&args.tags)?;
    let repo = open_repository(db_path)?;

    let stored = repo
        .get(&id)
        .with_context(|| format!("failed to read note for {}", id))?;
    let snapshot = snapshot_for(id.clone(), stored.as_ref(), None, None);

    let outcome = repo
        .add_tags(&snapshot, &tags)
        .with_context(|| format!("failed to tag {}", id))?;

    report_outcome(&id, &outcome);
    Ok(())
}

pub fn handle_untag(args: &UntagArgs, db_path: &Path) -> Result<()> {
    let id = parse_profile(&args.profile)?;
    let tags = parse_tags(&args.tags)?;
    let repo = open_repository(db_path)?;

    let Some(stored) = repo
        .get(&id)
        .with_context(|| format!("failed to read note for {}", id))?
    else {
        println!("No note saved for {}", id);
        return Ok(());
    };
    let snapshot = snapshot_for(id.clone(), Some(&stored), None, None);

    let outcome = repo
        .remove_tags(&snapshot, &tags)
        .with_context(|| format!("failed to untag {}", id))?;

    report_outcome(&id, &outcome);
    Ok(())
}
