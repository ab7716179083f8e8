//! List and count command handlers.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

use super::{open_repository, parse_tags, truncate_str};
use crate::cli::date_filter::DateFilter;
use crate::cli::output::{Output, OutputFormat, time_ago};
use crate::cli::ListArgs;
use crate::domain::Tag;
use crate::index::EntryQuery;

pub fn handle_list(args: &ListArgs, db_path: &Path) -> Result<()> {
    let now = Utc::now();

    let mut query = EntryQuery::new();
    if let Some(text) = &args.query {
        query = query.text(text.as_str());
    }
    for tag in parse_tags(&args.tags)? {
        query = query.tag(tag);
    }
    if let Some(modified) = &args.modified {
        let filter = DateFilter::parse(modified, now)
            .map_err(|e| anyhow::anyhow!("invalid --modified filter: {}", e))?;
        query = query.updated_since(filter.threshold());
    }

    let repo = open_repository(db_path)?;
    let entries = repo
        .search(&query)
        .with_context(|| "failed to list notes")?;

    match args.format {
        OutputFormat::Human => {
            if entries.is_empty() {
                println!("No notes found.");
            } else {
                println!("{:<24}  {:<24}  {:>8}  {}", "ID", "Name", "Updated", "Preview");
                println!(
                    "{:<24}  {:<24}  {:>8}  {}",
                    "------------------------",
                    "------------------------",
                    "--------",
                    "-------"
                );

                for entry in &entries {
                    let mut preview = truncate_str(entry.preview(), 40);
                    if !entry.tags().is_empty() {
                        let tags: Vec<_> = entry.tags().iter().map(Tag::as_str).collect();
                        preview = format!("[{}] {}", tags.join(", "), preview);
                    }
                    println!(
                        "{:<24}  {:<24}  {:>8}  {}",
                        truncate_str(entry.profile_id().as_str(), 24),
                        truncate_str(entry.profile_name(), 24),
                        time_ago(entry.updated_at(), now),
                        preview
                    );
                }

                println!();
                println!("{} note(s)", entries.len());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&entries))?);
        }
    }

    Ok(())
}

pub fn handle_count(db_path: &Path) -> Result<()> {
    let repo = open_repository(db_path)?;
    let count = repo.count().with_context(|| "failed to count notes")?;
    println!("{}", count);
    Ok(())
}
