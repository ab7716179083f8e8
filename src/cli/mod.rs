//! CLI command definitions and handlers

pub mod config;
pub mod date_filter;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// linknotes - private notes and tags for LinkedIn profiles
#[derive(Parser, Debug)]
#[command(name = "linknotes", version, about, long_about = None)]
pub struct Cli {
    /// Storage database (overrides config file)
    #[arg(long, global = true, env = "LINKNOTES_DB")]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the profile identifier of a LinkedIn profile URL
    Id(IdArgs),

    /// Show the saved note for a profile
    Show(ShowArgs),

    /// Save notes and tags for a profile (replaces existing notes and tags)
    Save(SaveArgs),

    /// Add tags to a profile's note
    Tag(TagArgs),

    /// Remove tags from a profile's note
    Untag(UntagArgs),

    /// Delete the note for a profile
    Rm(RmArgs),

    /// List saved notes, most recently updated first
    #[command(name = "ls")]
    List(ListArgs),

    /// List all tags
    Tags(TagsArgs),

    /// Print the number of saved notes
    Count,

    /// Export all notes as a JSON file
    Export(ExportArgs),

    /// Remove index entries whose note is missing
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `id` command
#[derive(Parser, Debug)]
pub struct IdArgs {
    /// Profile URL, e.g. https://www.linkedin.com/in/jane-doe/
    pub url: String,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Profile URL or identifier
    pub profile: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `save` command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Profile URL or identifier
    pub profile: String,

    /// Display name of the profile (defaults to the stored name or the identifier)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Profile URL to store (defaults to the canonical profile URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Profile image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Note text (empty text and no tags deletes the note)
    #[arg(short = 'm', long, default_value = "")]
    pub notes: String,

    /// Tag (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `tag` command
#[derive(Parser, Debug)]
pub struct TagArgs {
    /// Profile URL or identifier
    pub profile: String,

    /// Tags to add
    #[arg(required = true)]
    pub tags: Vec<String>,
}

/// Arguments for the `untag` command
#[derive(Parser, Debug)]
pub struct UntagArgs {
    /// Profile URL or identifier
    pub profile: String,

    /// Tags to remove
    #[arg(required = true)]
    pub tags: Vec<String>,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Profile URL or identifier
    pub profile: String,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Search names, notes and tags
    #[arg(short, long)]
    pub query: Option<String>,

    /// Filter by tag (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Filter by update date (YYYY-MM-DD or relative like "7d")
    #[arg(long)]
    pub modified: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show how many profiles carry each tag
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Directory to write the export file into (overrides config file)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
