//! linknotes - private notes and tags for LinkedIn profiles

pub mod cli;
pub mod domain;
pub mod export;
pub mod index;
pub mod infra;
pub mod logging;
pub mod repository;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_check, handle_completions, handle_count, handle_export, handle_id, handle_list,
        handle_rm, handle_save, handle_show, handle_tag, handle_tags, handle_untag,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());
    tracing::debug!(db = %db_path.display(), "resolved storage path");

    match &cli.command {
        Command::Id(args) => handle_id(args),
        Command::Show(args) => handle_show(args, &db_path),
        Command::Save(args) => handle_save(args, &db_path),
        Command::Tag(args) => handle_tag(args, &db_path),
        Command::Untag(args) => handle_untag(args, &db_path),
        Command::Rm(args) => handle_rm(args, &db_path),
        Command::List(args) => handle_list(args, &db_path),
        Command::Tags(args) => handle_tags(args, &db_path),
        Command::Count => handle_count(&db_path),
        Command::Export(args) => handle_export(args, &db_path, &config),
        Command::Check => handle_check(&db_path),
        Command::Completions(args) => handle_completions(args),
    }
}
