//! reelctl CLI - paged views over a movie-catalog profile
//!
//! Subcommands:
//! - `page`: show one page of favorites or comments
//! - `remove`: delete an entry and resettle onto a page that still exists
//! - `rename`: change the profile's username
//! - `search`: debounced search-as-you-type over favorites (queries on stdin)
//! - `config`: manage ~/.reelctl/config.toml

use anyhow::Result;
use clap::{Parser, Subcommand};
use reelctl_core::ReelConfig;

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "reelctl",
    author,
    version,
    about = "Browse and edit paged movie-catalog lists from a profile export"
)]
struct Cli {
    /// Enable debug logging (stderr)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one page of favorites or comments
    Page(commands::lists::PageArgs),
    /// Remove an entry, then show the page the view resettles onto
    Remove(commands::lists::RemoveArgs),
    /// Change the profile's username
    Rename(commands::rename::RenameArgs),
    /// Debounced search over favorites; reads queries from stdin
    Search(commands::search::SearchArgs),
    /// Manage reelctl configuration (init, show, path)
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let tracing_config = tracing_setup::TracingConfig {
        debug: cli.debug,
        // A broken config file is reported by the command that needs it.
        default_level: ReelConfig::load().ok().and_then(|c| c.log_level),
    };
    tracing_setup::init(&tracing_config).ok();

    match cli.command {
        Commands::Page(args) => commands::run_page(args)?,
        Commands::Remove(args) => commands::run_remove(args)?,
        Commands::Rename(args) => commands::run_rename(args)?,
        Commands::Search(args) => commands::run_search(args).await?,
        Commands::Config(args) => config::run_config(args)?,
    }
    Ok(())
}
