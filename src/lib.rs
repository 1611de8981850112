//! logscope library root.
//! Client core for a log-query console: server-side time-range resolution,
//! canonical period math, and persisted preference sync.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod prefs;
pub mod resolve;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Resolve { .. } => cli::commands::resolve::handle(cli, cfg).await,
        Commands::Accounts => cli::commands::accounts::handle(cli, cfg).await,
        Commands::Version => cli::commands::version::handle(cli, cfg).await,
        Commands::Prefs { .. } => cli::commands::prefs::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply command-line overrides.
    let mut cfg = Config::load();
    if let Some(server) = &cli.server {
        cfg.server_url = server.clone();
    }
    if let Some(prefs) = &cli.prefs {
        cfg.prefs_file = Some(prefs.clone());
    }

    dispatch(&cli, &cfg).await
}
