use reqwest::Client;

use crate::api::fetch_account_ids;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `accounts` subcommand
pub async fn handle(_cli: &Cli, cfg: &Config) -> AppResult<()> {
    let http = Client::new();
    let ids = fetch_account_ids(&http, &cfg.server_url).await?;

    if ids.is_empty() {
        println!("No tenants reported by {}", cfg.server_url);
        return Ok(());
    }
    for id in ids {
        println!("{id}");
    }
    Ok(())
}
