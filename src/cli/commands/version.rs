use reqwest::Client;

use crate::api::fetch_version;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `version` subcommand
pub async fn handle(_cli: &Cli, cfg: &Config) -> AppResult<()> {
    let http = Client::new();
    let version = fetch_version(&http, &cfg.server_url).await?;
    println!("server:  {}", cfg.server_url);
    println!("version: {version}");
    Ok(())
}
