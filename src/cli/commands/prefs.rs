use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::prefs::{PreferenceStore, keys};

/// Handle the `prefs` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Prefs { key, set } = &cli.command {
        let key = key.as_deref().unwrap_or(keys::LOGS_OVERRIDE_TIME);
        let store = PreferenceStore::open(cfg.prefs_file());

        if let Some(value) = set {
            store.set_bool(key, *value);
        }

        let default = key == keys::LOGS_OVERRIDE_TIME && keys::LOGS_OVERRIDE_TIME_DEFAULT;
        println!("{key} = {}", store.read_bool(key, default));
    }
    Ok(())
}
