use clap::{Parser, Subcommand};

/// Command-line interface definition for logscope
/// Diagnostic CLI for the log-query console client core
#[derive(Parser)]
#[command(
    name = "logscope",
    version = env!("CARGO_PKG_VERSION"),
    about = "Resolve query time ranges against a logs server and inspect console preferences",
    long_about = None
)]
pub struct Cli {
    /// Override the server base URL from the config file
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    /// Tenant id as "accountID:projectID" (default 0:0)
    #[arg(global = true, long = "tenant")]
    pub tenant: Option<String>,

    /// Override the preference-store file (useful for tests)
    #[arg(global = true, long = "prefs")]
    pub prefs: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the effective time range for a query
    Resolve {
        /// Query text; may embed a _time filter. Empty uses the default query
        #[arg(default_value = "")]
        query: String,

        /// Requested range start (RFC 3339 or unix seconds)
        #[arg(long)]
        start: Option<String>,

        /// Requested range end (RFC 3339 or unix seconds; default: now)
        #[arg(long)]
        end: Option<String>,

        /// Window length in seconds, ending at --end, when --start is omitted
        #[arg(long, default_value_t = 3600)]
        duration: i64,
    },

    /// List tenant account ids known to the server
    Accounts,

    /// Show the server build version
    Version,

    /// Read or write persisted preference flags
    Prefs {
        /// Key to read (defaults to the query time override flag)
        #[arg(long)]
        key: Option<String>,

        /// Write this value instead of reading
        #[arg(long)]
        set: Option<bool>,
    },
}
