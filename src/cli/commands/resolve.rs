use chrono::{Duration, Utc};
use tokio_util::sync::CancellationToken;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::tenant::TenantId;
use crate::models::time::{TimeInstant, TimePeriod, parse_instant};
use crate::prefs::{PreferenceStore, StoredFlag, keys};
use crate::resolve::TimeRangeResolver;
use crate::utils::time::{duration_from_period, format_duration};

/// Handle the `resolve` subcommand
pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Resolve {
        query,
        start,
        end,
        duration,
    } = &cli.command
    {
        let now = Utc::now();
        let end_instant = parse_bound(end.as_deref(), now)?;
        let start_instant = match start {
            Some(s) => parse_bound(Some(s), now)?,
            None => end_instant - Duration::seconds(*duration),
        };
        let period = TimePeriod::new(start_instant, end_instant);

        let tenant = match &cli.tenant {
            Some(t) => TenantId::parse(t)?,
            None => TenantId::default(),
        };

        let resolver =
            TimeRangeResolver::new(&cfg.server_url, tenant, cfg.default_query.clone())?;
        let cancel = CancellationToken::new();

        match resolver.resolve(query, period, &cancel).await? {
            Some(resolved) => {
                let length = duration_from_period(&resolved.period());
                println!("start:       {}", resolved.start.to_rfc3339());
                println!("end:         {}", resolved.end.to_rfc3339());
                println!("duration:    {}", format_duration(length));
                println!("time filter: {}", resolved.has_time_filter);

                if resolved.has_time_filter {
                    let store = PreferenceStore::open(cfg.prefs_file());
                    let override_time = StoredFlag::new(
                        store,
                        keys::LOGS_OVERRIDE_TIME,
                        keys::LOGS_OVERRIDE_TIME_DEFAULT,
                    );
                    if !override_time.value() {
                        println!("note: query time override is disabled; the picker range stays in effect");
                    }
                }
            }
            None => println!("resolution superseded or cancelled"),
        }
    }
    Ok(())
}

/// Accept RFC 3339 or bare unix seconds; `None` means now.
fn parse_bound(input: Option<&str>, now: TimeInstant) -> AppResult<TimeInstant> {
    let Some(s) = input else {
        return Ok(now);
    };
    if let Ok(secs) = s.parse::<i64>() {
        return chrono::DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| AppError::InvalidDate(s.to_string()));
    }
    parse_instant(s)
}
