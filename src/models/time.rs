//! Time types shared by the resolution pipeline.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// A point in time. UTC internally; server strings are parsed, never coerced.
pub type TimeInstant = DateTime<Utc>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimePeriod {
    pub start: TimeInstant,
    pub end: TimeInstant,
}

impl TimePeriod {
    pub fn new(start: TimeInstant, end: TimeInstant) -> Self {
        Self { start, end }
    }
}

/// Wire reply of the `query_time_range` endpoint.
/// `hasTimeFilter` reports whether the query text itself constrained time.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTimeRange {
    pub start: String,
    pub end: String,
    #[serde(rename = "hasTimeFilter")]
    pub has_time_filter: bool,
}

/// Final output of one resolution: a canonical period plus the time-filter flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedPeriod {
    pub start: TimeInstant,
    pub end: TimeInstant,
    pub has_time_filter: bool,
}

impl ResolvedPeriod {
    pub fn period(&self) -> TimePeriod {
        TimePeriod::new(self.start, self.end)
    }
}

/// Parse a server-supplied instant. RFC 3339 first; servers occasionally omit
/// the zone suffix, in which case the value is taken as UTC.
pub fn parse_instant(s: &str) -> AppResult<TimeInstant> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    Err(AppError::InvalidDate(s.to_string()))
}
