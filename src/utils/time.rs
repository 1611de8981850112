//! Pure time math: period durations, snap steps, canonical re-anchoring.
//! No I/O, no clock reads; everything is derived from the arguments.

use chrono::{DateTime, Duration, Utc};

use crate::models::time::{TimeInstant, TimePeriod};

/// Snap step (seconds) by period duration: anchors of short ranges keep
/// second precision, long ranges land on coarser boundaries.
/// Entries are `(duration_below, step)`.
const SNAP_STEPS: &[(i64, i64)] = &[
    (5 * 60, 1),        // < 5m → 1s
    (60 * 60, 10),      // < 1h → 10s
    (24 * 60 * 60, 60), // < 1d → 1m
];
const MAX_SNAP_STEP: i64 = 300; // >= 1d → 5m

/// `end - start` in seconds. Negative when the caller hands a reversed
/// period; that is a defect to surface upstream, not to clamp here.
pub fn duration_from_period(period: &TimePeriod) -> i64 {
    (period.end - period.start).num_seconds()
}

pub fn snap_step(duration: i64) -> i64 {
    for &(limit, step) in SNAP_STEPS {
        if duration < limit {
            return step;
        }
    }
    MAX_SNAP_STEP
}

/// Floor an instant's unix-second value to a multiple of `step` (sub-second
/// precision is dropped). Flooring twice yields the same instant, so
/// snapping is idempotent.
pub fn snap_instant(instant: TimeInstant, step: i64) -> TimeInstant {
    let secs = instant.timestamp();
    let snapped = secs - secs.rem_euclid(step.max(1));
    DateTime::<Utc>::from_timestamp(snapped, 0).unwrap_or(instant)
}

/// Canonical period of length `duration` ending at the snapped anchor.
/// The length is preserved exactly; only the anchor moves, so
/// `period_for_duration(duration_from_period(p), p.end)` keeps p's duration.
pub fn period_for_duration(duration: i64, anchor: TimeInstant) -> TimePeriod {
    let end = snap_instant(anchor, snap_step(duration));
    let start = end - Duration::seconds(duration);
    TimePeriod::new(start, end)
}

/// Render a duration as a compact label: "45s", "15m", "3h", "2d".
pub fn format_duration(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    if s != 0 && s % 86_400 == 0 {
        format!("{sign}{}d", s / 86_400)
    } else if s != 0 && s % 3_600 == 0 {
        format!("{sign}{}h", s / 3_600)
    } else if s != 0 && s % 60 == 0 {
        format!("{sign}{}m", s / 60)
    } else {
        format!("{sign}{s}s")
    }
}
