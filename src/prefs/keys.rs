//! Preference keys shared across the console.

/// Replace the time picker's range with the time filter embedded in the
/// query text, when the query has one.
pub const LOGS_OVERRIDE_TIME: &str = "LOGS_OVERRIDE_TIME";
pub const LOGS_OVERRIDE_TIME_DEFAULT: bool = true;
