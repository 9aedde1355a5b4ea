//! Time-of-day arithmetic over `HH:MM` strings.
//!
//! All arithmetic happens in total-minutes space and wraps modulo 24 hours.
//! [`minutes_between`] assumes the second time is "later", wrapping once into
//! the next day when the raw difference is negative — it is a single-wrap
//! convenience for same-day/overnight schedules, not a general duration
//! function. Gaps larger than 24 hours are out of its domain.

use crate::error::{EngineError, Result};

/// Games with no recorded end time are assumed to run this long.
pub const DEFAULT_GAME_DURATION_HOURS: f64 = 2.0;

const MINUTES_PER_DAY: i64 = 1440;

/// Parse an `HH:MM` string into minutes since midnight.
///
/// # Errors
/// Returns `EngineError::TimeFormat` when the string is not two `:`-separated
/// numeric fields, or when hours/minutes fall outside 0–23 / 0–59.
pub fn to_minutes(time: &str) -> Result<i64> {
    let bad = |reason: &str| EngineError::TimeFormat {
        input: time.to_string(),
        reason: reason.to_string(),
    };

    let (h, m) = time.split_once(':').ok_or_else(|| bad("expected HH:MM"))?;
    let hours: i64 = h.trim().parse().map_err(|_| bad("hours not numeric"))?;
    let minutes: i64 = m.trim().parse().map_err(|_| bad("minutes not numeric"))?;

    if !(0..24).contains(&hours) {
        return Err(bad("hours out of range 0-23"));
    }
    if !(0..60).contains(&minutes) {
        return Err(bad("minutes out of range 0-59"));
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes-since-midnight as zero-padded `HH:MM`.
fn format_minutes(total: i64) -> String {
    let wrapped = total.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Add `delta` minutes to a time, wrapping modulo 24 hours.
pub fn add_minutes(time: &str, delta: i64) -> Result<String> {
    Ok(format_minutes(to_minutes(time)? + delta))
}

/// Subtract `delta` minutes from a time. Going below midnight wraps to the
/// previous day.
pub fn subtract_minutes(time: &str, delta: i64) -> Result<String> {
    Ok(format_minutes(to_minutes(time)? - delta))
}

/// Minutes from `a` to `b`. A negative raw difference is interpreted as `b`
/// falling on the following day, so 24 hours are added exactly once.
pub fn minutes_between(a: &str, b: &str) -> Result<i64> {
    let diff = to_minutes(b)? - to_minutes(a)?;
    Ok(if diff < 0 { diff + MINUTES_PER_DAY } else { diff })
}

/// Derive an end time for a window that has none recorded.
pub fn default_end_time(start: &str, duration_hours: f64) -> Result<String> {
    add_minutes(start, (duration_hours * 60.0).round() as i64)
}
