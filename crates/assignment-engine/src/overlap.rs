//! Half-open time-window overlap and travel-gap detection.
//!
//! Windows where one ends exactly when the other starts are NOT overlapping.

use serde::{Deserialize, Serialize};

use crate::clock::{minutes_between, to_minutes};
use crate::error::Result;

/// Minimum gap required between assignments at different locations.
pub const DEFAULT_MIN_TRAVEL_GAP_MINUTES: i64 = 30;

/// A same-day time window in `HH:MM` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Whether two half-open windows overlap.
///
/// Two windows overlap iff `a.start < b.end && b.start < a.end`, which
/// excludes the adjacent case where one ends exactly when the other starts.
pub fn overlaps(a: &TimeWindow, b: &TimeWindow) -> Result<bool> {
    let a_start = to_minutes(&a.start)?;
    let a_end = to_minutes(&a.end)?;
    let b_start = to_minutes(&b.start)?;
    let b_end = to_minutes(&b.end)?;

    Ok(a_start < b_end && b_start < a_end)
}

/// Whether two non-overlapping windows at different locations leave less than
/// `min_gap_minutes` of travel time between them.
///
/// Same-location pairs never conflict (no travel needed), and overlapping
/// pairs are excluded here — overlap is reported separately by [`overlaps`].
/// The gap runs from whichever window ends first to the other's start, via
/// [`minutes_between`] with its single-wrap next-day assumption.
pub fn has_travel_conflict(
    a: &TimeWindow,
    a_location: &str,
    b: &TimeWindow,
    b_location: &str,
    min_gap_minutes: i64,
) -> Result<bool> {
    if a_location == b_location {
        return Ok(false);
    }
    if overlaps(a, b)? {
        return Ok(false);
    }

    let gap = if to_minutes(&a.end)? <= to_minutes(&b.start)? {
        minutes_between(&a.end, &b.start)?
    } else {
        minutes_between(&b.end, &a.start)?
    };

    Ok(gap < min_gap_minutes)
}
