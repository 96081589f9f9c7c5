//! Derived wall-clock time ranges.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::duration::normalize_duration;
use super::time::parse_time;
use crate::schedule::{parse_date, ScheduledItem};

/// Half-open wall-clock interval derived from a scheduled item.
///
/// Built fresh on each query, never persisted. Times are naive: the item's
/// date and time are taken as local wall-clock values with no timezone
/// conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    /// Minutes past midnight of the start (0-1439)
    pub start_minutes: u32,
    /// Minutes past midnight of the end; exceeds 1439 when the range crosses
    /// midnight
    pub end_minutes: u32,
}

impl TimeRange {
    /// Build the range for an item.
    ///
    /// `None` when the item has no date or time, or either fails to parse.
    /// Such items are treated as unscheduled, not as errors, and take no part
    /// in overlap computation.
    pub fn for_item(item: &ScheduledItem, fallback_minutes: u32) -> Option<Self> {
        let date = parse_date(item.date.as_deref()?).ok()?;
        let start_minutes = parse_time(item.time.as_deref()?).ok()?;
        let duration = normalize_duration(item.duration_minutes.as_ref(), fallback_minutes);

        let midnight = date.and_hms_opt(0, 0, 0)?;
        let start_at = midnight + Duration::minutes(i64::from(start_minutes));
        let end_at = start_at + Duration::minutes(i64::from(duration));

        Some(Self {
            start_at,
            end_at,
            start_minutes,
            end_minutes: start_minutes + duration,
        })
    }

    /// Duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_at - self.start_at).num_minutes()
    }

    /// Half-open intersection test. Touching endpoints, one range ending
    /// exactly when the other starts, do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_at < other.end_at && other.start_at < self.end_at
    }
}
