//! Task overlap engine.
//!
//! Determines which scheduled items collide in wall-clock time:
//! - Duration normalization and time-string parsing
//! - Range building from loose item records
//! - Pairwise, candidate-vs-list, and whole-list overlap queries
//! - Display labels for schedule entries
//!
//! Everything here is fail-soft. An item that cannot produce a range (missing
//! or unparseable date or time) is treated as unscheduled and never appears in
//! a result; the queries are best-effort advisories, not a validating layer.

mod detect;
mod duration;
mod format;
mod range;
mod time;

pub use detect::{find_all_overlapping_pairs, find_overlapping, items_overlap, OverlapPair};
pub use duration::{
    normalize_duration, DEFAULT_FALLBACK_MINUTES, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};
pub use format::{format_duration_label, format_range_label};
pub use range::TimeRange;
pub use time::{format_minutes, parse_time, parse_time_to_minutes};

use serde::{Deserialize, Serialize};

/// Options shared by the overlap queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapOptions {
    /// Item id to skip when scanning a list. Defaults to the candidate's own
    /// id so re-checking an existing item never conflicts with itself.
    pub exclude_id: Option<String>,
    /// Count completed items as conflicts
    pub include_completed: bool,
    /// Duration substituted for items without a usable one
    pub fallback_duration_minutes: u32,
}

impl Default for OverlapOptions {
    fn default() -> Self {
        Self {
            exclude_id: None,
            include_completed: false,
            fallback_duration_minutes: DEFAULT_FALLBACK_MINUTES,
        }
    }
}

impl OverlapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the item with this id instead of the candidate's own.
    pub fn with_exclude_id(mut self, id: impl Into<String>) -> Self {
        self.exclude_id = Some(id.into());
        self
    }

    /// Count completed items as conflicts.
    pub fn with_include_completed(mut self, include: bool) -> Self {
        self.include_completed = include;
        self
    }

    /// Set the fallback duration in minutes.
    pub fn with_fallback_duration(mut self, minutes: u32) -> Self {
        self.fallback_duration_minutes = minutes;
        self
    }
}
