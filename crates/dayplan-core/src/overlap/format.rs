//! Display labels for schedule entries.

use super::duration::normalize_duration;
use super::time::format_minutes;
use super::{OverlapOptions, TimeRange};
use crate::schedule::ScheduledItem;

/// Render a duration in minutes as `"Xh Ym"`, `"Xh"`, or `"Ym"` depending on
/// which components are nonzero.
pub fn format_duration_label(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Human-readable schedule label for an item. Never fails.
///
/// With a buildable range: `"09:00 - 10:30 | 1h 30m"`. Without one, falls
/// back to the raw time string (if present) plus the duration label, or just
/// the duration label.
pub fn format_range_label(item: &ScheduledItem, options: &OverlapOptions) -> String {
    let duration = normalize_duration(
        item.duration_minutes.as_ref(),
        options.fallback_duration_minutes,
    );
    let duration_label = format_duration_label(duration);

    match TimeRange::for_item(item, options.fallback_duration_minutes) {
        Some(range) => format!(
            "{} - {} | {}",
            format_minutes(range.start_minutes),
            format_minutes(range.end_minutes),
            duration_label
        ),
        None => match item.time.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(time) => format!("{time} | {duration_label}"),
            None => duration_label,
        },
    }
}
