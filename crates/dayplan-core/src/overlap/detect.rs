//! Overlap detection over scheduled item collections.

use serde::{Deserialize, Serialize};

use super::{OverlapOptions, TimeRange};
use crate::schedule::ScheduledItem;

/// A pair of items whose ranges intersect.
///
/// Carries the derived ranges so callers can render the collision without
/// recomputing ("Standup overlaps Review, 14:00 - 14:30").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapPair {
    pub first: ScheduledItem,
    pub second: ScheduledItem,
    pub first_range: TimeRange,
    pub second_range: TimeRange,
}

/// Pairwise overlap test between two items.
///
/// Conservative: an item that cannot produce a range overlaps nothing.
pub fn items_overlap(a: &ScheduledItem, b: &ScheduledItem, options: &OverlapOptions) -> bool {
    let fallback = options.fallback_duration_minutes;
    match (
        TimeRange::for_item(a, fallback),
        TimeRange::for_item(b, fallback),
    ) {
        (Some(range_a), Some(range_b)) => range_a.overlaps(&range_b),
        _ => false,
    }
}

/// Find every item in `list` that conflicts with `candidate`.
///
/// The pre-write check: run it before committing a create or edit. Completed
/// items are skipped unless `options.include_completed`, as is the item whose
/// id equals `options.exclude_id` (defaulting to the candidate's own id, so
/// re-checking an existing item never conflicts with itself). Matches keep
/// the list's original relative order.
pub fn find_overlapping(
    candidate: &ScheduledItem,
    list: &[ScheduledItem],
    options: &OverlapOptions,
) -> Vec<ScheduledItem> {
    let fallback = options.fallback_duration_minutes;
    let candidate_range = match TimeRange::for_item(candidate, fallback) {
        Some(range) => range,
        None => return Vec::new(),
    };
    let exclude_id = options.exclude_id.as_deref().unwrap_or(&candidate.id);

    list.iter()
        .filter(|item| options.include_completed || !item.completed)
        .filter(|item| item.id != exclude_id)
        .filter_map(|item| TimeRange::for_item(item, fallback).map(|range| (item, range)))
        .filter(|(_, range)| candidate_range.overlaps(range))
        .map(|(item, _)| item.clone())
        .collect()
}

/// Find every overlapping pair in `list`.
///
/// Survivors of the usual filtering are sorted by start and swept: for each
/// item, the forward scan stops at the first later item whose start is at or
/// past the current end, since starts only increase from there. Each true
/// pair is emitted exactly once, in sweep discovery order.
pub fn find_all_overlapping_pairs(
    list: &[ScheduledItem],
    options: &OverlapOptions,
) -> Vec<OverlapPair> {
    let fallback = options.fallback_duration_minutes;

    let mut ranged: Vec<(&ScheduledItem, TimeRange)> = list
        .iter()
        .filter(|item| options.include_completed || !item.completed)
        .filter_map(|item| TimeRange::for_item(item, fallback).map(|range| (item, range)))
        .collect();
    ranged.sort_by_key(|(_, range)| range.start_at);

    let mut pairs = Vec::new();
    for (i, (item_i, range_i)) in ranged.iter().enumerate() {
        for (item_j, range_j) in &ranged[i + 1..] {
            if range_j.start_at >= range_i.end_at {
                break;
            }
            if range_i.overlaps(range_j) {
                pairs.push(OverlapPair {
                    first: (*item_i).clone(),
                    second: (*item_j).clone(),
                    first_range: *range_i,
                    second_range: *range_j,
                });
            }
        }
    }
    pairs
}
