//! Routine recurrence-day normalization.
//!
//! Routines store their recurrence days the way the organizer app recorded
//! them: weekday indices (0=Sun .. 6=Sat) or day-name strings, full or
//! abbreviated, in any case. Normalization canonicalizes these to
//! [`chrono::Weekday`], skipping anything unrecognizable, so a routine saved
//! as `["mon", "Wednesday", 5]` and one saved as `[1, 3, "fri"]` schedule
//! identically.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A recurrence day as supplied by callers: index or name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayValue {
    Index(u8),
    Name(String),
}

impl From<u8> for DayValue {
    fn from(index: u8) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for DayValue {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Canonicalize one recurrence day.
///
/// `None` for out-of-range indices or unknown names; fail-soft like the rest
/// of the engine.
pub fn normalize_day(value: &DayValue) -> Option<Weekday> {
    match value {
        DayValue::Index(index) => match index {
            0 => Some(Weekday::Sun),
            1 => Some(Weekday::Mon),
            2 => Some(Weekday::Tue),
            3 => Some(Weekday::Wed),
            4 => Some(Weekday::Thu),
            5 => Some(Weekday::Fri),
            6 => Some(Weekday::Sat),
            _ => None,
        },
        DayValue::Name(name) => match name.trim().to_ascii_lowercase().as_str() {
            "sun" | "sunday" => Some(Weekday::Sun),
            "mon" | "monday" => Some(Weekday::Mon),
            "tue" | "tues" | "tuesday" => Some(Weekday::Tue),
            "wed" | "wednesday" => Some(Weekday::Wed),
            "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thu),
            "fri" | "friday" => Some(Weekday::Fri),
            "sat" | "saturday" => Some(Weekday::Sat),
            _ => None,
        },
    }
}

/// Canonicalize a recurrence-day list.
///
/// Invalid entries are skipped, duplicates collapse, and the result is
/// ordered Monday first.
pub fn normalize_days(values: &[DayValue]) -> Vec<Weekday> {
    let mut days: Vec<Weekday> = values.iter().filter_map(normalize_day).collect();
    days.sort_by_key(|day| day.num_days_from_monday());
    days.dedup();
    days
}

/// Whether a routine with the given recurrence days occurs on `date`.
///
/// An empty or fully-unrecognizable day list never occurs.
pub fn occurs_on(values: &[DayValue], date: NaiveDate) -> bool {
    let weekday = date.weekday();
    values.iter().filter_map(normalize_day).any(|day| day == weekday)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_use_sunday_first_convention() {
        assert_eq!(normalize_day(&DayValue::Index(0)), Some(Weekday::Sun));
        assert_eq!(normalize_day(&DayValue::Index(6)), Some(Weekday::Sat));
        assert_eq!(normalize_day(&DayValue::Index(7)), None);
    }

    #[test]
    fn names_accept_abbreviations_and_any_case() {
        assert_eq!(normalize_day(&"Monday".into()), Some(Weekday::Mon));
        assert_eq!(normalize_day(&"mon".into()), Some(Weekday::Mon));
        assert_eq!(normalize_day(&"TUES".into()), Some(Weekday::Tue));
        assert_eq!(normalize_day(&" thurs ".into()), Some(Weekday::Thu));
        assert_eq!(normalize_day(&"someday".into()), None);
    }

    #[test]
    fn normalize_days_dedups_and_orders_monday_first() {
        let days = normalize_days(&["fri".into(), 1u8.into(), "Monday".into(), "nope".into()]);
        assert_eq!(days, [Weekday::Mon, Weekday::Fri]);

        let sunday_last = normalize_days(&[0u8.into(), 1u8.into()]);
        assert_eq!(sunday_last, [Weekday::Mon, Weekday::Sun]);
    }

    #[test]
    fn occurs_on_matches_the_calendar_weekday() {
        // 2024-01-01 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(occurs_on(&["mon".into()], monday));
        assert!(occurs_on(&[1u8.into()], monday));
        assert!(!occurs_on(&["tue".into()], monday));
        assert!(!occurs_on(&[], monday));
        assert!(!occurs_on(&["nope".into()], monday));
    }

    #[test]
    fn mixed_representations_schedule_identically() {
        let by_name = normalize_days(&["mon".into(), "Wednesday".into(), 5u8.into()]);
        let by_index = normalize_days(&[1u8.into(), 3u8.into(), "fri".into()]);
        assert_eq!(by_name, by_index);
    }

    #[test]
    fn day_value_deserializes_from_number_or_string() {
        let values: Vec<DayValue> = serde_json::from_str(r#"[1, "fri", "Sunday"]"#).unwrap();
        assert_eq!(
            normalize_days(&values),
            [Weekday::Mon, Weekday::Fri, Weekday::Sun]
        );
    }
}
