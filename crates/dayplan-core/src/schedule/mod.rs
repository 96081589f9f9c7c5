//! Schedule data model: loosely-typed item records as supplied by callers.
//!
//! Items arrive the way the organizer app stores them: dates and times as
//! strings, durations as a number or a numeric string, plus arbitrary extra
//! fields this engine does not interpret. Conversion to typed values happens
//! at the parse boundary (`parse_date` here, time parsing in the overlap
//! module); everything downstream is fail-soft and treats unparseable items
//! as unscheduled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DateParseError, ValidationError};

/// Duration input as it arrives from callers: minutes as a number or as a
/// numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Minutes(f64),
    Text(String),
}

impl DurationValue {
    /// Coerce to a finite number of minutes, if possible.
    pub fn as_minutes(&self) -> Option<f64> {
        let minutes = match self {
            Self::Minutes(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        minutes.is_finite().then_some(minutes)
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for DurationValue {
    fn from(minutes: f64) -> Self {
        Self::Minutes(minutes)
    }
}

impl From<u32> for DurationValue {
    fn from(minutes: u32) -> Self {
        Self::Minutes(f64::from(minutes))
    }
}

impl From<&str> for DurationValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// A scheduled item: task, routine occurrence, or reminder.
///
/// `date`, `time`, and `duration_minutes` stay in their loose external form;
/// a missing or unparseable date/time means the item is unscheduled and takes
/// no part in overlap computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledItem {
    /// Unique identifier within a collection
    pub id: String,
    /// Display title, not used in computation
    pub title: String,
    /// Calendar date as YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Wall-clock start time, 24-hour `HH:MM` or 12-hour `H:MM AM/PM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Duration in minutes; invalid or absent values get a caller fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<DurationValue>,
    /// Completed items are skipped by overlap checks unless the caller opts in
    #[serde(default)]
    pub completed: bool,
    /// Fields the organizer app attaches that this engine ignores
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl ScheduledItem {
    /// Create an unscheduled item.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: None,
            time: None,
            duration_minutes: None,
            completed: false,
            extra: serde_json::json!({}),
        }
    }

    /// Set the calendar date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the start time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Set the duration.
    pub fn with_duration(mut self, value: impl Into<DurationValue>) -> Self {
        self.duration_minutes = Some(value.into());
        self
    }

    /// Mark as completed.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Strict validation for write paths.
    ///
    /// Rejects what the overlap queries would silently exclude: a missing or
    /// unparseable date or time, or a duration that is not a positive number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let date = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(ValidationError::MissingDate)?;
        parse_date(date)?;

        let time = self
            .time
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ValidationError::MissingTime)?;
        crate::overlap::parse_time(time)?;

        if let Some(value) = &self.duration_minutes {
            match value.as_minutes() {
                Some(minutes) if minutes > 0.0 => {}
                _ => return Err(ValidationError::InvalidDuration(value.to_string())),
            }
        }

        Ok(())
    }
}

/// Strictly parse a YYYY-MM-DD calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| DateParseError::Invalid(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serialization_round_trip() {
        let item = ScheduledItem::new("task-1", "Water the plants")
            .with_date("2024-01-01")
            .with_time("09:00")
            .with_duration(45u32);

        let json = serde_json::to_string(&item).unwrap();
        let decoded: ScheduledItem = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn duration_accepts_number_or_string() {
        let from_number: ScheduledItem =
            serde_json::from_str(r#"{"id":"a","title":"A","durationMinutes":25}"#).unwrap();
        let from_string: ScheduledItem =
            serde_json::from_str(r#"{"id":"b","title":"B","durationMinutes":"25"}"#).unwrap();

        assert_eq!(
            from_number.duration_minutes.unwrap().as_minutes(),
            Some(25.0)
        );
        assert_eq!(
            from_string.duration_minutes.unwrap().as_minutes(),
            Some(25.0)
        );
    }

    #[test]
    fn non_numeric_duration_text_coerces_to_none() {
        assert_eq!(DurationValue::from("abc").as_minutes(), None);
        assert_eq!(DurationValue::Minutes(f64::NAN).as_minutes(), None);
        assert_eq!(DurationValue::from(" 45 ").as_minutes(), Some(45.0));
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let json = r#"{"id":"a","title":"A","date":"2024-01-01","time":"09:00","notes":"bring keys"}"#;
        let item: ScheduledItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.extra["notes"], "bring keys");

        let rendered = serde_json::to_string(&item).unwrap();
        let reparsed: ScheduledItem = serde_json::from_str(&rendered).unwrap();
        assert_eq!(reparsed.extra["notes"], "bring keys");
    }

    #[test]
    fn parse_date_accepts_real_dates_only() {
        assert!(parse_date("2024-02-29").is_ok());
        assert_eq!(parse_date(""), Err(DateParseError::Empty));
        assert_eq!(
            parse_date("2023-02-29"),
            Err(DateParseError::Invalid("2023-02-29".to_string()))
        );
        assert_eq!(
            parse_date("not-a-date"),
            Err(DateParseError::Invalid("not-a-date".to_string()))
        );
    }

    #[test]
    fn validate_flags_each_missing_piece() {
        let valid = ScheduledItem::new("a", "A")
            .with_date("2024-01-01")
            .with_time("09:00");
        assert!(valid.validate().is_ok());

        let no_date = ScheduledItem::new("b", "B").with_time("09:00");
        assert_eq!(no_date.validate(), Err(ValidationError::MissingDate));

        let no_time = ScheduledItem::new("c", "C").with_date("2024-01-01");
        assert_eq!(no_time.validate(), Err(ValidationError::MissingTime));

        let bad_duration = ScheduledItem::new("d", "D")
            .with_date("2024-01-01")
            .with_time("09:00")
            .with_duration("soon");
        assert_eq!(
            bad_duration.validate(),
            Err(ValidationError::InvalidDuration("soon".to_string()))
        );

        let negative_duration = ScheduledItem::new("e", "E")
            .with_date("2024-01-01")
            .with_time("09:00")
            .with_duration(-10.0);
        assert!(matches!(
            negative_duration.validate(),
            Err(ValidationError::InvalidDuration(_))
        ));
    }

    #[test]
    fn validate_rejects_blank_date_like_missing() {
        let blank = ScheduledItem::new("a", "A").with_date("   ").with_time("09:00");
        assert_eq!(blank.validate(), Err(ValidationError::MissingDate));
    }
}
