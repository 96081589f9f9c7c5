//! Error types for dayplan-core.
//!
//! The overlap engine itself is fail-soft and never surfaces these. They
//! belong to the strict parse/validate boundary used by write paths that must
//! reject malformed input before committing it.

use thiserror::Error;

/// Errors from strict wall-clock time parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input was empty or whitespace only
    #[error("time string is empty")]
    Empty,

    /// Input did not match `H:MM` or `H:MM AM/PM`
    #[error("time string '{0}' is not in H:MM or H:MM AM/PM form")]
    Malformed(String),

    /// Hour outside the detected clock form
    #[error("hour {hour} is out of range for {clock}-hour time")]
    HourOutOfRange { hour: u32, clock: u8 },

    /// Minute component above 59
    #[error("minute {0} is out of range (expected 0-59)")]
    MinuteOutOfRange(u32),
}

/// Errors from strict calendar date parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Input was empty or whitespace only
    #[error("date string is empty")]
    Empty,

    /// Input did not parse as a real YYYY-MM-DD date
    #[error("date string '{0}' is not a valid YYYY-MM-DD calendar date")]
    Invalid(String),
}

/// Validation errors for a scheduled item.
///
/// Produced by [`ScheduledItem::validate`](crate::schedule::ScheduledItem::validate),
/// the opt-in hard check for callers that refuse to save incomplete items. The
/// overlap queries never raise these; they treat the same conditions as
/// "currently unscheduled".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Item has no calendar date
    #[error("item has no date")]
    MissingDate,

    /// Date is present but unparseable
    #[error(transparent)]
    Date(#[from] DateParseError),

    /// Item has no start time
    #[error("item has no start time")]
    MissingTime,

    /// Start time is present but unparseable
    #[error(transparent)]
    Time(#[from] TimeParseError),

    /// Duration is present but not a positive number of minutes
    #[error("duration '{0}' is not a positive number of minutes")]
    InvalidDuration(String),
}
