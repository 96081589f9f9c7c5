//! Wall-clock time string parsing.
//!
//! Accepts the two forms the organizer app stores: bare 24-hour `H:MM` and
//! 12-hour `H:MM AM/PM` (suffix case-insensitive, space before it optional).

use crate::error::TimeParseError;

/// Minutes in a day.
pub(crate) const MINUTES_PER_DAY: u32 = 1440;

enum Meridiem {
    Am,
    Pm,
}

/// Strictly parse a time-of-day string to minutes past midnight.
///
/// The minute component must be two digits and 0-59 regardless of the hour.
/// No defaulting happens here; fallback policy belongs to the caller.
pub fn parse_time(value: &str) -> Result<u32, TimeParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let upper = trimmed.to_ascii_uppercase();
    let (clock, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), Some(Meridiem::Am))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), Some(Meridiem::Pm))
    } else {
        (upper.as_str(), None)
    };

    let malformed = || TimeParseError::Malformed(trimmed.to_string());
    let (hour_part, minute_part) = clock.split_once(':').ok_or_else(malformed)?;

    if hour_part.is_empty()
        || hour_part.len() > 2
        || !hour_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(malformed());
    }
    if minute_part.len() != 2 || !minute_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }

    let hour: u32 = hour_part.parse().map_err(|_| malformed())?;
    let minute: u32 = minute_part.parse().map_err(|_| malformed())?;

    if minute > 59 {
        return Err(TimeParseError::MinuteOutOfRange(minute));
    }

    let hour = match meridiem {
        None => {
            if hour > 23 {
                return Err(TimeParseError::HourOutOfRange { hour, clock: 24 });
            }
            hour
        }
        Some(meridiem) => {
            if hour < 1 || hour > 12 {
                return Err(TimeParseError::HourOutOfRange { hour, clock: 12 });
            }
            match meridiem {
                Meridiem::Am if hour == 12 => 0,
                Meridiem::Am => hour,
                Meridiem::Pm if hour == 12 => 12,
                Meridiem::Pm => hour + 12,
            }
        }
    };

    Ok(hour * 60 + minute)
}

/// Fail-soft variant of [`parse_time`]: `None` wherever it would error.
pub fn parse_time_to_minutes(value: &str) -> Option<u32> {
    parse_time(value).ok()
}

/// Render minutes past midnight as 24-hour `HH:MM`, wrapping past midnight
/// for range ends that cross into the next day.
pub fn format_minutes(minutes: u32) -> String {
    let wrapped = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}
