//! Routine recurrence commands.

use chrono::NaiveDate;
use clap::Subcommand;
use dayplan_core::routine::{normalize_days, occurs_on, DayValue};

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Normalize a recurrence-day list
    Days {
        /// Days as indices (0=Sun .. 6=Sat) or names, comma-separated
        days: String,
    },
    /// Check whether a recurrence-day list includes a date
    Occurs {
        /// Days as indices (0=Sun .. 6=Sat) or names, comma-separated
        days: String,
        /// Date to test (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

fn parse_day_values(csv: &str) -> Vec<DayValue> {
    csv.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<u8>() {
            Ok(index) => DayValue::Index(index),
            Err(_) => DayValue::Name(part.to_string()),
        })
        .collect()
}

pub fn run(action: RoutineAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RoutineAction::Days { days } => {
            let normalized = normalize_days(&parse_day_values(&days));
            let names: Vec<String> = normalized.iter().map(|day| day.to_string()).collect();
            println!("{}", names.join(","));
        }
        RoutineAction::Occurs { days, date } => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
            println!("{}", occurs_on(&parse_day_values(&days), date));
        }
    }
    Ok(())
}
