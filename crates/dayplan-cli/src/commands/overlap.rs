//! Overlap commands over JSON item files.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde::Serialize;
use uuid::Uuid;

use dayplan_core::overlap::{
    find_all_overlapping_pairs, find_overlapping, format_range_label, OverlapOptions,
};
use dayplan_core::schedule::ScheduledItem;

#[derive(Subcommand)]
pub enum OverlapAction {
    /// Check a candidate item against the list (pre-write conflict check)
    Check {
        /// JSON file holding an array of scheduled items
        #[arg(long)]
        file: PathBuf,
        /// Use an existing item from the file as the candidate
        #[arg(long, conflicts_with_all = ["date", "time"])]
        id: Option<String>,
        /// Candidate date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Candidate start time (HH:MM or H:MM AM/PM)
        #[arg(long)]
        time: Option<String>,
        /// Candidate duration in minutes
        #[arg(long)]
        duration: Option<u32>,
        /// Candidate title
        #[arg(long, default_value = "Untitled")]
        title: String,
        /// Count completed items as conflicts
        #[arg(long)]
        include_completed: bool,
        /// Fallback duration for items without one
        #[arg(long, default_value = "30")]
        fallback_duration: u32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List every overlapping pair in the file
    Scan {
        /// JSON file holding an array of scheduled items
        #[arg(long)]
        file: PathBuf,
        /// Count completed items as conflicts
        #[arg(long)]
        include_completed: bool,
        /// Fallback duration for items without one
        #[arg(long, default_value = "30")]
        fallback_duration: u32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the schedule label for each item
    Label {
        /// JSON file holding an array of scheduled items
        #[arg(long)]
        file: PathBuf,
        /// Only the item with this id
        #[arg(long)]
        id: Option<String>,
        /// Fallback duration for items without one
        #[arg(long, default_value = "30")]
        fallback_duration: u32,
    },
    /// Strictly validate every item in the file
    Validate {
        /// JSON file holding an array of scheduled items
        #[arg(long)]
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ValidationFailure {
    id: String,
    title: String,
    error: String,
}

fn load_items(path: &Path) -> Result<Vec<ScheduledItem>, Box<dyn std::error::Error>> {
    let file = std::fs::File::open(path)
        .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
    let items = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(items)
}

pub fn run(action: OverlapAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        OverlapAction::Check {
            file,
            id,
            date,
            time,
            duration,
            title,
            include_completed,
            fallback_duration,
            json,
        } => {
            let items = load_items(&file)?;

            let candidate = match id {
                Some(id) => items
                    .iter()
                    .find(|item| item.id == id)
                    .cloned()
                    .ok_or_else(|| format!("no item with id '{id}' in {}", file.display()))?,
                None => {
                    let mut candidate = ScheduledItem::new(Uuid::new_v4().to_string(), title);
                    candidate.date = date;
                    candidate.time = time;
                    candidate.duration_minutes = duration.map(Into::into);
                    candidate
                }
            };

            let options = OverlapOptions::new()
                .with_include_completed(include_completed)
                .with_fallback_duration(fallback_duration);
            let conflicts = find_overlapping(&candidate, &items, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&conflicts)?);
            } else if conflicts.is_empty() {
                println!("no conflicts");
            } else {
                for item in &conflicts {
                    println!("conflict: {} ({})", item.title, format_range_label(item, &options));
                }
            }
        }
        OverlapAction::Scan {
            file,
            include_completed,
            fallback_duration,
            json,
        } => {
            let items = load_items(&file)?;
            let options = OverlapOptions::new()
                .with_include_completed(include_completed)
                .with_fallback_duration(fallback_duration);
            let pairs = find_all_overlapping_pairs(&items, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&pairs)?);
            } else if pairs.is_empty() {
                println!("no overlapping items");
            } else {
                for pair in &pairs {
                    println!(
                        "{} overlaps {} ({} / {})",
                        pair.first.title,
                        pair.second.title,
                        format_range_label(&pair.first, &options),
                        format_range_label(&pair.second, &options),
                    );
                }
            }
        }
        OverlapAction::Label {
            file,
            id,
            fallback_duration,
        } => {
            let items = load_items(&file)?;
            let options = OverlapOptions::new().with_fallback_duration(fallback_duration);

            match id {
                Some(id) => {
                    let item = items
                        .iter()
                        .find(|item| item.id == id)
                        .ok_or_else(|| format!("no item with id '{id}' in {}", file.display()))?;
                    println!("{}", format_range_label(item, &options));
                }
                None => {
                    for item in &items {
                        println!("{}  {}", item.id, format_range_label(item, &options));
                    }
                }
            }
        }
        OverlapAction::Validate { file, json } => {
            let items = load_items(&file)?;
            let failures: Vec<ValidationFailure> = items
                .iter()
                .filter_map(|item| {
                    item.validate().err().map(|e| ValidationFailure {
                        id: item.id.clone(),
                        title: item.title.clone(),
                        error: e.to_string(),
                    })
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&failures)?);
            } else if failures.is_empty() {
                println!("all items valid");
            } else {
                for failure in &failures {
                    println!("{}: {}", failure.id, failure.error);
                }
            }

            if !failures.is_empty() {
                return Err(format!("{} item(s) failed validation", failures.len()).into());
            }
        }
    }
    Ok(())
}
