//! # Dayplan Core Library
//!
//! Core scheduling logic for the Dayplan personal organizer: given collections
//! of scheduled items (tasks, routines, reminders), determine which collide in
//! wall-clock time, format schedule labels, and normalize loose recurrence-day
//! representations. All operations are synchronous, pure computations over
//! caller-supplied in-memory collections; the CLI binary is a thin layer over
//! the same functions.
//!
//! ## Key Components
//!
//! - [`ScheduledItem`]: the loosely-typed item record supplied by callers
//! - [`TimeRange`]: wall-clock range derived fresh on each query
//! - [`find_overlapping`] / [`find_all_overlapping_pairs`]: conflict queries
//! - [`routine`]: recurrence-day normalization for repeating routines

pub mod error;
pub mod overlap;
pub mod routine;
pub mod schedule;

pub use error::{DateParseError, TimeParseError, ValidationError};
pub use overlap::{
    find_all_overlapping_pairs, find_overlapping, format_range_label, items_overlap,
    OverlapOptions, OverlapPair, TimeRange,
};
pub use schedule::{DurationValue, ScheduledItem};
