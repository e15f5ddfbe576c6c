//! Trip counts per month and weekday for the usage charts.
//!
//! Counts are keyed by capitalized names re-derived from each start time and
//! always cover January to June and Monday to Sunday in calendar order, with
//! zero for categories the filters removed.

use crate::constants::{CALENDAR_MONTH_NAMES, SELECTABLE_MONTH_COUNT, WEEKDAY_NAMES};
use crate::models::TripTable;
use chrono::Datelike;
use serde::Serialize;

/// Usage counts in fixed calendar order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageHistogram {
    /// Exactly six entries, January to June
    pub months: Vec<(&'static str, usize)>,
    /// Exactly seven entries, Monday to Sunday
    pub days: Vec<(&'static str, usize)>,
}

impl UsageHistogram {
    pub fn month_count(&self, month: &str) -> Option<usize> {
        lookup(&self.months, month)
    }

    pub fn day_count(&self, day: &str) -> Option<usize> {
        lookup(&self.days, day)
    }
}

fn lookup(entries: &[(&'static str, usize)], key: &str) -> Option<usize> {
    entries
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, count)| *count)
}

/// Count trips per month and weekday. Never fails: an empty table yields zeros.
pub fn usage_histogram(table: &TripTable) -> UsageHistogram {
    let mut month_counts = [0usize; SELECTABLE_MONTH_COUNT];
    let mut day_counts = [0usize; 7];

    for record in table.records() {
        let month_index = record.start_time.month0() as usize;
        // months outside January-June are not charted
        if let Some(slot) = month_counts.get_mut(month_index) {
            *slot += 1;
        }
        day_counts[record.start_time.weekday().num_days_from_monday() as usize] += 1;
    }

    UsageHistogram {
        months: CALENDAR_MONTH_NAMES
            .iter()
            .copied()
            .zip(month_counts)
            .collect(),
        days: WEEKDAY_NAMES.iter().copied().zip(day_counts).collect(),
    }
}

/// Bar length for `count`, scaled linearly so `max` fills `width`
pub fn scaled_bar_length(count: usize, max: usize, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    (count as f64 / max as f64 * width as f64) as usize
}
