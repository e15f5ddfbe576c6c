//! Total, mean and minimum trip duration.

use super::ensure_rows;
use crate::error::Result;
use crate::models::TripTable;
use serde::Serialize;
use std::fmt;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Whole hours, minutes and seconds of a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationBreakdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    /// Decompose by floor division; fractional seconds are truncated
    pub fn from_seconds(total: f64) -> Self {
        let whole = if total.is_finite() && total > 0.0 {
            total.floor() as u64
        } else {
            0
        };

        Self {
            hours: whole / SECONDS_PER_HOUR,
            minutes: (whole % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: whole % SECONDS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours, {} minutes, {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Aggregate trip durations in seconds, with their breakdowns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripDurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    pub min_seconds: f64,
    pub total: DurationBreakdown,
    pub mean: DurationBreakdown,
    pub min: DurationBreakdown,
}

pub fn trip_duration_stats(table: &TripTable) -> Result<TripDurationStats> {
    ensure_rows(table, "trip duration statistics")?;

    let durations = table.records().iter().map(|r| r.trip_duration);
    let total_seconds: f64 = durations.clone().sum();
    let min_seconds = durations.fold(f64::INFINITY, f64::min);
    // mean before decomposition
    let mean_seconds = total_seconds / table.len() as f64;

    Ok(TripDurationStats {
        total_seconds,
        mean_seconds,
        min_seconds,
        total: DurationBreakdown::from_seconds(total_seconds),
        mean: DurationBreakdown::from_seconds(mean_seconds),
        min: DurationBreakdown::from_seconds(min_seconds),
    })
}
