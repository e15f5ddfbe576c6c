//! Statistics engine for filtered trip tables
//!
//! Five independent, order-insensitive routines over a [`TripTable`]:
//!
//! - [`time`] - most common month, weekday and start hour
//! - [`station`] - most popular start station, end station and trip
//! - [`duration`] - total, mean and minimum trip duration
//! - [`users`] - user type, gender and birth year breakdowns
//! - [`histogram`] - trip counts per month (January to June) and weekday
//!
//! None of the routines mutate the table. Every routine except the
//! histogram returns [`BikeshareError::EmptyDataset`] for a table with zero
//! rows, since a mode, mean or minimum is undefined there.
//!
//! Modes are stable: when several values share the highest count, the one
//! that appears first in table order wins.
//!
//! [`TripTable`]: crate::models::TripTable
//! [`BikeshareError::EmptyDataset`]: crate::error::BikeshareError::EmptyDataset

pub mod duration;
pub mod histogram;
pub mod station;
pub mod time;
pub mod users;

#[cfg(test)]
pub mod tests;

pub use duration::{DurationBreakdown, TripDurationStats, trip_duration_stats};
pub use histogram::{UsageHistogram, scaled_bar_length, usage_histogram};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use users::{BirthYearStats, CategoryShare, UserStats, user_stats};

use crate::error::{BikeshareError, Result};
use crate::models::TripTable;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts in descending order; equal counts keep first-seen order
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match positions.get(&value) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, ties resolved by first occurrence
pub fn stable_mode<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

/// Fail with `EmptyDataset` for the named stage when the table has no rows
fn ensure_rows(table: &TripTable, stage: &'static str) -> Result<()> {
    if table.is_empty() {
        Err(BikeshareError::EmptyDataset { stage })
    } else {
        Ok(())
    }
}
