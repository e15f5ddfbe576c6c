//! User type, gender and birth year breakdowns.

use super::{ensure_rows, stable_mode, value_counts};
use crate::error::Result;
use crate::models::TripTable;
use serde::Serialize;

/// Count and share of one category value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub label: String,
    pub count: usize,
    /// Percentage of all trips in the table, rounded to two decimals
    pub percentage: f64,
}

/// Earliest, most recent and most common year of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Demographic breakdown of the trips in a table.
///
/// `genders` and `birth_years` are `None` when the city does not record
/// them, which is reported as "not available" rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub total_trips: usize,
    /// Descending by count; rows without a user type are not listed
    pub user_types: Vec<CategoryShare>,
    pub genders: Option<Vec<CategoryShare>>,
    pub birth_years: Option<BirthYearStats>,
}

pub fn user_stats(table: &TripTable) -> Result<UserStats> {
    ensure_rows(table, "user statistics")?;

    let records = table.records();
    let total_trips = table.len();

    let user_types = shares(
        records.iter().filter_map(|r| r.user_type.as_deref()),
        total_trips,
    );

    let genders = table.has_gender().then(|| {
        shares(
            records.iter().filter_map(|r| r.gender.as_deref()),
            total_trips,
        )
    });

    let birth_years = if table.has_birth_year() {
        birth_year_stats(records.iter().filter_map(|r| r.birth_year))
    } else {
        None
    };

    Ok(UserStats {
        total_trips,
        user_types,
        genders,
        birth_years,
    })
}

/// Shares are taken against `total`, not against the non-missing values
fn shares<'a>(values: impl Iterator<Item = &'a str>, total: usize) -> Vec<CategoryShare> {
    value_counts(values)
        .into_iter()
        .map(|(label, count)| CategoryShare {
            label: label.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// `None` when every birth year is missing
fn birth_year_stats(years: impl Iterator<Item = i32> + Clone) -> Option<BirthYearStats> {
    Some(BirthYearStats {
        earliest: years.clone().min()?,
        most_recent: years.clone().max()?,
        most_common: stable_mode(years)?,
    })
}
