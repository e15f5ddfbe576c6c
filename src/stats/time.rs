//! Most frequent times of travel.

use super::{ensure_rows, stable_mode};
use crate::error::{BikeshareError, Result};
use crate::models::TripTable;
use serde::Serialize;

/// Most common month, weekday and start hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// Lowercase month name
    pub most_common_month: String,
    /// Lowercase weekday name
    pub most_common_day: String,
    /// Start hour, 0-23
    pub most_common_hour: u32,
}

pub fn time_stats(table: &TripTable) -> Result<TimeStats> {
    const STAGE: &str = "time of travel statistics";
    ensure_rows(table, STAGE)?;

    let records = table.records();
    let empty = || BikeshareError::EmptyDataset { stage: STAGE };

    let most_common_month = stable_mode(records.iter().map(|r| r.month.as_str())).ok_or_else(empty)?;
    let most_common_day =
        stable_mode(records.iter().map(|r| r.day_of_week.as_str())).ok_or_else(empty)?;
    let most_common_hour = stable_mode(records.iter().map(|r| r.hour)).ok_or_else(empty)?;

    Ok(TimeStats {
        most_common_month: most_common_month.to_string(),
        most_common_day: most_common_day.to_string(),
        most_common_hour,
    })
}
