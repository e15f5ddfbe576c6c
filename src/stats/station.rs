//! Most popular stations and trip.

use super::{ensure_rows, stable_mode};
use crate::error::Result;
use crate::models::TripTable;
use serde::Serialize;

/// Most used start station, end station and ordered station pair.
///
/// Missing station values are skipped; a field is `None` only when every
/// row lacks the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub most_common_start_station: Option<String>,
    pub most_common_end_station: Option<String>,
    /// Formatted as `"{start} -> {end}"`
    pub most_common_trip: Option<String>,
}

pub fn station_stats(table: &TripTable) -> Result<StationStats> {
    ensure_rows(table, "station statistics")?;

    let records = table.records();
    let start = stable_mode(records.iter().filter_map(|r| r.start_station.as_deref()));
    let end = stable_mode(records.iter().filter_map(|r| r.end_station.as_deref()));
    let trip = stable_mode(records.iter().filter_map(|r| r.trip_label()));

    Ok(StationStats {
        most_common_start_station: start.map(str::to_string),
        most_common_end_station: end.map(str::to_string),
        most_common_trip: trip,
    })
}
