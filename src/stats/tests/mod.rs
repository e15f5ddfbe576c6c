//! Tests for the statistics engine
//!
//! Builds small in-memory trip tables so each routine can be checked
//! against hand-computed results.

pub mod histogram_tests;
pub mod station_tests;
pub mod time_tests;

use crate::models::{City, TripRecord, TripTable};
use chrono::{NaiveDate, NaiveDateTime};

/// Timestamp helper: `at(month, day, hour)` in 2017
pub fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, month, day)
        .unwrap()
        .and_hms_opt(hour, 30, 0)
        .unwrap()
}

/// Trip with fixed stations and user type
pub fn trip(start: NaiveDateTime, duration: f64) -> TripRecord {
    TripRecord::new(start, duration, "Canal St", "Clinton St", "Subscriber")
}

/// Trip between two named stations
pub fn trip_between(from: &str, to: &str) -> TripRecord {
    TripRecord::new(at(3, 1, 8), 300.0, from, to, "Subscriber")
}

/// Table with gender and birth year columns
pub fn full_table(records: Vec<TripRecord>) -> TripTable {
    TripTable::new(City::Chicago, records, true, true)
}

/// Table for a city without demographic columns
pub fn washington_table(records: Vec<TripRecord>) -> TripTable {
    TripTable::new(City::Washington, records, false, false)
}

pub fn empty_table() -> TripTable {
    full_table(Vec::new())
}
