//! Tests for station popularity

use super::*;
use crate::models::TripRecord;
use crate::stats::station_stats;

#[test]
fn test_station_stats() {
    let table = full_table(vec![
        trip_between("Streeter Dr", "Lake Shore Dr"),
        trip_between("Clark St", "Streeter Dr"),
        trip_between("Streeter Dr", "Lake Shore Dr"),
        trip_between("Clark St", "Lake Shore Dr"),
        trip_between("Clark St", "Wells St"),
    ]);

    let stats = station_stats(&table).unwrap();
    assert_eq!(stats.most_common_start_station.as_deref(), Some("Clark St"));
    assert_eq!(stats.most_common_end_station.as_deref(), Some("Lake Shore Dr"));
    assert_eq!(
        stats.most_common_trip.as_deref(),
        Some("Streeter Dr -> Lake Shore Dr")
    );
}

#[test]
fn test_trip_pair_is_ordered() {
    // A->B and B->A are different trips
    let table = full_table(vec![
        trip_between("B", "A"),
        trip_between("A", "B"),
        trip_between("A", "B"),
    ]);

    assert_eq!(
        station_stats(&table).unwrap().most_common_trip.as_deref(),
        Some("A -> B")
    );
}

#[test]
fn test_missing_stations_are_skipped() {
    // leading row lost both stations and forward-fill had nothing to copy
    let table = full_table(vec![
        TripRecord::from_parts(at(3, 1, 8), 300.0, None, None, Some("Subscriber".into())),
        TripRecord::from_parts(at(3, 1, 8), 300.0, None, None, Some("Subscriber".into())),
        trip_between("Clark St", "Wells St"),
    ]);

    let stats = station_stats(&table).unwrap();
    assert_eq!(stats.most_common_start_station.as_deref(), Some("Clark St"));
    assert_eq!(stats.most_common_end_station.as_deref(), Some("Wells St"));
    assert_eq!(stats.most_common_trip.as_deref(), Some("Clark St -> Wells St"));
}

#[test]
fn test_station_column_entirely_missing() {
    let table = full_table(vec![TripRecord::from_parts(
        at(3, 1, 8),
        300.0,
        None,
        Some("Wells St".into()),
        None,
    )]);

    let stats = station_stats(&table).unwrap();
    assert_eq!(stats.most_common_start_station, None);
    assert_eq!(stats.most_common_end_station.as_deref(), Some("Wells St"));
    assert_eq!(stats.most_common_trip, None);
}

#[test]
fn test_station_stats_empty_table() {
    let error = station_stats(&empty_table()).unwrap_err();
    assert!(error.is_empty_dataset());
    assert!(error.to_string().contains("station statistics"));
}
