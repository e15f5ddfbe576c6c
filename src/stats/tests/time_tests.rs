//! Tests for the most frequent times of travel

use super::*;
use crate::error::BikeshareError;
use crate::stats::time_stats;

#[test]
fn test_time_stats_modes() {
    // 2017-03-06 Monday, 2017-03-07 Tuesday, 2017-05-01 Monday
    let table = full_table(vec![
        trip(at(3, 6, 17), 100.0),
        trip(at(3, 7, 8), 100.0),
        trip(at(5, 1, 17), 100.0),
        trip(at(3, 6, 9), 100.0),
    ]);

    let stats = time_stats(&table).unwrap();
    assert_eq!(stats.most_common_month, "march");
    assert_eq!(stats.most_common_day, "monday");
    assert_eq!(stats.most_common_hour, 17);
}

#[test]
fn test_time_stats_hour_tie_uses_table_order() {
    let table = full_table(vec![
        trip(at(1, 2, 23), 60.0),
        trip(at(1, 2, 7), 60.0),
        trip(at(1, 2, 7), 60.0),
        trip(at(1, 2, 23), 60.0),
    ]);

    assert_eq!(time_stats(&table).unwrap().most_common_hour, 23);
}

#[test]
fn test_time_stats_empty_table() {
    let result = time_stats(&empty_table());
    assert!(matches!(result, Err(BikeshareError::EmptyDataset { .. })));
}
