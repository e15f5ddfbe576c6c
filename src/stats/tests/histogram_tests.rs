//! Tests for the month/day usage histogram and bar scaling

use super::*;
use crate::stats::{scaled_bar_length, usage_histogram};

#[test]
fn test_histogram_is_complete_and_ordered() {
    // 2017-01-02 Monday, 2017-01-03 Tuesday, 2017-06-04 Sunday
    let table = full_table(vec![
        trip(at(1, 2, 8), 60.0),
        trip(at(1, 3, 8), 60.0),
        trip(at(6, 4, 8), 60.0),
    ]);

    let histogram = usage_histogram(&table);

    let months: Vec<_> = histogram.months.iter().map(|(m, _)| *m).collect();
    assert_eq!(
        months,
        ["January", "February", "March", "April", "May", "June"]
    );
    assert_eq!(histogram.days.len(), 7);
    assert_eq!(histogram.days[0].0, "Monday");
    assert_eq!(histogram.days[6].0, "Sunday");

    assert_eq!(histogram.month_count("January"), Some(2));
    assert_eq!(histogram.month_count("March"), Some(0));
    assert_eq!(histogram.month_count("june"), Some(1));
    assert_eq!(histogram.day_count("Monday"), Some(1));
    assert_eq!(histogram.day_count("Sunday"), Some(1));
    assert_eq!(histogram.day_count("Friday"), Some(0));
}

#[test]
fn test_histogram_of_empty_table_is_zero_filled() {
    let histogram = usage_histogram(&empty_table());
    assert_eq!(histogram.months.len(), 6);
    assert_eq!(histogram.days.len(), 7);
    assert!(histogram.months.iter().all(|(_, count)| *count == 0));
    assert!(histogram.days.iter().all(|(_, count)| *count == 0));
}

#[test]
fn test_months_after_june_are_not_charted() {
    let table = full_table(vec![trip(at(8, 1, 8), 60.0)]);
    let histogram = usage_histogram(&table);
    assert_eq!(histogram.months.iter().map(|(_, c)| c).sum::<usize>(), 0);
    assert_eq!(histogram.days.iter().map(|(_, c)| c).sum::<usize>(), 1);
}

#[test]
fn test_bar_scaling() {
    assert_eq!(scaled_bar_length(10, 10, 50), 50);
    assert_eq!(scaled_bar_length(5, 10, 50), 25);
    assert_eq!(scaled_bar_length(1, 3, 50), 16);
    assert_eq!(scaled_bar_length(0, 10, 50), 0);
    assert_eq!(scaled_bar_length(0, 0, 50), 0);
}
