//! Month and weekday filtering of a loaded trip table.

use crate::models::{DayFilter, MonthFilter, TripTable};
use tracing::debug;

/// Rows whose derived month and weekday match the selections.
///
/// `All` disables a predicate; both predicates compose. The input table is
/// left untouched and an empty result is a valid outcome.
pub fn filter(table: &TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    if month == MonthFilter::All && day == DayFilter::All {
        return table.clone();
    }

    let records = table
        .records()
        .iter()
        .filter(|record| month.matches(&record.month) && day.matches(&record.day_of_week))
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        "Filter month={} day={} kept {}/{} trips",
        month,
        day,
        records.len(),
        table.len()
    );
    table.with_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, SelectableMonth, TripRecord};
    use chrono::{NaiveDate, Weekday};

    fn trip(month: u32, day: u32) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, month, day)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        TripRecord::new(start, 120.0, "Clark St", "Lake St", "Subscriber")
    }

    fn sample_table() -> TripTable {
        // 2017-01-02 Monday, 2017-01-03 Tuesday, 2017-02-06 Monday, 2017-06-30 Friday
        TripTable::new(
            City::Chicago,
            vec![trip(1, 2), trip(1, 3), trip(2, 6), trip(6, 30)],
            true,
            true,
        )
    }

    #[test]
    fn test_all_all_keeps_everything() {
        let table = sample_table();
        assert_eq!(filter(&table, MonthFilter::All, DayFilter::All), table);
    }

    #[test]
    fn test_month_and_day_compose() {
        let table = sample_table();

        let only_january = MonthFilter::Only(SelectableMonth::January);

        let january = filter(&table, only_january, DayFilter::All);
        assert_eq!(january.len(), 2);
        assert!(january.records().iter().all(|r| r.month == "january"));

        let mondays = filter(&table, MonthFilter::All, DayFilter::Only(Weekday::Mon));
        assert_eq!(mondays.len(), 2);

        let january_mondays = filter(&table, only_january, DayFilter::Only(Weekday::Mon));
        assert_eq!(january_mondays.len(), 1);
        assert_eq!(january_mondays.records()[0].day_of_week, "monday");

        // input untouched
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let table = sample_table();
        let empty = filter(
            &table,
            MonthFilter::Only(SelectableMonth::April),
            DayFilter::All,
        );
        assert!(empty.is_empty());
        assert!(empty.has_gender());
    }
}
