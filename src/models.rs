//! Core data structures and types for bikeshare analysis.
//!
//! Defines the supported cities, the month/day filter selections, the trip
//! record with its derived calendar fields, and the immutable trip table
//! every statistic is computed from.

use crate::constants::{ALL_FILTER, CALENDAR_MONTH_NAMES, SELECTABLE_MONTH_COUNT, WEEKDAY_NAMES};
use crate::error::{BikeshareError, Result};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cities with a bundled trip dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase key used for prompting and file lookup
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// CSV file name holding this city's trips
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|city| city.key() == wanted)
            .ok_or_else(|| BikeshareError::InvalidFilter {
                kind: "city",
                value: s.to_string(),
                expected: City::ALL
                    .iter()
                    .map(|c| c.display_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// A month the trip data covers, January to June
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectableMonth {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl SelectableMonth {
    pub const ALL: [SelectableMonth; SELECTABLE_MONTH_COUNT] = [
        SelectableMonth::January,
        SelectableMonth::February,
        SelectableMonth::March,
        SelectableMonth::April,
        SelectableMonth::May,
        SelectableMonth::June,
    ];

    /// 1-based calendar month number
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Capitalized month name
    pub fn name(&self) -> &'static str {
        CALENDAR_MONTH_NAMES[*self as usize]
    }
}

/// Month selection: either every month or one of January to June
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MonthFilter {
    #[default]
    All,
    Only(SelectableMonth),
}

impl MonthFilter {
    /// Build a filter from a 1-based month number
    pub fn from_number(month: u32) -> Result<Self> {
        month
            .checked_sub(1)
            .and_then(|index| SelectableMonth::ALL.get(index as usize))
            .map(|month| MonthFilter::Only(*month))
            .ok_or_else(|| invalid_month(&month.to_string()))
    }

    /// Capitalized month name, `None` for `All`
    pub fn name(&self) -> Option<&'static str> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Only(month) => Some(month.name()),
        }
    }

    /// Case-insensitive match against a derived month name
    pub fn matches(&self, month: &str) -> bool {
        match self.name() {
            None => true,
            Some(name) => name.eq_ignore_ascii_case(month),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(ALL_FILTER))
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case(ALL_FILTER) {
            return Ok(MonthFilter::All);
        }
        SelectableMonth::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(wanted))
            .map(MonthFilter::Only)
            .ok_or_else(|| invalid_month(s))
    }
}

fn invalid_month(value: &str) -> BikeshareError {
    BikeshareError::InvalidFilter {
        kind: "month",
        value: value.to_string(),
        expected: format!(
            "{}, {}",
            CALENDAR_MONTH_NAMES[..SELECTABLE_MONTH_COUNT].join(", "),
            ALL_FILTER
        ),
    }
}

/// Weekday selection: either every day or a single weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Capitalized weekday name, `None` for `All`
    pub fn name(&self) -> Option<&'static str> {
        match self {
            DayFilter::All => None,
            DayFilter::Only(day) => Some(weekday_name(*day)),
        }
    }

    /// Case-insensitive match against a derived weekday name
    pub fn matches(&self, day: &str) -> bool {
        match self.name() {
            None => true,
            Some(name) => name.eq_ignore_ascii_case(day),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(ALL_FILTER))
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case(ALL_FILTER) {
            return Ok(DayFilter::All);
        }
        WEEKDAY_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(wanted))
            .map(|index| DayFilter::Only(WEEKDAYS[index]))
            .ok_or_else(|| BikeshareError::InvalidFilter {
                kind: "day",
                value: s.to_string(),
                expected: format!("{}, {}", WEEKDAY_NAMES.join(", "), ALL_FILTER),
            })
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Capitalized name for a 1-based calendar month
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| CALENDAR_MONTH_NAMES.get(index as usize))
        .copied()
}

/// Capitalized weekday name
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// One city/month/day selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (month: {}, day: {})", self.city, self.month, self.day)
    }
}

/// A single trip with calendar fields derived from its start time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    pub trip_duration: f64,
    /// `None` when the file's leading rows leave nothing to forward-fill from
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Lowercase full month name
    pub month: String,
    /// Lowercase full weekday name
    pub day_of_week: String,
    pub hour: u32,
}

impl TripRecord {
    /// Create a record, deriving month, weekday and hour from `start_time`
    pub fn new(
        start_time: NaiveDateTime,
        trip_duration: f64,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        user_type: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            start_time,
            trip_duration,
            Some(start_station.into()),
            Some(end_station.into()),
            Some(user_type.into()),
        )
    }

    /// Create a record whose station or user type values may be missing
    pub fn from_parts(
        start_time: NaiveDateTime,
        trip_duration: f64,
        start_station: Option<String>,
        end_station: Option<String>,
        user_type: Option<String>,
    ) -> Self {
        Self {
            start_time,
            end_time: None,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender: None,
            birth_year: None,
            month: month_name(start_time.month())
                .unwrap_or_default()
                .to_lowercase(),
            day_of_week: weekday_name(start_time.weekday()).to_lowercase(),
            hour: start_time.hour(),
        }
    }

    pub fn with_end_time(mut self, end_time: Option<String>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    /// Ordered station pair label, e.g. `"A -> B"`; `None` if either end is missing
    pub fn trip_label(&self) -> Option<String> {
        let start = self.start_station.as_deref()?;
        let end = self.end_station.as_deref()?;
        Some(format!("{}{}{}", start, crate::constants::TRIP_SEPARATOR, end))
    }
}

/// Immutable, ordered collection of trips for one city
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    records: Vec<TripRecord>,
    has_gender: bool,
    has_birth_year: bool,
}

impl TripTable {
    pub fn new(city: City, records: Vec<TripRecord>, has_gender: bool, has_birth_year: bool) -> Self {
        Self {
            city,
            records,
            has_gender,
            has_birth_year,
        }
    }

    /// New table with the same city and schema flags but different rows
    pub fn with_records(&self, records: Vec<TripRecord>) -> Self {
        Self {
            city: self.city,
            records,
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the source file carried a gender column
    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    /// Whether the source file carried a birth year column
    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }

    /// Page of rows starting at `offset`, clamped to the table bounds
    pub fn rows(&self, offset: usize, count: usize) -> &[TripRecord] {
        let start = offset.min(self.records.len());
        let end = start.saturating_add(count).min(self.records.len());
        &self.records[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_city_parsing() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!(
            "  new york city ".parse::<City>().unwrap(),
            City::NewYorkCity
        );
        assert_eq!(City::Washington.file_name(), "washington.csv");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert!(matches!(
            "boston".parse::<City>(),
            Err(BikeshareError::InvalidFilter { kind: "city", .. })
        ));
    }

    #[test]
    fn test_month_filter_only_first_half_of_year() {
        assert_eq!("all".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!(
            "MARCH".parse::<MonthFilter>().unwrap(),
            MonthFilter::Only(SelectableMonth::March)
        );
        assert!("july".parse::<MonthFilter>().is_err());
        assert!("september".parse::<MonthFilter>().is_err());
        assert!(MonthFilter::from_number(0).is_err());
        assert!(MonthFilter::from_number(7).is_err());
        assert!(MonthFilter::from_number(9).is_err());
        assert_eq!(
            MonthFilter::from_number(6).unwrap(),
            MonthFilter::Only(SelectableMonth::June)
        );
        assert_eq!(MonthFilter::Only(SelectableMonth::June).to_string(), "June");
        assert!(MonthFilter::Only(SelectableMonth::February).matches("february"));
        assert!(!MonthFilter::Only(SelectableMonth::February).matches("march"));
        assert!(MonthFilter::All.matches("anything"));
    }

    #[test]
    fn test_every_month_filter_narrows_to_one_month() {
        for (index, month) in SelectableMonth::ALL.into_iter().enumerate() {
            assert_eq!(month.number(), index as u32 + 1);
            let filter = MonthFilter::Only(month);
            let matching = CALENDAR_MONTH_NAMES
                .iter()
                .filter(|name| filter.matches(name))
                .count();
            assert_eq!(matching, 1, "{} matched {} months", month.name(), matching);
        }
    }

    #[test]
    fn test_day_filter_parsing() {
        assert_eq!("All".parse::<DayFilter>().unwrap(), DayFilter::All);
        assert_eq!(
            "sunday".parse::<DayFilter>().unwrap(),
            DayFilter::Only(Weekday::Sun)
        );
        assert!("funday".parse::<DayFilter>().is_err());
        assert!(DayFilter::Only(Weekday::Mon).matches("Monday"));
    }

    #[test]
    fn test_record_derives_calendar_fields() {
        // 2017-01-01 was a Sunday
        let record = TripRecord::new(at(2017, 1, 1, 9), 300.0, "A", "B", "Subscriber");
        assert_eq!(record.month, "january");
        assert_eq!(record.day_of_week, "sunday");
        assert_eq!(record.hour, 9);
        assert_eq!(record.trip_label().as_deref(), Some("A -> B"));

        let unknown_end =
            TripRecord::from_parts(at(2017, 1, 1, 9), 300.0, Some("A".into()), None, None);
        assert_eq!(unknown_end.trip_label(), None);
    }

    #[test]
    fn test_rows_paging_is_clamped() {
        let records: Vec<_> = (0..7)
            .map(|i| TripRecord::new(at(2017, 3, 1, i), 60.0, "A", "B", "Customer"))
            .collect();
        let table = TripTable::new(City::Chicago, records, true, true);

        assert_eq!(table.rows(0, 5).len(), 5);
        assert_eq!(table.rows(5, 5).len(), 2);
        assert!(table.rows(10, 5).is_empty());
        assert_eq!(table.rows(5, 5)[0].hour, 5);
    }
}
