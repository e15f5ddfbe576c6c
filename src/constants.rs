//! Application constants for the bikeshare explorer
//!
//! This module contains the filter keyword, the calendar enumerations the
//! datasets cover, column names and presentation defaults.

// =============================================================================
// Filters
// =============================================================================

/// Keyword that disables a month or day predicate
pub const ALL_FILTER: &str = "all";

// =============================================================================
// Calendar Enumerations
// =============================================================================

/// Calendar month names, January first
pub const CALENDAR_MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of leading months covered by the source data (January to June)
pub const SELECTABLE_MONTH_COUNT: usize = 6;

/// Weekdays in display order (Monday first)
pub const WEEKDAY_NAMES: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// =============================================================================
// Timestamp Parsing
// =============================================================================

/// Start time formats accepted by the loader, tried in order
pub const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names in the city trip files
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";

    // Present in some cities only
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    /// Columns every city file must provide
    pub const REQUIRED: &[&str] = &[
        START_TIME,
        TRIP_DURATION,
        START_STATION,
        END_STATION,
        USER_TYPE,
    ];

    /// Header prefix pandas writes for an unnamed index column
    pub const UNNAMED_PREFIX: &str = "Unnamed";
}

// =============================================================================
// Presentation Defaults
// =============================================================================

/// Rows shown per raw-data page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Maximum bar length in the usage charts
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Character used to draw chart bars
pub const BAR_CHAR: char = '*';

/// Width of the label column in the usage charts
pub const CHART_LABEL_WIDTH: usize = 15;

/// Section separator width
pub const SEPARATOR_WIDTH: usize = 40;

/// Separator between start and end station in a trip label
pub const TRIP_SEPARATOR: &str = " -> ";
