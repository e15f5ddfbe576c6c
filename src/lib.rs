//! Bikeshare Explorer Library
//!
//! Descriptive statistics over US bikeshare trip logs for Chicago, New York
//! City and Washington, optionally filtered by month and weekday.
//!
//! This library provides tools for:
//! - Loading a city's trip CSV with Polars, dropping index artifacts and
//!   forward-filling missing values
//! - Deriving month, weekday and start hour once per trip
//! - Filtering by month (January to June) and weekday
//! - Computing time-of-travel, station, trip duration and user statistics
//! - Counting usage per month and weekday for ASCII bar charts
//! - Paging through raw trip records

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod report;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use error::{BikeshareError, Result};
pub use filter::filter;
pub use loader::{load, load_city};
pub use models::{
    City, DayFilter, FilterCriteria, MonthFilter, SelectableMonth, TripRecord, TripTable,
};
pub use session::{AnalysisReport, AnalysisSession};
