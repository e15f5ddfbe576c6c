//! One analysis cycle: load, filter, then compute every statistic.
//!
//! The session owns the configuration only. Each call to [`AnalysisSession::run`]
//! builds a fresh table and report, so restarting with new filters never
//! reuses state from a previous cycle.

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::loader;
use crate::models::{FilterCriteria, TripTable};
use crate::stats::{
    StationStats, TimeStats, TripDurationStats, UsageHistogram, UserStats, station_stats,
    time_stats, trip_duration_stats, usage_histogram, user_stats,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// A computed value together with how long it took
#[derive(Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

fn timed<T>(compute: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = compute();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Every statistic for one filtered table.
///
/// Sections hold `Err(EmptyDataset)` when the filters matched no trips.
#[derive(Debug)]
pub struct AnalysisReport {
    pub criteria: FilterCriteria,
    pub trip_count: usize,
    pub histogram: UsageHistogram,
    pub time: Timed<Result<TimeStats>>,
    pub stations: Timed<Result<StationStats>>,
    pub durations: Timed<Result<TripDurationStats>>,
    pub users: Timed<Result<UserStats>>,
}

/// Runs analysis cycles with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    config: AnalysisConfig,
}

impl AnalysisSession {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Load and filter a city's trips, showing a spinner while reading
    pub fn load(&self, criteria: &FilterCriteria) -> Result<TripTable> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Loading {} trip data...", criteria.city));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = loader::load(&self.config, criteria);
        spinner.finish_and_clear();
        result
    }

    /// Compute every statistic over an already filtered table
    pub fn analyze(&self, table: &TripTable, criteria: FilterCriteria) -> AnalysisReport {
        if table.is_empty() {
            warn!("No trips match {}", criteria);
        }

        let report = AnalysisReport {
            criteria,
            trip_count: table.len(),
            histogram: usage_histogram(table),
            time: timed(|| time_stats(table)),
            stations: timed(|| station_stats(table)),
            durations: timed(|| trip_duration_stats(table)),
            users: timed(|| user_stats(table)),
        };

        debug!(
            "Statistics for {} trips computed in {:?}",
            report.trip_count,
            report.time.elapsed
                + report.stations.elapsed
                + report.durations.elapsed
                + report.users.elapsed
        );
        report
    }

    /// Load, filter and analyze; the table is returned for raw-data browsing
    pub fn run(&self, criteria: FilterCriteria) -> Result<(TripTable, AnalysisReport)> {
        let table = self.load(&criteria)?;
        let report = self.analyze(&table, criteria);
        Ok((table, report))
    }
}
