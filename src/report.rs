//! Console rendering of analysis results.
//!
//! Every function returns the text to print, so the interactive loop decides
//! where it goes and tests can inspect it.

use crate::constants::{BAR_CHAR, CHART_LABEL_WIDTH, SEPARATOR_WIDTH};
use crate::error::{BikeshareError, Result};
use crate::models::{TripRecord, TripTable};
use crate::session::{AnalysisReport, Timed};
use crate::stats::{
    CategoryShare, StationStats, TimeStats, TripDurationStats, UsageHistogram, UserStats,
    scaled_bar_length,
};
use colored::*;

/// Message shown in place of a statistic when the filters matched nothing
pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

/// Placeholder for a value that is missing from every selected row
const NOT_AVAILABLE: &str = "not available";

/// Placeholder for a missing cell in raw rows
const MISSING_CELL: &str = "-";

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Full report: usage charts first, then the four statistics sections
pub fn render_report(report: &AnalysisReport, bar_width: usize) -> String {
    let mut out = format!(
        "{} {} ({} trips)\n",
        "Analyzing".bright_green().bold(),
        report.criteria,
        report.trip_count
    );
    out.push_str(&render_histogram(&report.histogram, bar_width));
    out.push_str(&render_section(
        "Calculating The Most Frequent Times of Travel...",
        &report.time,
        render_time_stats,
    ));
    out.push_str(&render_section(
        "Calculating The Most Popular Stations and Trip...",
        &report.stations,
        render_station_stats,
    ));
    out.push_str(&render_section(
        "Calculating Trip Duration...",
        &report.durations,
        render_duration_stats,
    ));
    out.push_str(&render_section(
        "Calculating User Stats...",
        &report.users,
        render_user_stats,
    ));
    out
}

fn render_section<T>(
    title: &str,
    section: &Timed<Result<T>>,
    render: impl Fn(&T) -> String,
) -> String {
    let body = match &section.value {
        Ok(value) => render(value),
        Err(error) => render_error(error),
    };
    format!(
        "\n{}\n\n{}\nThis took {} seconds.\n{}\n",
        title.bright_yellow(),
        body,
        section.elapsed.as_secs_f64(),
        separator()
    )
}

/// One-line description of a failure; empty selections read as "no data"
pub fn render_error(error: &BikeshareError) -> String {
    if error.is_empty_dataset() {
        format!("{}\n", NO_DATA_MESSAGE.bright_red())
    } else {
        format!("{} {}\n", "Error:".bright_red().bold(), error)
    }
}

pub fn render_time_stats(stats: &TimeStats) -> String {
    format!(
        "Most common month: {}\nMost common day of week: {}\nMost common start hour: {} o'clock\n",
        stats.most_common_month, stats.most_common_day, stats.most_common_hour
    )
}

pub fn render_station_stats(stats: &StationStats) -> String {
    format!(
        "Most popular start station: {}\nMost popular end station: {}\nMost frequent trip: {}\n",
        stats
            .most_common_start_station
            .as_deref()
            .unwrap_or(NOT_AVAILABLE),
        stats
            .most_common_end_station
            .as_deref()
            .unwrap_or(NOT_AVAILABLE),
        stats.most_common_trip.as_deref().unwrap_or(NOT_AVAILABLE)
    )
}

pub fn render_duration_stats(stats: &TripDurationStats) -> String {
    format!(
        "Total travel time: {}\nMean travel time: {}\nMinimum travel time: {}\n",
        stats.total, stats.mean, stats.min
    )
}

pub fn render_user_stats(stats: &UserStats) -> String {
    let mut out = format!("User types:\n{}", render_shares(&stats.user_types));

    match &stats.genders {
        Some(genders) => {
            out.push_str("\nGender:\n");
            out.push_str(&render_shares(genders));
        }
        None => out.push_str("\nGender data not available.\n"),
    }

    match &stats.birth_years {
        Some(years) => out.push_str(&format!(
            "\nYear of birth stats:\n  Earliest year: {}\n  Most recent year: {}\n  Most common year: {}\n",
            years.earliest, years.most_recent, years.most_common
        )),
        None => out.push_str("\nYear of birth data not available.\n"),
    }
    out
}

fn render_shares(shares: &[CategoryShare]) -> String {
    shares
        .iter()
        .map(|share| {
            format!(
                "  {}: {} ({:.2}%)\n",
                share.label, share.count, share.percentage
            )
        })
        .collect()
}

/// Month and weekday bar charts
pub fn render_histogram(histogram: &UsageHistogram, bar_width: usize) -> String {
    let mut out = render_bar_chart(
        "Bike Usage by Month",
        "Month Usage Graph",
        &histogram.months,
        bar_width,
    );
    out.push_str(&render_bar_chart(
        "Bike Usage by Day",
        "Day Usage Graph",
        &histogram.days,
        bar_width,
    ));
    out
}

/// Text bar chart with bars scaled against the largest count
pub fn render_bar_chart(
    title: &str,
    label: &str,
    entries: &[(&str, usize)],
    bar_width: usize,
) -> String {
    let max = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);

    let mut out = format!("\n{}\n{}\n{}\n", title.bright_green().bold(), label, separator());
    for (name, count) in entries {
        let bar = BAR_CHAR
            .to_string()
            .repeat(scaled_bar_length(*count, max, bar_width));
        out.push_str(&format!(
            "{:<width$}: {} ({})\n",
            name,
            bar.bright_cyan(),
            count,
            width = CHART_LABEL_WIDTH
        ));
    }
    out
}

/// One page of raw trips, numbered from `offset`
pub fn render_rows(table: &TripTable, offset: usize, rows: &[TripRecord]) -> String {
    rows.iter()
        .enumerate()
        .map(|(index, record)| {
            format!(
                "{:>6}  {}\n",
                offset + index,
                row_cells(table, record).join(" | ")
            )
        })
        .collect()
}

fn row_cells(table: &TripTable, record: &TripRecord) -> Vec<String> {
    let cell = |value: Option<&str>| value.unwrap_or(MISSING_CELL).to_string();

    let mut cells = vec![
        record.start_time.to_string(),
        cell(record.end_time.as_deref()),
        format!("{}s", record.trip_duration),
        cell(record.start_station.as_deref()),
        cell(record.end_station.as_deref()),
        cell(record.user_type.as_deref()),
    ];
    if table.has_gender() {
        cells.push(cell(record.gender.as_deref()));
    }
    if table.has_birth_year() {
        cells.push(
            record
                .birth_year
                .map_or_else(|| MISSING_CELL.to_string(), |year| year.to_string()),
        );
    }
    cells.push(record.month.clone());
    cells.push(record.day_of_week.clone());
    cells.push(record.hour.to_string());
    cells
}
