//! City dataset loading and normalization.
//!
//! Reads a city's trip CSV with Polars, drops the pandas index artifact,
//! forward-fills missing values, and materializes a typed [`TripTable`]
//! with calendar fields derived once from each start time.

use crate::config::AnalysisConfig;
use crate::constants::columns;
use crate::error::{BikeshareError, Result};
use crate::filter::filter;
use crate::models::{City, FilterCriteria, TripRecord, TripTable};
use chrono::NaiveDateTime;
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load a city's trips and apply the month/day filters
pub fn load(config: &AnalysisConfig, criteria: &FilterCriteria) -> Result<TripTable> {
    let table = load_city(config, criteria.city)?;
    let filtered = filter(&table, criteria.month, criteria.day);

    info!(
        "Loaded {} trips for {}, {} after filtering",
        table.len(),
        criteria,
        filtered.len()
    );
    Ok(filtered)
}

/// Load every trip for a city without filtering
pub fn load_city(config: &AnalysisConfig, city: City) -> Result<TripTable> {
    let path = config.city_path(city);
    if !path.is_file() {
        return Err(BikeshareError::DatasetNotFound {
            city: city.display_name().to_string(),
            path,
        });
    }

    let frame = read_trip_frame(&path)?;
    let frame = normalize_frame(frame, &path)?;
    build_table(&frame, city, &path, &config.timestamp_formats)
}

/// Read the raw CSV with every column as text
fn read_trip_frame(path: &Path) -> Result<DataFrame> {
    debug!("Reading trip data from {}", path.display());

    // Schema inference disabled: stations and categories stay strings, numbers
    // are parsed explicitly so bad values surface as schema errors
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!(
        "Read {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Drop the index artifact, check required columns and forward-fill blanks
fn normalize_frame(df: DataFrame, path: &Path) -> Result<DataFrame> {
    let df = match index_artifact(&df) {
        Some(name) => {
            debug!("Dropping index column '{}'", name);
            df.drop(&name)?
        }
        None => df,
    };

    let missing: Vec<&str> = columns::REQUIRED
        .iter()
        .copied()
        .filter(|name| df.column(name).is_err())
        .collect();
    if !missing.is_empty() {
        return Err(BikeshareError::Schema {
            path: path.to_path_buf(),
            reason: format!("missing required columns: {}", missing.join(", ")),
        });
    }

    // Leading nulls have no predecessor and stay null
    Ok(blank_to_null(&df)?.fill_null(FillNullStrategy::Forward(None))?)
}

/// Trim every cell and turn whitespace-only cells into nulls
fn blank_to_null(df: &DataFrame) -> Result<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(|column| {
            let cleaned: StringChunked = column
                .as_materialized_series()
                .str()?
                .into_iter()
                .map(|value| value.map(str::trim).filter(|value| !value.is_empty()))
                .collect();
            Ok(cleaned.with_name(column.name().clone()).into_column())
        })
        .collect::<Result<Vec<Column>>>()?;

    Ok(DataFrame::new(columns)?)
}

/// Name of a leading unnamed index column, if the file carries one
fn index_artifact(df: &DataFrame) -> Option<String> {
    let first = df.get_column_names().first()?.to_string();
    let trimmed = first.trim();

    // Polars names an empty header field `column_1`
    let is_artifact =
        trimmed.is_empty() || trimmed.starts_with(columns::UNNAMED_PREFIX) || trimmed == "column_1";
    is_artifact.then_some(first)
}

/// Text values of a column, `None` for nulls
fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    Ok(series
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

fn optional_text_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<String>>>> {
    if df.column(name).is_err() {
        debug!("Optional column '{}' not present", name);
        return Ok(None);
    }
    text_column(df, name).map(Some)
}

/// Assemble typed records from the normalized frame
fn build_table(
    df: &DataFrame,
    city: City,
    path: &Path,
    formats: &[String],
) -> Result<TripTable> {
    let start_times = text_column(df, columns::START_TIME)?;
    let durations = text_column(df, columns::TRIP_DURATION)?;
    let start_stations = text_column(df, columns::START_STATION)?;
    let end_stations = text_column(df, columns::END_STATION)?;
    let user_types = text_column(df, columns::USER_TYPE)?;
    let end_times = optional_text_column(df, columns::END_TIME)?;
    let genders = optional_text_column(df, columns::GENDER)?;
    let birth_years = optional_text_column(df, columns::BIRTH_YEAR)?;

    let mut records = Vec::with_capacity(df.height());
    for index in 0..df.height() {
        let row = index + 1;
        // A start time that is still missing here cannot be parsed either
        let raw_start = start_times[index].as_deref().unwrap_or_default();
        let start_time = parse_timestamp(raw_start, formats).ok_or_else(|| {
            BikeshareError::MalformedTimestamp {
                path: path.to_path_buf(),
                row,
                value: raw_start.to_string(),
            }
        })?;

        let raw_duration = durations[index].as_deref().unwrap_or_default();
        let trip_duration = parse_duration(raw_duration).ok_or_else(|| {
            schema_error(
                path,
                format!("invalid trip duration '{}' at row {}", raw_duration, row),
            )
        })?;

        let birth_year = match birth_years.as_ref().and_then(|years| years[index].as_deref()) {
            Some(raw) => Some(parse_birth_year(raw).ok_or_else(|| {
                schema_error(path, format!("invalid birth year '{}' at row {}", raw, row))
            })?),
            None => None,
        };

        let record = TripRecord::from_parts(
            start_time,
            trip_duration,
            start_stations[index].clone(),
            end_stations[index].clone(),
            user_types[index].clone(),
        )
        .with_end_time(end_times.as_ref().and_then(|times| times[index].clone()))
        .with_gender(genders.as_ref().and_then(|values| values[index].clone()))
        .with_birth_year(birth_year);

        records.push(record);
    }

    if records.is_empty() {
        warn!("{} contains no trips", path.display());
    }

    Ok(TripTable::new(
        city,
        records,
        genders.is_some(),
        birth_years.is_some(),
    ))
}

fn schema_error(path: &Path, reason: String) -> BikeshareError {
    BikeshareError::Schema {
        path: path.to_path_buf(),
        reason,
    }
}

/// Parse a start time using the first matching format
pub fn parse_timestamp(value: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let value = value.trim();
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Non-negative, finite duration in seconds
fn parse_duration(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
}

/// Birth years arrive as floats (`1989.0`) when the column has gaps
fn parse_birth_year(value: &str) -> Option<i32> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|year| year.is_finite())
        .map(|year| year.trunc() as i32)
}
