//! Error handling for bikeshare analysis operations.
//!
//! Every variant names the stage that failed so the console can report
//! loading, filtering and statistics failures distinctly.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error while reading trip data: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Loading failed: dataset for {city} not found at path: {path}")]
    DatasetNotFound { city: String, path: PathBuf },

    #[error("Loading failed: schema error in {path} - {reason}")]
    Schema { path: PathBuf, reason: String },

    #[error("Loading failed: malformed start time '{value}' at row {row} in {path}")]
    MalformedTimestamp {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("Invalid {kind} filter '{value}', expected one of: {expected}")]
    InvalidFilter {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("No data available for {stage}: the selected filters matched zero trips")]
    EmptyDataset { stage: &'static str },
}

impl BikeshareError {
    /// True for outcomes of a valid filter that simply matched nothing
    pub fn is_empty_dataset(&self) -> bool {
        matches!(self, BikeshareError::EmptyDataset { .. })
    }
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
