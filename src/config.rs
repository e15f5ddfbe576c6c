//! Configuration management.
//!
//! Holds where the city datasets live, how start times are parsed and how
//! the console presents charts and raw-data pages.

use crate::constants::{DEFAULT_BAR_WIDTH, DEFAULT_PAGE_SIZE, TIMESTAMP_FORMATS};
use crate::models::City;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for a bikeshare analysis session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Directory containing the per-city CSV files
    pub data_dir: PathBuf,

    /// Rows shown per raw-data page
    pub page_size: usize,

    /// Maximum bar length in the usage charts
    pub bar_width: usize,

    /// chrono formats tried, in order, when parsing start times
    pub timestamp_formats: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
            bar_width: DEFAULT_BAR_WIDTH,
            timestamp_formats: TIMESTAMP_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl AnalysisConfig {
    /// Create configuration reading datasets from `data_dir`
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set raw-data page size (at least one row)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set maximum chart bar width
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Replace the accepted start time formats
    pub fn with_timestamp_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timestamp_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of a city's backing file
    pub fn city_path(&self, city: City) -> PathBuf {
        let path = self.data_dir.join(city.file_name());
        debug!("Resolved {} dataset to {}", city, path.display());
        path
    }
}
